//! Guess selection
//!
//! Feedback simulation, entropy scoring and candidate filtering, composed per
//! round by [`Solver`].

mod engine;
pub mod entropy;
pub mod filter;
mod simulator;

pub use engine::{DEFAULT_OPENING, RoundOutcome, Solver, SolverError, Suggestion};
pub use filter::{Constraints, LetterBound, filter};
pub use simulator::{FeedbackSimulator, simulate};
