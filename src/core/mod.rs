//! Core domain types for the guessing game
//!
//! Pure value types with no solver state: words, per-position marks and the
//! feedback wire format.

mod feedback;
mod word;

pub use feedback::{ABSENT_SYMBOL, Feedback, FeedbackError, Mark, PRESENT_SYMBOL};
pub use word::{WORD_LENGTH, Word, WordError};
