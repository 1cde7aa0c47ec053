//! Entropy-based guess scoring
//!
//! Implements Shannon entropy over feedback distributions and the cached
//! maximum-entropy selection used every round after the opening guess.

mod calculator;
mod scorer;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, partition, shannon_entropy,
};
pub use scorer::{CandidateSnapshot, EntropyScorer};
pub use selector::Scored;
