//! Word analysis command
//!
//! Reports the entropy and partition statistics of a guess against the
//! current candidate set.

use crate::core::{Word, WordError};
use crate::solver::Solver;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    /// Whether the word is itself still a candidate
    pub is_candidate: bool,
}

/// Analyze the entropy of a word against the solver's candidates
///
/// The word does not need to be in the word list.
///
/// # Errors
///
/// Returns an error if the word is not a valid game word.
pub fn analyze_word(solver: &mut Solver, word: &str) -> Result<AnalysisResult, WordError> {
    let word_obj = Word::new(word)?;
    let metrics = solver.metrics_of(&word_obj);

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: solver.candidates().len(),
        is_candidate: solver.candidates().contains(&word_obj),
    })
}
