//! Word solving command
//!
//! Plays a full game against a known target, standing in for the game itself,
//! and returns the solution path.

use crate::core::{Feedback, Word, WordError};
use crate::solver::{RoundOutcome, Solver, SolverError, simulate};
use std::fmt;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
#[derive(Debug)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    /// Feedback in the game's wire format
    pub wire: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// `None` for the opening guess
    pub entropy: Option<f64>,
}

/// Error type for the solve command
#[derive(Debug)]
pub enum SolveError {
    InvalidTarget(WordError),
    /// The target is a valid word but not in the solver's list
    UnknownTarget(String),
    Solver(SolverError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget(e) => write!(f, "invalid target word: {e}"),
            Self::UnknownTarget(word) => write!(f, "target '{word}' is not in the word list"),
            Self::Solver(e) => write!(f, "solver failed: {e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTarget(e) => Some(e),
            Self::Solver(e) => Some(e),
            Self::UnknownTarget(_) => None,
        }
    }
}

impl From<SolverError> for SolveError {
    fn from(e: SolverError) -> Self {
        Self::Solver(e)
    }
}

/// Solve a specific word, starting a fresh game on `solver`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid or not in the solver's word list
/// - The solver runs out of candidates
pub fn solve_word(solver: &mut Solver, config: SolveConfig) -> Result<SolveResult, SolveError> {
    let target = Word::new(&config.target).map_err(SolveError::InvalidTarget)?;
    if !solver.words().contains(&target) {
        return Err(SolveError::UnknownTarget(target.text().to_string()));
    }

    solver.restart();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let suggestion = solver.suggest()?;
        let feedback = simulate(&suggestion.word, &target);
        let outcome = solver.record(suggestion.word.clone(), feedback)?;

        guesses.push(GuessStep {
            wire: feedback.to_wire(&suggestion.word),
            word: suggestion.word.text().to_string(),
            feedback,
            candidates_before: suggestion.candidates,
            candidates_after: solver.candidates().len(),
            entropy: suggestion.entropy,
        });

        if outcome == RoundOutcome::Solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.text().to_string(),
    })
}
