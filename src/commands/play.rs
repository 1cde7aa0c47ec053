//! Self-play against a hidden target
//!
//! Draws the target uniformly from the word list, then plays it out like
//! [`solve_word`] does.

use super::solve::{SolveConfig, SolveError, SolveResult, solve_word};
use crate::solver::{Solver, SolverError};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Play one game against a randomly chosen word
///
/// # Errors
///
/// Returns an error if the word list is empty or the solver fails.
pub fn play_random<R: Rng + ?Sized>(
    solver: &mut Solver,
    rng: &mut R,
    max_guesses: usize,
) -> Result<SolveResult, SolveError> {
    let target = solver
        .words()
        .choose(rng)
        .ok_or(SolveError::Solver(SolverError::EmptyWordList))?
        .text()
        .to_string();

    let mut config = SolveConfig::new(target);
    config.max_guesses = max_guesses;
    solve_word(solver, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup_solver() -> Solver {
        let words = words_from_slice(&["crane", "slate", "plane", "grape", "plate", "zesty"]);
        Solver::new(words, Word::new("crane").unwrap()).unwrap()
    }

    #[test]
    fn random_target_comes_from_the_list() {
        let mut solver = setup_solver();
        let mut rng = StdRng::seed_from_u64(7);

        let result = play_random(&mut solver, &mut rng, 6).unwrap();

        assert!(solver.words().iter().any(|w| w.text() == result.target));
        assert!(result.success);
    }

    #[test]
    fn same_seed_same_game() {
        let mut solver = setup_solver();

        let first = play_random(&mut solver, &mut StdRng::seed_from_u64(42), 6).unwrap();
        let second = play_random(&mut solver, &mut StdRng::seed_from_u64(42), 6).unwrap();

        assert_eq!(first.target, second.target);
        assert_eq!(first.guesses.len(), second.guesses.len());
    }
}
