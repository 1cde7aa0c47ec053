//! Maximum-entropy guess selection
//!
//! Only words still in the candidate set are considered as guesses.

use super::scorer::{CandidateSnapshot, EntropyScorer};
use crate::core::Word;
use crate::solver::simulator::FeedbackSimulator;

/// A guess together with its entropy
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub word: Word,
    /// Expected information gain in bits
    pub entropy: f64,
}

impl EntropyScorer {
    /// Select the candidate with the greatest entropy
    ///
    /// A single remaining candidate is returned as-is with entropy 0 and no
    /// scoring. Ties go to the earliest word in `candidates` order. Returns
    /// `None` only for an empty set.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::Word;
    /// use wordle_guesser::solver::FeedbackSimulator;
    /// use wordle_guesser::solver::entropy::EntropyScorer;
    ///
    /// let candidates = vec![Word::new("zesty").unwrap()];
    /// let mut simulator = FeedbackSimulator::new();
    /// let mut scorer = EntropyScorer::new();
    ///
    /// let best = scorer.best_guess(&mut simulator, &candidates).unwrap();
    /// assert_eq!(best.word.text(), "zesty");
    /// assert_eq!(scorer.cache_len(), 0);
    /// ```
    pub fn best_guess(
        &mut self,
        simulator: &mut FeedbackSimulator,
        candidates: &[Word],
    ) -> Option<Scored> {
        if let [only] = candidates {
            return Some(Scored {
                word: only.clone(),
                entropy: 0.0,
            });
        }

        let snapshot = CandidateSnapshot::of(candidates);
        let mut best: Option<Scored> = None;

        for guess in candidates {
            let entropy = self.entropy_in(&snapshot, simulator, guess, candidates);
            if best.as_ref().is_none_or(|b| entropy > b.entropy) {
                best = Some(Scored {
                    word: guess.clone(),
                    entropy,
                });
            }
        }

        best
    }
}
