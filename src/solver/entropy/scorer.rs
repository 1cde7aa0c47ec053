//! Cached entropy scoring
//!
//! Entropy depends on the guess and on the exact contents of the candidate
//! set, so results are cached per content snapshot of the set.

use super::calculator::calculate_entropy;
use crate::core::{WORD_LENGTH, Word};
use crate::solver::simulator::FeedbackSimulator;
use rustc_hash::FxHashMap;

/// Immutable, order-independent view of a candidate set's contents
///
/// Two sets with the same words in any order produce equal snapshots; sets of
/// the same size with different words never do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateSnapshot(Box<[[u8; WORD_LENGTH]]>);

impl CandidateSnapshot {
    #[must_use]
    pub fn of(candidates: &[Word]) -> Self {
        let mut letters: Vec<[u8; WORD_LENGTH]> =
            candidates.iter().map(|w| *w.letters()).collect();
        letters.sort_unstable();
        Self(letters.into_boxed_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Entropy calculator with a never-evicted cache
///
/// Cache entries are keyed by (candidate snapshot, guess). A changed candidate
/// set produces a different snapshot, so stale entries are never hit.
#[derive(Debug, Default)]
pub struct EntropyScorer {
    cache: FxHashMap<CandidateSnapshot, FxHashMap<[u8; WORD_LENGTH], f64>>,
}

impl EntropyScorer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entropy of `guess` against `candidates`, in bits
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::Word;
    /// use wordle_guesser::solver::FeedbackSimulator;
    /// use wordle_guesser::solver::entropy::EntropyScorer;
    ///
    /// let candidates: Vec<Word> = ["crane", "slate", "plane", "grape"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let mut simulator = FeedbackSimulator::new();
    /// let mut scorer = EntropyScorer::new();
    /// let entropy = scorer.entropy(&mut simulator, &candidates[0], &candidates);
    /// assert!((entropy - 1.5).abs() < 1e-9);
    /// ```
    pub fn entropy(
        &mut self,
        simulator: &mut FeedbackSimulator,
        guess: &Word,
        candidates: &[Word],
    ) -> f64 {
        let snapshot = CandidateSnapshot::of(candidates);
        self.entropy_in(&snapshot, simulator, guess, candidates)
    }

    /// Entropy lookup when the caller already holds the snapshot of `candidates`
    pub(super) fn entropy_in(
        &mut self,
        snapshot: &CandidateSnapshot,
        simulator: &mut FeedbackSimulator,
        guess: &Word,
        candidates: &[Word],
    ) -> f64 {
        if let Some(&cached) = self
            .cache
            .get(snapshot)
            .and_then(|scores| scores.get(guess.letters()))
        {
            return cached;
        }

        let entropy = calculate_entropy(simulator, guess, candidates);
        if let Some(scores) = self.cache.get_mut(snapshot) {
            scores.insert(*guess.letters(), entropy);
        } else {
            let mut scores = FxHashMap::default();
            scores.insert(*guess.letters(), entropy);
            self.cache.insert(snapshot.clone(), scores);
        }
        entropy
    }

    /// Number of cached (snapshot, guess) entries
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.values().map(FxHashMap::len).sum()
    }
}
