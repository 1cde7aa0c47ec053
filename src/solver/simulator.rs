//! Feedback simulation
//!
//! Computes the feedback the game would give for a guess against a target,
//! with a process-lifetime cache keyed by the exact (guess, target) pair.

use crate::core::{Feedback, Mark, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

type PairKey = ([u8; WORD_LENGTH], [u8; WORD_LENGTH]);

/// Compute the feedback for `guess` against `target`
///
/// Duplicate letters are handled the way the game does it.
///
/// # Algorithm
/// 1. Count the letters of the target
/// 2. First pass: mark exact matches and consume one occurrence each
/// 3. Second pass: left to right, mark present while unclaimed occurrences remain
///
/// # Examples
/// ```
/// use wordle_guesser::core::{Mark, Word};
/// use wordle_guesser::solver::simulate;
///
/// let guess = Word::new("crane").unwrap();
/// let target = Word::new("plane").unwrap();
/// let feedback = simulate(&guess, &target);
///
/// assert_eq!(feedback.to_wire(&guess), "++ane");
/// assert_eq!(feedback.mark_at(0), Mark::Absent);
/// ```
#[must_use]
pub fn simulate(guess: &Word, target: &Word) -> Feedback {
    let mut marks = [Mark::Absent; WORD_LENGTH];
    let mut remaining = [0u8; 26];
    for &letter in target.letters() {
        remaining[usize::from(letter - b'a')] += 1;
    }

    for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
        if g == t {
            marks[i] = Mark::Exact;
            remaining[usize::from(g - b'a')] -= 1;
        }
    }

    for (i, &g) in guess.letters().iter().enumerate() {
        if marks[i] == Mark::Exact {
            continue;
        }
        let slot = &mut remaining[usize::from(g - b'a')];
        if *slot > 0 {
            marks[i] = Mark::Present;
            *slot -= 1;
        }
    }

    Feedback::new(marks)
}

/// Caching wrapper around [`simulate`]
///
/// Entries are never evicted: the result depends only on the pair, and the
/// number of distinct pairs is bounded by the word list size squared.
#[derive(Debug, Default)]
pub struct FeedbackSimulator {
    cache: FxHashMap<PairKey, Feedback>,
}

impl FeedbackSimulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feedback for `guess` against `target`, computed once per pair
    pub fn simulate(&mut self, guess: &Word, target: &Word) -> Feedback {
        *self
            .cache
            .entry((*guess.letters(), *target.letters()))
            .or_insert_with(|| simulate(guess, target))
    }

    /// Number of cached pairs
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
