//! Candidate filtering
//!
//! Narrows the candidate set to the words that would have produced the
//! observed feedback. The feedback is turned into a [`Constraints`] value once
//! and every candidate is checked against it, without re-simulating.

use crate::core::{Feedback, Mark, WORD_LENGTH, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// How many times a letter may occur in a consistent word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterBound {
    /// The letter was hit this many times and never marked absent
    AtLeast(usize),
    /// The letter was also marked absent, so the hit count is the exact total.
    /// `Exactly(0)` bans the letter.
    Exactly(usize),
}

impl LetterBound {
    #[inline]
    #[must_use]
    pub const fn admits(self, count: usize) -> bool {
        match self {
            Self::AtLeast(n) => count >= n,
            Self::Exactly(n) => count == n,
        }
    }
}

/// Everything one round of feedback says about the target
#[derive(Debug, Clone)]
pub struct Constraints {
    guess: Word,
    /// Letter pinned at each exact position
    fixed: [Option<u8>; WORD_LENGTH],
    /// Guess letter that must not sit at each present/absent position
    forbidden: [Option<u8>; WORD_LENGTH],
    bounds: FxHashMap<u8, LetterBound>,
}

impl Constraints {
    /// Derive the constraints implied by `feedback` for `guess`
    #[must_use]
    pub fn new(guess: &Word, feedback: &Feedback) -> Self {
        let mut fixed = [None; WORD_LENGTH];
        let mut forbidden = [None; WORD_LENGTH];
        let mut hits: FxHashMap<u8, usize> = FxHashMap::default();
        let mut missed: FxHashSet<u8> = FxHashSet::default();

        for (i, (&letter, &mark)) in guess.letters().iter().zip(feedback.marks()).enumerate() {
            let hit_count = hits.entry(letter).or_insert(0);
            match mark {
                Mark::Exact => {
                    fixed[i] = Some(letter);
                    *hit_count += 1;
                }
                Mark::Present => {
                    forbidden[i] = Some(letter);
                    *hit_count += 1;
                }
                Mark::Absent => {
                    forbidden[i] = Some(letter);
                    missed.insert(letter);
                }
            }
        }

        let bounds = hits
            .into_iter()
            .map(|(letter, count)| {
                let bound = if missed.contains(&letter) {
                    LetterBound::Exactly(count)
                } else {
                    LetterBound::AtLeast(count)
                };
                (letter, bound)
            })
            .collect();

        Self {
            guess: guess.clone(),
            fixed,
            forbidden,
            bounds,
        }
    }

    /// Bound on the occurrences of `letter`, if the guess contained it
    #[must_use]
    pub fn bound_for(&self, letter: u8) -> Option<LetterBound> {
        self.bounds.get(&letter).copied()
    }

    /// Check whether `word` could still be the target
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        if *word == self.guess {
            return false;
        }

        let positions_ok = word.letters().iter().enumerate().all(|(i, &letter)| {
            self.fixed[i].is_none_or(|pinned| pinned == letter)
                && self.forbidden[i] != Some(letter)
        });

        positions_ok
            && self
                .bounds
                .iter()
                .all(|(&letter, bound)| bound.admits(word.count_of(letter)))
    }
}

/// Keep the candidates consistent with `feedback` for `guess`
///
/// The guess itself is always removed. Relative order is preserved.
///
/// # Examples
/// ```
/// use wordle_guesser::core::Word;
/// use wordle_guesser::solver::{filter, simulate};
///
/// let candidates: Vec<Word> = ["crane", "slate", "plane", "grape"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("crane").unwrap();
/// let feedback = simulate(&guess, &Word::new("plane").unwrap());
///
/// let remaining = filter(&candidates, &guess, &feedback);
/// assert_eq!(remaining, vec![Word::new("plane").unwrap()]);
/// ```
#[must_use]
pub fn filter(candidates: &[Word], guess: &Word, feedback: &Feedback) -> Vec<Word> {
    let constraints = Constraints::new(guess, feedback);
    candidates
        .iter()
        .filter(|word| constraints.admits(word))
        .cloned()
        .collect()
}
