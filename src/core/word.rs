//! Word representation
//!
//! A Word is a fixed-length lowercase ASCII word taken from the word list.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every game word
pub const WORD_LENGTH: usize = 5;

/// A validated game word
///
/// Ordering and hashing follow the letters, so words can be sorted into
/// order-independent snapshots and used as cache keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "word contains non-alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word, lowercasing the input
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly `WORD_LENGTH` ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { letters, text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Number of times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// Occurrence count of every letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
