//! Feedback patterns and their wire format
//!
//! Internally a pattern is one [`Mark`] per position. The game reports it as a
//! string where a letter means the guess letter is in the right place, `-`
//! means present elsewhere and `+` means absent. That string form only exists
//! at the boundary: [`Feedback::parse`] and [`Feedback::to_wire`].

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Wire symbol for a letter present at another position
pub const PRESENT_SYMBOL: char = '-';
/// Wire symbol for a letter absent from the target
pub const ABSENT_SYMBOL: char = '+';

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right letter, right position
    Exact,
    /// Letter occurs in the target at another position
    Present,
    /// No unclaimed occurrence of the letter in the target
    Absent,
}

impl Mark {
    /// True for `Exact` and `Present`
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Exact | Self::Present)
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

/// Error type for malformed feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength {
        expected: usize,
        found: usize,
    },
    InvalidSymbol {
        position: usize,
        symbol: char,
    },
    /// A letter was given that differs from the guess letter at that position
    LetterMismatch {
        position: usize,
        expected: char,
        found: char,
    },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => {
                write!(f, "feedback must be {expected} symbols long, got {found}")
            }
            Self::InvalidSymbol { position, symbol } => write!(
                f,
                "invalid symbol '{symbol}' at position {}; use a letter, \
                 '{PRESENT_SYMBOL}' or '{ABSENT_SYMBOL}'",
                position + 1
            ),
            Self::LetterMismatch {
                position,
                expected,
                found,
            } => write!(
                f,
                "position {} was guessed as '{expected}' but feedback says '{found}'",
                position + 1
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// All positions exact
    pub const PERFECT: Self = Self([Mark::Exact; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn mark_at(&self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of `Exact` + `Present` marks that `guess` received for `letter`
    #[must_use]
    pub fn hits_for(&self, guess: &Word, letter: u8) -> usize {
        self.0
            .iter()
            .zip(guess.letters())
            .filter(|&(mark, &l)| l == letter && mark.is_hit())
            .count()
    }

    /// Parse the game's feedback string for `guess`
    ///
    /// Leading/trailing whitespace is ignored and letters are case-insensitive.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the length is wrong, a symbol is not a letter,
    /// `-` or `+`, or a letter does not match the guess at that position.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::parse("++ane", &guess).unwrap();
    /// assert_eq!(feedback.mark_at(0), Mark::Absent);
    /// assert_eq!(feedback.mark_at(2), Mark::Exact);
    /// assert_eq!(feedback.to_wire(&guess), "++ane");
    /// ```
    pub fn parse(wire: &str, guess: &Word) -> Result<Self, FeedbackError> {
        let symbols: Vec<char> = wire.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength {
                expected: WORD_LENGTH,
                found: symbols.len(),
            });
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (position, &symbol) in symbols.iter().enumerate() {
            marks[position] = match symbol {
                PRESENT_SYMBOL => Mark::Present,
                ABSENT_SYMBOL => Mark::Absent,
                c if c.is_ascii_alphabetic() => {
                    let found = c.to_ascii_lowercase();
                    let expected = char::from(guess.letter_at(position));
                    if found != expected {
                        return Err(FeedbackError::LetterMismatch {
                            position,
                            expected,
                            found,
                        });
                    }
                    Mark::Exact
                }
                _ => return Err(FeedbackError::InvalidSymbol { position, symbol }),
            };
        }

        Ok(Self(marks))
    }

    /// Render in the game's wire format for `guess`
    #[must_use]
    pub fn to_wire(&self, guess: &Word) -> String {
        self.0
            .iter()
            .zip(guess.letters())
            .map(|(mark, &letter)| match mark {
                Mark::Exact => char::from(letter),
                Mark::Present => PRESENT_SYMBOL,
                Mark::Absent => ABSENT_SYMBOL,
            })
            .collect()
    }

    /// Render as coloured squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.to_wire(&word("zesty")), "zesty");
    }

    #[test]
    fn parse_mixed_pattern() {
        let guess = word("crane");
        let feedback = Feedback::parse("c-+n+", &guess).unwrap();
        assert_eq!(
            feedback.marks(),
            &[
                Mark::Exact,
                Mark::Present,
                Mark::Absent,
                Mark::Exact,
                Mark::Absent
            ]
        );
    }

    #[test]
    fn parse_accepts_uppercase_and_padding() {
        let guess = word("crane");
        let feedback = Feedback::parse("  CR+++ \n", &guess).unwrap();
        assert_eq!(feedback.to_wire(&guess), "cr+++");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let guess = word("crane");
        assert_eq!(
            Feedback::parse("++", &guess),
            Err(FeedbackError::InvalidLength {
                expected: 5,
                found: 2
            })
        );
        assert!(Feedback::parse("++++++", &guess).is_err());
        assert!(Feedback::parse("", &guess).is_err());
    }

    #[test]
    fn parse_rejects_invalid_symbol() {
        let guess = word("crane");
        assert_eq!(
            Feedback::parse("++*++", &guess),
            Err(FeedbackError::InvalidSymbol {
                position: 2,
                symbol: '*'
            })
        );
    }

    #[test]
    fn parse_rejects_letter_not_in_guess_position() {
        let guess = word("crane");
        assert_eq!(
            Feedback::parse("x++++", &guess),
            Err(FeedbackError::LetterMismatch {
                position: 0,
                expected: 'c',
                found: 'x'
            })
        );
    }

    #[test]
    fn hits_for_counts_exact_and_present() {
        let guess = word("speed");
        let feedback = Feedback::parse("+-e++", &guess).unwrap();
        assert_eq!(feedback.hits_for(&guess, b'e'), 1);
        assert_eq!(feedback.hits_for(&guess, b'p'), 1);
        assert_eq!(feedback.hits_for(&guess, b's'), 0);
    }

    #[test]
    fn emoji_rendering() {
        let guess = word("crane");
        let feedback = Feedback::parse("c-+n+", &guess).unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩⬜");
        assert_eq!(format!("{feedback}"), "🟩🟨⬜🟩⬜");
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = FeedbackError::InvalidSymbol {
            position: 0,
            symbol: '?',
        };
        assert!(err.to_string().contains("position 1"));
    }
}
