//! Main solver interface
//!
//! One [`Solver`] plays one game at a time: it owns the candidate set, the
//! guess history and both caches. Each round the caller asks for a
//! [`Suggestion`] (or picks its own guess in manual mode) and then records the
//! feedback the game returned.

use super::entropy::{EntropyScorer, GuessMetrics, calculate_metrics};
use super::filter::filter;
use super::simulator::FeedbackSimulator;
use crate::core::{Feedback, FeedbackError, Word};
use std::fmt;

/// Opening guess used when none is configured
///
/// The best first guess does not depend on the game, so it is fixed once
/// instead of scoring the full list every game.
pub const DEFAULT_OPENING: &str = "salet";

/// Errors surfaced by the solver
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The solver was built from an empty word list
    EmptyWordList,
    /// No word is consistent with the feedback recorded so far
    NoCandidates,
    /// The last feedback eliminated every candidate
    InconsistentFeedback { guess: Word, feedback: Feedback },
    /// Feedback string was rejected before touching the candidate set
    MalformedFeedback(FeedbackError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "word list is empty"),
            Self::NoCandidates => write!(f, "no candidates remain for this game"),
            Self::InconsistentFeedback { guess, feedback } => write!(
                f,
                "feedback {} for '{guess}' is inconsistent with every known word",
                feedback.to_wire(guess)
            ),
            Self::MalformedFeedback(e) => write!(f, "malformed feedback: {e}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedFeedback(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FeedbackError> for SolverError {
    fn from(e: FeedbackError) -> Self {
        Self::MalformedFeedback(e)
    }
}

/// The guess proposed for the current round
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    /// Entropy in bits; `None` for the fixed opening guess
    pub entropy: Option<f64>,
    /// Candidates remaining when the suggestion was made
    pub candidates: usize,
}

/// Result of recording one round of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The guess was the target
    Solved,
    /// This many candidates remain
    Remaining(usize),
}

/// Per-game solver state
#[derive(Debug)]
pub struct Solver {
    words: Vec<Word>,
    opening: Word,
    candidates: Vec<Word>,
    history: Vec<(Word, Feedback)>,
    simulator: FeedbackSimulator,
    scorer: EntropyScorer,
}

impl Solver {
    /// Create a solver over `words` with a fixed opening guess
    ///
    /// The order of `words` decides entropy ties.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<Word>, opening: Word) -> Result<Self, SolverError> {
        if words.is_empty() {
            return Err(SolverError::EmptyWordList);
        }

        Ok(Self {
            candidates: words.clone(),
            words,
            opening,
            history: Vec::new(),
            simulator: FeedbackSimulator::new(),
            scorer: EntropyScorer::new(),
        })
    }

    /// Propose the guess for the current round
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` once the candidate set is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_guesser::core::Word;
    /// use wordle_guesser::solver::Solver;
    ///
    /// let words: Vec<Word> = ["crane", "slate", "plane", "grape"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let mut solver = Solver::new(words, Word::new("crane").unwrap()).unwrap();
    ///
    /// assert_eq!(solver.suggest().unwrap().word.text(), "crane");
    /// solver.record_wire(Word::new("crane").unwrap(), "++ane").unwrap();
    /// assert_eq!(solver.suggest().unwrap().word.text(), "plane");
    /// ```
    pub fn suggest(&mut self) -> Result<Suggestion, SolverError> {
        if self.candidates.is_empty() {
            return Err(SolverError::NoCandidates);
        }

        if self.history.is_empty() {
            return Ok(Suggestion {
                word: self.opening.clone(),
                entropy: None,
                candidates: self.candidates.len(),
            });
        }

        let best = self
            .scorer
            .best_guess(&mut self.simulator, &self.candidates)
            .ok_or(SolverError::NoCandidates)?;

        Ok(Suggestion {
            word: best.word,
            entropy: Some(best.entropy),
            candidates: self.candidates.len(),
        })
    }

    /// Record the feedback the game gave for `guess`
    ///
    /// `guess` does not have to come from [`Solver::suggest`]; manual play
    /// passes its own word here.
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` if the game is already exhausted, and
    /// `SolverError::InconsistentFeedback` if this feedback empties the
    /// candidate set. The round is still recorded in that case, so
    /// [`Solver::undo`] can take it back.
    pub fn record(
        &mut self,
        guess: Word,
        feedback: Feedback,
    ) -> Result<RoundOutcome, SolverError> {
        if self.candidates.is_empty() {
            return Err(SolverError::NoCandidates);
        }

        self.history.push((guess.clone(), feedback));

        if feedback.is_perfect() {
            self.candidates = vec![guess];
            return Ok(RoundOutcome::Solved);
        }

        self.candidates = filter(&self.candidates, &guess, &feedback);
        if self.candidates.is_empty() {
            return Err(SolverError::InconsistentFeedback { guess, feedback });
        }

        Ok(RoundOutcome::Remaining(self.candidates.len()))
    }

    /// Parse a feedback string and record it
    ///
    /// # Errors
    /// Returns `SolverError::MalformedFeedback` without changing any state if
    /// the string is invalid, otherwise as [`Solver::record`].
    pub fn record_wire(&mut self, guess: Word, wire: &str) -> Result<RoundOutcome, SolverError> {
        let feedback = Feedback::parse(wire, &guess)?;
        self.record(guess, feedback)
    }

    /// Take back the last round
    ///
    /// The candidate set is rebuilt from the full list through the remaining
    /// history. Returns the removed round, or `None` at the start of a game.
    pub fn undo(&mut self) -> Option<(Word, Feedback)> {
        let undone = self.history.pop()?;

        let mut candidates = self.words.clone();
        for (guess, feedback) in &self.history {
            candidates = if feedback.is_perfect() {
                vec![guess.clone()]
            } else {
                filter(&candidates, guess, feedback)
            };
        }
        self.candidates = candidates;

        Some(undone)
    }

    /// Start a new game
    ///
    /// Both caches survive: feedback is history-independent and entropy
    /// entries are keyed by candidate-set contents.
    pub fn restart(&mut self) {
        self.candidates.clone_from(&self.words);
        self.history.clear();
    }

    /// Entropy of any word against the current candidates
    pub fn entropy_of(&mut self, guess: &Word) -> f64 {
        self.scorer
            .entropy(&mut self.simulator, guess, &self.candidates)
    }

    /// Entropy, expected remaining and worst case for `guess`
    pub fn metrics_of(&mut self, guess: &Word) -> GuessMetrics {
        calculate_metrics(&mut self.simulator, guess, &self.candidates)
    }

    /// Words still consistent with every recorded round
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// The full word list, in tie-breaking order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub const fn opening(&self) -> &Word {
        &self.opening
    }

    /// 1-based number of the round about to be played
    #[must_use]
    pub fn round(&self) -> usize {
        self.history.len() + 1
    }

    /// True when the last recorded feedback was perfect
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, feedback)| feedback.is_perfect())
    }

    /// True when no word fits the recorded feedback
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Sizes of the (feedback, entropy) caches
    #[must_use]
    pub fn cache_sizes(&self) -> (usize, usize) {
        (self.simulator.cache_len(), self.scorer.cache_len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::simulate;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn setup_solver(texts: &[&str], opening: &str) -> Solver {
        let words = texts.iter().map(|t| word(t)).collect();
        Solver::new(words, word(opening)).unwrap()
    }

    #[test]
    fn empty_word_list_is_rejected() {
        assert_eq!(
            Solver::new(Vec::new(), word("salet")).unwrap_err(),
            SolverError::EmptyWordList
        );
    }

    #[test]
    fn first_suggestion_is_the_opening() {
        let mut solver = setup_solver(&["crane", "slate", "plane", "grape"], "salet");

        let suggestion = solver.suggest().unwrap();

        assert_eq!(suggestion.word.text(), "salet");
        assert_eq!(suggestion.entropy, None);
        assert_eq!(suggestion.candidates, 4);
        assert_eq!(solver.cache_sizes(), (0, 0));
    }

    #[test]
    fn crane_plane_game() {
        let mut solver = setup_solver(&["crane", "slate", "plane", "grape"], "crane");

        let guess = solver.suggest().unwrap().word;
        let feedback = simulate(&guess, &word("plane"));
        assert_eq!(
            solver.record(guess, feedback).unwrap(),
            RoundOutcome::Remaining(1)
        );
        assert_eq!(solver.candidates(), &[word("plane")]);

        let next = solver.suggest().unwrap();
        assert_eq!(next.word.text(), "plane");
        assert_eq!(next.entropy, Some(0.0));

        assert_eq!(
            solver.record(next.word, Feedback::PERFECT).unwrap(),
            RoundOutcome::Solved
        );
        assert!(solver.is_solved());
        assert_eq!(solver.round(), 3);
    }

    #[test]
    fn later_rounds_use_max_entropy() {
        let mut solver = setup_solver(
            &["salet", "crane", "grape", "brave", "frame", "drape", "shape", "trace"],
            "salet",
        );
        let opening = solver.suggest().unwrap().word;
        solver.record_wire(opening, "+-+-+").unwrap();

        let candidates = solver.candidates().to_vec();
        let suggestion = solver.suggest().unwrap();

        assert_eq!(candidates.len(), 5);
        assert_eq!(suggestion.word.text(), "grape");
        for candidate in &candidates {
            assert!(suggestion.entropy.unwrap() >= solver.entropy_of(candidate));
        }
    }

    #[test]
    fn malformed_feedback_leaves_state_untouched() {
        let mut solver = setup_solver(&["crane", "slate", "plane"], "crane");

        let err = solver.record_wire(word("crane"), "+?+").unwrap_err();

        assert!(matches!(err, SolverError::MalformedFeedback(_)));
        assert!(solver.history().is_empty());
        assert_eq!(solver.candidates().len(), 3);
    }

    #[test]
    fn inconsistent_feedback_exhausts_the_game() {
        let mut solver = setup_solver(&["crane", "slate", "plane"], "crane");

        let err = solver.record_wire(word("crane"), "-----").unwrap_err();

        assert!(matches!(err, SolverError::InconsistentFeedback { .. }));
        assert!(solver.is_exhausted());
        assert_eq!(solver.suggest().unwrap_err(), SolverError::NoCandidates);
        assert_eq!(
            solver.record_wire(word("slate"), "+++++").unwrap_err(),
            SolverError::NoCandidates
        );
    }

    #[test]
    fn undo_recovers_from_inconsistent_feedback() {
        let mut solver = setup_solver(&["crane", "slate", "plane", "grape"], "crane");
        solver.record_wire(word("crane"), "-----").unwrap_err();

        let (guess, _) = solver.undo().unwrap();

        assert_eq!(guess.text(), "crane");
        assert_eq!(solver.candidates().len(), 4);
        assert!(solver.undo().is_none());
    }

    #[test]
    fn undo_rebuilds_from_remaining_history() {
        let mut solver = setup_solver(&["crane", "slate", "plane", "grape", "plate"], "salet");
        let target = word("plate");

        for guess in ["salet", "crane"] {
            let guess = word(guess);
            let feedback = simulate(&guess, &target);
            solver.record(guess, feedback).unwrap();
        }
        let after_two = solver.candidates().to_vec();

        let guess = word("grape");
        solver.record(guess.clone(), simulate(&guess, &target)).unwrap();
        solver.undo();

        assert_eq!(solver.candidates(), after_two.as_slice());
        assert_eq!(solver.history().len(), 2);
    }

    #[test]
    fn manual_guess_outside_list_is_accepted() {
        let mut solver = setup_solver(&["crane", "slate", "plane", "grape"], "salet");

        let outcome = solver
            .record(word("zesty"), simulate(&word("zesty"), &word("grape")))
            .unwrap();

        assert_eq!(outcome, RoundOutcome::Remaining(3));
    }

    #[test]
    fn restart_resets_game_but_keeps_caches() {
        let mut solver = setup_solver(&["crane", "slate", "plane", "grape", "plate"], "salet");
        solver.record_wire(word("salet"), "+-+-+").unwrap();
        solver.suggest().unwrap();
        let (feedback_cached, entropy_cached) = solver.cache_sizes();
        assert!(feedback_cached > 0 && entropy_cached > 0);

        solver.restart();

        assert!(solver.history().is_empty());
        assert_eq!(solver.candidates(), solver.words());
        assert_eq!(solver.suggest().unwrap().word.text(), "salet");
        assert_eq!(solver.cache_sizes(), (feedback_cached, entropy_cached));
    }

    #[test]
    fn metrics_match_entropy() {
        let mut solver = setup_solver(&["crane", "slate", "plane", "grape"], "crane");
        let guess = word("crane");

        let metrics = solver.metrics_of(&guess);
        assert!((metrics.entropy - solver.entropy_of(&guess)).abs() < 1e-12);
        assert_eq!(metrics.max_partition, 1);
    }
}
