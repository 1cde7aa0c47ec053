//! Shannon entropy of feedback distributions
//!
//! Given a guess and a candidate set, computes the expected information gain.

use crate::core::{Feedback, Word};
use crate::solver::simulator::FeedbackSimulator;
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Tally the feedback each candidate would produce for `guess`
///
/// The guess itself is skipped: it can only answer with the perfect pattern,
/// which ends the game instead of splitting the set.
pub fn partition(
    simulator: &mut FeedbackSimulator,
    guess: &Word,
    candidates: &[Word],
) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates.iter().filter(|&c| c != guess) {
        let feedback = simulator.simulate(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a pattern distribution
///
/// H = -Σ p * log₂(p), with p = count / `total`. `total` is the size of the
/// whole candidate set, which may exceed the sum of the counts. Zero counts
/// are skipped.
///
/// # Examples
/// ```
/// use wordle_guesser::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([25, 25, 25, 25], 100);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: impl IntoIterator<Item = usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate the entropy of `guess` against `candidates`, without caching
///
/// Returns 0.0 for an empty set and for a set holding only the guess.
pub fn calculate_entropy(
    simulator: &mut FeedbackSimulator,
    guess: &Word,
    candidates: &[Word],
) -> f64 {
    let counts = partition(simulator, guess, candidates);
    shannon_entropy(counts.into_values(), candidates.len())
}

/// Calculate entropy, expected remaining candidates and the largest partition
pub fn calculate_metrics(
    simulator: &mut FeedbackSimulator,
    guess: &Word,
    candidates: &[Word],
) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = partition(simulator, guess, candidates);
    let total = candidates.len() as f64;

    let entropy = shannon_entropy(counts.values().copied(), candidates.len());

    let expected_remaining = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    let max_partition = counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let entropy = shannon_entropy([1, 1, 1, 1], 4);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let entropy = shannon_entropy([10], 10);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let uniform = shannon_entropy([25, 25, 25, 25], 100);
        let skewed = shannon_entropy([97, 1, 1, 1], 100);
        assert!(uniform > skewed);
    }

    #[test]
    fn shannon_entropy_skips_zero_counts() {
        let entropy = shannon_entropy([0, 2, 0, 2], 4);
        assert!((entropy - 1.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_empty() {
        assert!(shannon_entropy(Vec::new(), 0).abs() < f64::EPSILON);
        assert!(shannon_entropy(Vec::new(), 5).abs() < f64::EPSILON);
    }

    #[test]
    fn partition_excludes_the_guess() {
        let mut simulator = FeedbackSimulator::new();
        let candidates = words(&["crane", "slate", "plane", "grape"]);

        let counts = partition(&mut simulator, &candidates[0], &candidates);

        assert_eq!(counts.values().sum::<usize>(), 3);
        assert!(!counts.contains_key(&Feedback::PERFECT));
    }

    #[test]
    fn entropy_uses_full_set_as_denominator() {
        // CRANE splits the other three into distinct patterns, each p = 1/4
        let mut simulator = FeedbackSimulator::new();
        let candidates = words(&["crane", "slate", "plane", "grape"]);

        let entropy = calculate_entropy(&mut simulator, &candidates[0], &candidates);

        let expected = 3.0 * -(0.25_f64 * 0.25_f64.log2());
        assert!((entropy - expected).abs() < 1e-9);
    }

    #[test]
    fn entropy_of_singleton_is_zero() {
        let mut simulator = FeedbackSimulator::new();
        let candidates = words(&["zesty"]);

        let entropy = calculate_entropy(&mut simulator, &candidates[0], &candidates);
        assert!(entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_all_same_pattern() {
        let mut simulator = FeedbackSimulator::new();
        let guess = Word::new("mamma").unwrap();
        let candidates = words(&["quiet", "doubt", "first"]);

        let entropy = calculate_entropy(&mut simulator, &guess, &candidates);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn entropy_is_non_negative() {
        let mut simulator = FeedbackSimulator::new();
        let candidates = words(&["crane", "slate", "irate", "crate", "grate", "plate"]);

        for guess in &candidates {
            assert!(calculate_entropy(&mut simulator, guess, &candidates) >= 0.0);
        }
    }

    #[test]
    fn metrics_real_words() {
        let mut simulator = FeedbackSimulator::new();
        let guess = Word::new("salet").unwrap();
        let candidates = words(&["slate", "plate", "crane", "zesty"]);

        let metrics = calculate_metrics(&mut simulator, &guess, &candidates);

        assert!(metrics.entropy > 1.0 && metrics.entropy <= 2.0);
        assert!(metrics.max_partition >= 1);
        assert!(metrics.expected_remaining <= candidates.len() as f64);
    }

    #[test]
    fn metrics_empty_candidates() {
        let mut simulator = FeedbackSimulator::new();
        let guess = Word::new("crane").unwrap();

        let metrics = calculate_metrics(&mut simulator, &guess, &[]);
        assert_eq!(metrics.max_partition, 0);
        assert!(metrics.entropy.abs() < f64::EPSILON);
    }
}
