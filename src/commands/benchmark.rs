//! Benchmark command
//!
//! Plays the solver against a batch of targets and gathers statistics.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Targets not solved within the guess limit, with the reason
    pub failed: Vec<(String, String)>,
    pub total_guesses: usize,
    /// Average over solved games only
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Run the solver on every target
///
/// Each game starts from a fresh round on `solver`; its caches carry over
/// between games.
pub fn run_benchmark(
    solver: &mut Solver,
    targets: &[Word],
    max_guesses: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = progress_bar(targets.len(), show_progress);
    let start = Instant::now();

    let mut solved = 0;
    let mut failed = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_seen = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for (idx, target) in targets.iter().enumerate() {
        let mut config = SolveConfig::new(target.text().to_string());
        config.max_guesses = max_guesses;

        match solve_word(solver, config) {
            Ok(result) if result.success => {
                let guesses = result.guesses.len();
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_seen = max_seen.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Ok(result) => failed.push((
                result.target,
                format!("not solved in {max_guesses} guesses"),
            )),
            Err(e) => failed.push((target.text().to_string(), e.to_string())),
        }

        if idx % 10 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();
    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        total_words,
        solved,
        failed,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses: max_seen,
        distribution,
        duration,
        words_per_second: if seconds > 0.0 {
            total_words as f64 / seconds
        } else {
            0.0
        },
    }
}
