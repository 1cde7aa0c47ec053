//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

fn banner(title: &str, subject: Option<&str>) {
    let rule = "═".repeat(60);
    println!("\n{}", rule.cyan());
    match subject {
        Some(subject) => println!(
            " {} {}",
            title.bright_cyan().bold(),
            subject.to_uppercase().bright_yellow().bold()
        ),
        None => println!(" {}", title.bright_cyan().bold()),
    }
    println!("{}", rule.cyan());
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    banner("SOLVING", Some(result.target.as_str()));

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  {}",
            i + 1,
            colored_guess(&step.word, step.feedback),
            step.feedback.to_emoji(),
            step.wire.bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            match step.entropy {
                Some(entropy) => println!("  Entropy:    {entropy:.3} bits"),
                None => println!("  Entropy:    (opening guess)"),
            }

            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    banner("ENTROPY ANALYSIS:", Some(result.word.as_str()));

    println!("\n📊 Against {} candidates:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {:.3} bits",
        entropy_bar(result.entropy, 30).green(),
        result.entropy
    );
    println!("   Splits into: ~{:.1} equal groups", result.expected_reduction);
    println!("   Expected:    {:.1} left after this guess", result.expected_remaining);
    println!("   Worst case:  {} left", result.max_partition);

    if !result.is_candidate {
        println!(
            "\n   {}",
            "Not a candidate: this guess cannot win the round.".yellow()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    banner("BENCHMARK RESULTS", None);

    let average = format!("{:.2}", result.average_guesses);
    println!(
        "\n   Solved {} of {} in {} guesses on average",
        result.solved.to_string().green(),
        result.total_words,
        average.bright_yellow().bold()
    );
    println!(
        "   Fastest {} / slowest {} guesses",
        result.min_guesses.to_string().green(),
        result.max_guesses.to_string().yellow()
    );
    println!(
        "   {:.2}s total, {:.1} games per second",
        result.duration.as_secs_f64(),
        result.words_per_second
    );

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        let mut counts: Vec<_> = result.distribution.iter().collect();
        counts.sort_unstable();
        for (guess_count, &count) in counts {
            let pct = count as f64 / result.solved as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failed.is_empty() {
        println!("\n❌ {}", "Failed:".red().bold());
        for (word, reason) in &result.failed {
            println!("   {}: {reason}", word.to_uppercase().red());
        }
    }
}
