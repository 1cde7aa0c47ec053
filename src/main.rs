//! Wordle Guesser - CLI
//!
//! Plays Wordle by maximizing expected information gain each round.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_guesser::{
    commands::{
        InteractiveOptions, SolveConfig, analyze_word, play_random, run_benchmark,
        run_interactive, solve_word,
    },
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{DEFAULT_OPENING, Solver},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_guesser",
    about = "Wordle player that picks the maximum-entropy guess each round",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (plain text, or a YAML sequence for .yaml/.yml); defaults to the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Opening guess
    #[arg(short, long, global = true, default_value = DEFAULT_OPENING)]
    opening: String,

    /// Guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value = "6")]
    max_guesses: usize,

    /// Show candidate counts and entropy for each guess
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a live game, reading feedback from the terminal (default)
    Interactive {
        /// Type your own guesses instead of taking suggestions
        #[arg(short, long)]
        manual: bool,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,
    },

    /// Solve a randomly chosen word from the list
    Play {
        /// Seed for choosing the target
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of words from the list to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn load_words(wordlist: Option<&PathBuf>) -> Result<Vec<Word>> {
    match wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load word list {}", path.display())),
        None => Ok(words_from_slice(WORDS)),
    }
}

/// Resolve the opening guess, falling back to the list's first word
fn resolve_opening(requested: &str, words: &[Word]) -> Result<Word> {
    let fallback = || words.first().cloned().context("word list is empty");

    match Word::new(requested) {
        Ok(word) if words.contains(&word) => Ok(word),
        Ok(word) => {
            let first = fallback()?;
            eprintln!(
                "{} opening '{word}' is not in the word list, using '{first}'",
                "warning:".yellow().bold()
            );
            Ok(first)
        }
        Err(e) => {
            let first = fallback()?;
            eprintln!(
                "{} opening '{requested}' is invalid ({e}), using '{first}'",
                "warning:".yellow().bold()
            );
            Ok(first)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(cli.wordlist.as_ref())?;
    let opening = resolve_opening(&cli.opening, &words)?;
    if cli.verbose {
        eprintln!(
            "{} {} words, opening '{opening}'",
            "loaded".bright_black(),
            words.len()
        );
    }

    let mut solver = Solver::new(words, opening)?;
    let command = cli
        .command
        .unwrap_or(Commands::Interactive { manual: false });

    match command {
        Commands::Interactive { manual } => {
            let options = InteractiveOptions {
                manual,
                max_guesses: cli.max_guesses,
                verbose: cli.verbose,
            };
            run_interactive(&mut solver, &options, io::stdin().lock(), io::stdout())
        }
        Commands::Solve { word } => {
            let mut config = SolveConfig::new(word);
            config.max_guesses = cli.max_guesses;
            let result = solve_word(&mut solver, config)?;
            print_solve_result(&result, cli.verbose);
            Ok(())
        }
        Commands::Play { seed } => {
            let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            let result = play_random(&mut solver, &mut rng, cli.max_guesses)?;
            print_solve_result(&result, cli.verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&mut solver, &word)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let targets: Vec<Word> = solver.words().iter().take(count).cloned().collect();
            println!("Running benchmark on {} words...", targets.len());
            let result = run_benchmark(&mut solver, &targets, cli.max_guesses, true);
            print_benchmark_result(&result);
            if cli.verbose {
                let (feedback, entropy) = solver.cache_sizes();
                println!("   Cache entries:    {feedback} feedback, {entropy} entropy");
            }
            Ok(())
        }
    }
}
