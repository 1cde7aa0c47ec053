//! Interactive console mode
//!
//! Suggests a guess each round (or lets the operator type one in manual mode)
//! and reads back the game's feedback string.

use crate::core::{ABSENT_SYMBOL, Feedback, PRESENT_SYMBOL, Word};
use crate::solver::{RoundOutcome, Solver, SolverError};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Settings for an interactive session
#[derive(Debug, Clone)]
pub struct InteractiveOptions {
    /// Operator types every guess; the solver only tracks candidates
    pub manual: bool,
    pub max_guesses: usize,
    pub verbose: bool,
}

impl Default for InteractiveOptions {
    fn default() -> Self {
        Self {
            manual: false,
            max_guesses: 6,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Quit,
    NewGame,
    Undo,
}

/// What the session loop should do next
enum Flow<T> {
    Proceed(T),
    NextRound,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    match input {
        "quit" | "q" | "exit" => Some(Command::Quit),
        "new" | "n" => Some(Command::NewGame),
        "undo" | "u" => Some(Command::Undo),
        _ => None,
    }
}

/// Run the interactive session until the operator quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_interactive<R: BufRead, W: Write>(
    solver: &mut Solver,
    options: &InteractiveOptions,
    mut input: R,
    mut out: W,
) -> Result<()> {
    print_banner(&mut out, options)?;
    solver.restart();

    loop {
        if solver.is_exhausted() {
            match recover(solver, &mut input, &mut out)? {
                Flow::Quit => return farewell(&mut out),
                Flow::Proceed(()) | Flow::NextRound => continue,
            }
        }

        writeln!(out, "{}", "─".repeat(60).bright_black())?;
        writeln!(
            out,
            "Turn {}: {} candidates remaining",
            solver.round(),
            solver.candidates().len()
        )?;

        let guess = if options.manual {
            match read_manual_guess(solver, &mut input, &mut out)? {
                Flow::Proceed(word) => word,
                Flow::NextRound => continue,
                Flow::Quit => return farewell(&mut out),
            }
        } else {
            show_suggestion(solver, options, &mut out)?
        };

        match read_feedback(solver, guess, &mut input, &mut out)? {
            Flow::Proceed(RoundOutcome::Solved) => {
                print_victory(solver, &mut out)?;
                if !play_again(solver, &mut input, &mut out)? {
                    return farewell(&mut out);
                }
            }
            Flow::Proceed(RoundOutcome::Remaining(count)) => {
                writeln!(out, "{count} candidates remain")?;
                if options.verbose {
                    let (feedback_cached, entropy_cached) = solver.cache_sizes();
                    writeln!(
                        out,
                        "{}",
                        format!(
                            "  cache: {feedback_cached} feedback pairs, {entropy_cached} entropy scores"
                        )
                        .bright_black()
                    )?;
                }
                if solver.history().len() >= options.max_guesses && !solver.is_exhausted() {
                    writeln!(
                        out,
                        "{}",
                        format!("Out of guesses after {} turns.", options.max_guesses)
                            .red()
                            .bold()
                    )?;
                    if !play_again(solver, &mut input, &mut out)? {
                        return farewell(&mut out);
                    }
                }
            }
            Flow::NextRound => {}
            Flow::Quit => return farewell(&mut out),
        }
    }
}

fn print_banner<W: Write>(out: &mut W, options: &InteractiveOptions) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {}", "Wordle Guesser - Interactive Mode".bright_cyan().bold())?;
    writeln!(out, "{}\n", "═".repeat(60).cyan())?;

    if options.manual {
        writeln!(out, "Manual mode: type each guess yourself.")?;
    } else {
        writeln!(out, "I'll suggest the maximum-entropy guess each turn.")?;
    }
    writeln!(out, "After each guess, enter the feedback:")?;
    writeln!(out, "  - the letter itself where it is in the right place")?;
    writeln!(out, "  - '{PRESENT_SYMBOL}' where the letter is elsewhere in the word")?;
    writeln!(out, "  - '{ABSENT_SYMBOL}' where the letter is not in the word")?;
    writeln!(out, "Commands: 'win', 'undo', 'new', 'quit'\n")?;
    Ok(())
}

fn show_suggestion<W: Write>(
    solver: &mut Solver,
    options: &InteractiveOptions,
    out: &mut W,
) -> Result<Word> {
    let suggestion = solver.suggest()?;

    writeln!(
        out,
        "\nSuggested guess: {}",
        suggestion.word.text().to_uppercase().bright_yellow().bold()
    )?;
    match suggestion.entropy {
        Some(entropy) => writeln!(out, "   Entropy: {entropy:.3} bits")?,
        None => writeln!(out, "   (opening guess)")?,
    }

    if options.verbose || solver.candidates().len() <= 10 {
        let shown: Vec<String> = solver
            .candidates()
            .iter()
            .take(10)
            .map(|w| w.text().to_uppercase())
            .collect();
        writeln!(out, "   Candidates: {}", shown.join(", "))?;
    }

    Ok(suggestion.word)
}

fn read_manual_guess<R: BufRead, W: Write>(
    solver: &mut Solver,
    input: &mut R,
    out: &mut W,
) -> Result<Flow<Word>> {
    loop {
        let Some(line) = prompt(input, out, "Your guess")? else {
            return Ok(Flow::Quit);
        };

        if let Some(command) = parse_command(&line) {
            return handle_command(command, solver, out);
        }

        match Word::new(&line) {
            Ok(word) => return Ok(Flow::Proceed(word)),
            Err(e) => writeln!(out, "{}", format!("Invalid guess: {e}").red())?,
        }
    }
}

fn read_feedback<R: BufRead, W: Write>(
    solver: &mut Solver,
    guess: Word,
    input: &mut R,
    out: &mut W,
) -> Result<Flow<RoundOutcome>> {
    loop {
        let Some(line) = prompt(input, out, "Feedback")? else {
            return Ok(Flow::Quit);
        };

        if let Some(command) = parse_command(&line) {
            return handle_command(command, solver, out);
        }

        let recorded = if matches!(line.as_str(), "win" | "correct" | "solved") {
            solver.record(guess.clone(), Feedback::PERFECT)
        } else {
            solver.record_wire(guess.clone(), &line)
        };

        match recorded {
            Ok(outcome) => return Ok(Flow::Proceed(outcome)),
            Err(SolverError::MalformedFeedback(e)) => {
                writeln!(out, "{}", format!("Invalid feedback: {e}").red())?;
            }
            Err(e) => {
                writeln!(out, "{}", e.to_string().red())?;
                return Ok(Flow::NextRound);
            }
        }
    }
}

fn handle_command<T, W: Write>(
    command: Command,
    solver: &mut Solver,
    out: &mut W,
) -> Result<Flow<T>> {
    match command {
        Command::Quit => Ok(Flow::Quit),
        Command::NewGame => {
            solver.restart();
            writeln!(out, "\n{}\n", "New game started!".bright_cyan())?;
            Ok(Flow::NextRound)
        }
        Command::Undo => {
            match solver.undo() {
                Some((guess, feedback)) => writeln!(
                    out,
                    "Undid {} {}, back to turn {}",
                    guess.text().to_uppercase(),
                    feedback.to_wire(&guess),
                    solver.round()
                )?,
                None => writeln!(out, "Nothing to undo!")?,
            }
            Ok(Flow::NextRound)
        }
    }
}

fn recover<R: BufRead, W: Write>(
    solver: &mut Solver,
    input: &mut R,
    out: &mut W,
) -> Result<Flow<()>> {
    writeln!(
        out,
        "\n{}",
        "No candidates remain! Your feedback may be incorrect.".red()
    )?;
    writeln!(out, "Type 'undo' to go back, or 'new' to start over.")?;

    loop {
        let Some(line) = prompt(input, out, "Command")? else {
            return Ok(Flow::Quit);
        };
        if let Some(command) = parse_command(&line) {
            return handle_command(command, solver, out);
        }
    }
}

fn print_victory<W: Write>(solver: &Solver, out: &mut W) -> Result<()> {
    let turns = solver.history().len();

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        format!(
            "  Solved in {turns} {}!",
            if turns == 1 { "guess" } else { "guesses" }
        )
        .bright_green()
        .bold()
    )?;
    for (i, (word, feedback)) in solver.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            feedback.to_emoji()
        )?;
    }
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    Ok(())
}

fn play_again<R: BufRead, W: Write>(
    solver: &mut Solver,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    let answer = prompt(input, out, "Play again? (yes/no)")?;
    if matches!(answer.as_deref(), Some("yes" | "y")) {
        solver.restart();
        writeln!(out, "\n{}\n", "New game started!".bright_cyan())?;
        Ok(true)
    } else {
        Ok(false)
    }
}

fn farewell<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nThanks for playing!\n")?;
    Ok(())
}

/// Print a prompt and read one trimmed, lowercased line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
