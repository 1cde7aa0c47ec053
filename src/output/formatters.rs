//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::{ColoredString, Colorize};

/// Upper end of the entropy bar, in bits
const ENTROPY_BAR_MAX: f64 = 9.0;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, ENTROPY_BAR_MAX, width)
}

/// Render a guess with each letter colored by its mark
#[must_use]
pub fn colored_guess(guess: &str, feedback: Feedback) -> String {
    guess
        .chars()
        .zip(feedback.marks())
        .map(|(c, mark)| {
            let letter = format!(" {} ", c.to_ascii_uppercase());
            let tile: ColoredString = match mark {
                Mark::Exact => letter.black().on_green(),
                Mark::Present => letter.black().on_yellow(),
                Mark::Absent => letter.white().on_bright_black(),
            };
            tile.to_string()
        })
        .collect()
}
