//! Wordle Guesser
//!
//! An automated Wordle player that picks the maximum-entropy guess each
//! round and narrows its candidate set from the game's feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_guesser::core::Word;
//! use wordle_guesser::solver::simulate;
//!
//! let guess = Word::new("speed").unwrap();
//! let target = Word::new("erase").unwrap();
//!
//! let feedback = simulate(&guess, &target);
//! assert_eq!(feedback.to_wire(&guess), "-+--+");
//! ```

// Core domain types
pub mod core;

// Feedback simulation, entropy scoring and candidate filtering
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
