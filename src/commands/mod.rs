//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod interactive;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use interactive::{InteractiveOptions, run_interactive};
pub use play::play_random;
pub use solve::{GuessStep, SolveConfig, SolveError, SolveResult, solve_word};
