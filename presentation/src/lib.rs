//! Presentation layer for dog-quiz
//!
//! This crate contains the CLI definition, the console renderer, the
//! loading spinner and the interactive quiz REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::LoadingSpinner;
pub use quiz::{QuizRepl, score::Score};
