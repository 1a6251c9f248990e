//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for dog-quiz
#[derive(Parser, Debug)]
#[command(name = "dog-quiz")]
#[command(author, version, about = "Guess the dog breed from a random photo")]
#[command(long_about = r#"
dog-quiz shows a random dog photo from the dog.ceo API together with four
breed names. Pick the breed in the photo.

Commands at the prompt:
  1-4   pick an option
  n     next quiz
  r     retry after an error
  h     help
  q     quit

Configuration files are loaded from (in priority order):
1. DOG_QUIZ_* environment variables   e.g. DOG_QUIZ_API__TIMEOUT_SECS=5
2. --config <path>                    Explicit config file
3. ./dog-quiz.toml                    Project-level config
4. ~/.config/dog-quiz/config.toml     Global config

Example:
  dog-quiz
  dog-quiz --rounds 5 --no-preview
  dog-quiz -vv --log-dir ./logs
"#)]
pub struct Cli {
    /// Stop after this many answered quizzes and print the score
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: Option<u32>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not render the ASCII preview of the photo
    #[arg(long)]
    pub no_preview: bool,

    /// Write logs to daily-rotated files in this directory instead of stderr
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
