//! Configuration file loading for dog-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `DOG_QUIZ_<SECTION>__<KEY>` (e.g. `DOG_QUIZ_API__TIMEOUT_SECS=5`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./dog-quiz.toml` or `./.dog-quiz.toml`
//! 4. Global: `$XDG_CONFIG_HOME/dog-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigIssue, FileApiConfig, FileConfig, FileOutputConfig, FileQuizConfig};
pub use loader::ConfigLoader;
