//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is optional; missing keys fall back to their defaults.

mod api;
mod output;
mod quiz;

pub use api::FileApiConfig;
pub use output::FileOutputConfig;
pub use quiz::FileQuizConfig;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Breed API endpoint settings
    pub api: FileApiConfig,
    /// Quiz timing
    pub quiz: FileQuizConfig,
    /// Terminal output settings
    pub output: FileOutputConfig,
}

/// A non-fatal problem found in a loaded configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted key, e.g. `api.timeout_secs`
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues are warnings: the application still starts with the values
    /// as given.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.api.base_url.trim().is_empty() {
            issues.push(ConfigIssue {
                field: "api.base_url",
                message: "empty base URL, every request will fail".to_string(),
            });
        } else if !self.api.base_url.starts_with("http://")
            && !self.api.base_url.starts_with("https://")
        {
            issues.push(ConfigIssue {
                field: "api.base_url",
                message: format!("'{}' is not an http(s) URL", self.api.base_url),
            });
        }

        if self.api.timeout_secs == 0 {
            issues.push(ConfigIssue {
                field: "api.timeout_secs",
                message: "timeout of 0 seconds, requests will time out immediately".to_string(),
            });
        }

        if self.quiz.shake_duration_ms == 0 {
            issues.push(ConfigIssue {
                field: "quiz.shake_duration_ms",
                message: "0 ms disables the wrong-answer feedback".to_string(),
            });
        }

        if self.output.image_preview && self.output.preview_width == 0 {
            issues.push(ConfigIssue {
                field: "output.preview_width",
                message: "preview width of 0, image preview will be skipped".to_string(),
            });
        }

        issues
    }
}
