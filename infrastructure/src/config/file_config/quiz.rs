//! Quiz configuration from TOML (`[quiz]` section)

use dog_quiz_application::QuizParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// How long a wrongly picked option shakes, in milliseconds
    pub shake_duration_ms: u64,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            shake_duration_ms: QuizParams::default().shake_duration.as_millis() as u64,
        }
    }
}

impl FileQuizConfig {
    /// Convert to the application-layer parameters
    pub fn to_quiz_params(&self) -> QuizParams {
        QuizParams::default().with_shake_duration(Duration::from_millis(self.shake_duration_ms))
    }
}
