//! Quiz parameters: timing of the quiz state machine.

use std::time::Duration;

/// Parameters for [`QuizController`](crate::use_cases::quiz_controller::QuizController)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizParams {
    /// How long a wrongly picked option keeps its `shaking` flag.
    pub shake_duration: Duration,
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            shake_duration: Duration::from_millis(500),
        }
    }
}

impl QuizParams {
    pub fn with_shake_duration(mut self, duration: Duration) -> Self {
        self.shake_duration = duration;
        self
    }
}
