//! Presentation-level configuration
//!
//! Configuration for output rendering and REPL behavior.

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Render an ASCII preview of each quiz photo
    pub image_preview: bool,
    /// Preview width in terminal columns
    pub preview_width: u16,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            image_preview: true,
            preview_width: 48,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show a spinner while a quiz loads
    pub show_progress: bool,
    /// End the session after this many answered quizzes
    pub rounds: Option<u32>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            rounds: None,
        }
    }
}
