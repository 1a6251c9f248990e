//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Render an ASCII preview of each quiz photo
    pub image_preview: bool,
    /// Preview width in terminal columns
    pub preview_width: u16,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            image_preview: true,
            preview_width: 48,
        }
    }
}
