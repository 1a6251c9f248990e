//! Quiz view state
//!
//! Single source of truth for everything a quiz front end renders.
//! Produced by [`QuizController`](super::quiz_controller::QuizController).

use dog_quiz_domain::{BreedEntity, DecodedImage};

/// Message shown when an option is selected before any quiz has loaded
pub const NO_QUIZ_MESSAGE: &str = "no quiz";

/// One answer button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub id: String,
    pub display_text: String,
    /// Set for a short feedback window after a wrong pick
    pub shaking: bool,
}

impl From<&BreedEntity> for QuizOption {
    fn from(breed: &BreedEntity) -> Self {
        Self {
            id: breed.id().to_string(),
            display_text: breed.display_name(),
            shaking: false,
        }
    }
}

/// Observable quiz screen state
///
/// Fields are independent and combine: `loading` may be set while the
/// previous options and image stay visible, and an error may be shown on
/// top of stale content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub loading: bool,
    pub error_msg: Option<String>,
    pub options: Vec<QuizOption>,
    pub image: Option<DecodedImage>,
    /// Display name of the correct breed, set once the player finds it
    pub revealed_answer: Option<String>,
}

impl UiState {
    /// Whether a quiz has ever been shown
    pub fn has_content(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn option(&self, id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub(crate) fn set_shaking(&mut self, id: &str, shaking: bool) {
        for option in self.options.iter_mut().filter(|o| o.id == id) {
            option.shaking = shaking;
        }
    }
}
