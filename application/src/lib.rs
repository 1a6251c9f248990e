//! Application layer for dog-quiz
//!
//! This crate contains use cases, port definitions, the breed repository and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod repository;
pub mod use_cases;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::QuizParams;
pub use ports::{
    breed_api::{ApiError, BreedApi, CatalogResponse, ImageUrlResponse, SUCCESS_STATUS},
    image_loader::{ImageLoadError, ImageLoader},
};
pub use repository::breed_repository::{BreedRepository, RepositoryError};
pub use use_cases::build_quiz::{BuildQuizError, BuildQuizUseCase};
pub use use_cases::quiz_controller::QuizController;
pub use use_cases::quiz_state::{NO_QUIZ_MESSAGE, QuizOption, UiState};
