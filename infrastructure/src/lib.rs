//! Infrastructure layer for dog-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod dog_ceo;
pub mod photo;

#[cfg(test)]
mod test_server;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileApiConfig, FileConfig, FileOutputConfig, FileQuizConfig,
};
pub use dog_ceo::{DEFAULT_BASE_URL, DogCeoClient, build_http_client};
pub use photo::{DEFAULT_MAX_IMAGE_BYTES, HttpImageLoader, decode_image};
