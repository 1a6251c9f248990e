//! Image loader port
//!
//! Fetches an image by URL and decodes it into a [`DecodedImage`].

use async_trait::async_trait;
use dog_quiz_domain::DecodedImage;
use thiserror::Error;

/// Errors that can occur while fetching or decoding an image
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageLoadError {
    #[error("Failed to fetch image: {0}")]
    FetchFailed(String),

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("Image too large: {0} bytes")]
    TooLarge(u64),

    #[error("Timeout")]
    Timeout,
}

/// Fetch-and-decode capability for quiz photos
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, url: &str) -> Result<DecodedImage, ImageLoadError>;
}
