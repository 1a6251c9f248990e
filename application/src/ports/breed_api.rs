//! Breed API port
//!
//! Defines the interface for reading the breed catalog and random breed
//! images from a remote source.

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

/// Status value the remote uses to mark a usable payload
pub const SUCCESS_STATUS: &str = "success";

/// Errors raised by a [`BreedApi`] adapter before an application-level
/// status could be read (network, HTTP, payload decoding)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Catalog payload: breed name → sub-breed names
///
/// `breeds` is only meaningful when `status` is [`SUCCESS_STATUS`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogResponse {
    pub status: String,
    pub breeds: BTreeMap<String, Vec<String>>,
}

impl CatalogResponse {
    pub fn success(breeds: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            breeds,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// Random image payload
///
/// `image_url` is only meaningful when `status` is [`SUCCESS_STATUS`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageUrlResponse {
    pub status: String,
    pub image_url: String,
}

impl ImageUrlResponse {
    pub fn success(image_url: impl Into<String>) -> Self {
        Self {
            status: SUCCESS_STATUS.to_string(),
            image_url: image_url.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// Remote source of breeds and breed images
///
/// Implementations (adapters) live in the infrastructure layer. A non-success
/// `status` is returned as data, not as an [`ApiError`]; interpreting it is
/// the repository's job.
#[async_trait]
pub trait BreedApi: Send + Sync {
    /// Fetch the full breed → sub-breeds mapping
    async fn all_breeds(&self) -> Result<CatalogResponse, ApiError>;

    /// Fetch a random image URL for a breed
    async fn random_breed_image(&self, breed: &str) -> Result<ImageUrlResponse, ApiError>;

    /// Fetch a random image URL for a breed/sub-breed pair
    async fn random_sub_breed_image(
        &self,
        breed: &str,
        sub_breed: &str,
    ) -> Result<ImageUrlResponse, ApiError>;
}
