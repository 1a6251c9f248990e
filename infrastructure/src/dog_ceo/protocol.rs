//! Wire format of the dog.ceo API
//!
//! Every endpoint answers with the same envelope:
//!
//! ```json
//! { "status": "success", "message": <payload> }
//! ```
//!
//! On failure `status` is `"error"` and `message` is a human readable string,
//! so the payload is only decoded into its typed shape when the status is
//! `"success"`.

use dog_quiz_application::{ApiError, CatalogResponse, ImageUrlResponse, SUCCESS_STATUS};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Raw response envelope
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub status: String,
    #[serde(default)]
    pub message: serde_json::Value,
}

impl Envelope {
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Decode `message` as `T`. Only meaningful on success.
    fn payload<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(self.message).map_err(|e| {
            ApiError::InvalidResponse(format!("unexpected message payload: {}", e))
        })
    }

    pub fn into_catalog(self) -> Result<CatalogResponse, ApiError> {
        if !self.is_success() {
            return Ok(CatalogResponse {
                status: self.status,
                breeds: BTreeMap::new(),
            });
        }
        Ok(CatalogResponse::success(self.payload()?))
    }

    pub fn into_image_url(self) -> Result<ImageUrlResponse, ApiError> {
        if !self.is_success() {
            return Ok(ImageUrlResponse {
                status: self.status,
                image_url: String::new(),
            });
        }
        Ok(ImageUrlResponse::success(self.payload::<String>()?))
    }
}
