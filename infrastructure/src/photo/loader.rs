//! HTTP image loader

use async_trait::async_trait;
use dog_quiz_application::{ImageLoadError, ImageLoader};
use dog_quiz_domain::DecodedImage;
use tracing::debug;

/// Maximum accepted image body size (10 MB)
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Downloads quiz photos and decodes them
#[derive(Debug, Clone)]
pub struct HttpImageLoader {
    client: reqwest::Client,
    max_bytes: u64,
}

impl HttpImageLoader {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            max_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageLoadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageLoadError::FetchFailed(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        if let Some(length) = response.content_length().filter(|&l| l > self.max_bytes) {
            return Err(ImageLoadError::TooLarge(length));
        }

        let body = response.bytes().await.map_err(fetch_error)?;
        if body.len() as u64 > self.max_bytes {
            return Err(ImageLoadError::TooLarge(body.len() as u64));
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load(&self, url: &str) -> Result<DecodedImage, ImageLoadError> {
        let bytes = self.fetch(url).await?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);

        // Decoding a full-size JPEG is CPU bound; keep it off the async workers.
        let url = url.to_string();
        tokio::task::spawn_blocking(move || decode_image(&url, &bytes))
            .await
            .map_err(|e| ImageLoadError::DecodeFailed(format!("decoder task failed: {}", e)))?
    }
}

/// Decode an encoded image (format guessed from content) into RGBA8
pub fn decode_image(source_url: &str, bytes: &[u8]) -> Result<DecodedImage, ImageLoadError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| ImageLoadError::DecodeFailed(e.to_string()))?
        .to_rgba8();
    let (width, height) = decoded.dimensions();

    DecodedImage::from_rgba(source_url, width, height, decoded.into_raw()).ok_or_else(|| {
        ImageLoadError::DecodeFailed(format!(
            "pixel buffer does not match {}x{}",
            width, height
        ))
    })
}

fn fetch_error(e: reqwest::Error) -> ImageLoadError {
    if e.is_timeout() {
        ImageLoadError::Timeout
    } else {
        ImageLoadError::FetchFailed(e.to_string())
    }
}
