//! Photo fetching and decoding
//!
//! [`HttpImageLoader`] implements the
//! [`ImageLoader`](dog_quiz_application::ImageLoader) port: download over
//! HTTP, then decode with the `image` crate into an RGBA8
//! [`DecodedImage`](dog_quiz_domain::DecodedImage).

mod loader;

pub use loader::{DEFAULT_MAX_IMAGE_BYTES, HttpImageLoader, decode_image};
