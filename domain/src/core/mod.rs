//! Core domain concepts shared across all subdomains.
//!
//! - [`image::DecodedImage`]: a decoded picture, independent of any codec crate
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod image;
