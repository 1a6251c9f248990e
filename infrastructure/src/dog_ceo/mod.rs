//! dog.ceo adapter
//!
//! Implements [`BreedApi`](dog_quiz_application::BreedApi) over the public
//! dog.ceo REST API.
//!
//! # Architecture
//!
//! ```text
//! BreedRepository ──▶ DogCeoClient ──GET──▶ {base}/breeds/list/all
//!                         │                 {base}/breed/{breed}/images/random
//!                         ▼                 {base}/breed/{breed}/{sub}/images/random
//!                     protocol (status/message envelope decoding)
//! ```

pub mod client;
pub mod protocol;

pub use client::{DEFAULT_BASE_URL, DogCeoClient, build_http_client};
