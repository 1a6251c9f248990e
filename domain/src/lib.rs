//! Domain layer for dog-quiz
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Breed Catalog
//!
//! The remote API lists breeds as a mapping of breed to sub-breeds. The
//! catalog flattens it into [`BreedEntity`] values, each with a stable id and
//! a human-readable [display name](BreedEntity::display_name).
//!
//! ## Quiz
//!
//! A [`Quiz`] is one question: a [`DecodedImage`] of a dog and four candidate
//! breeds, exactly one of which is correct.

pub mod breed;
pub mod core;
pub mod quiz;

// Re-export commonly used types
pub use breed::{catalog::normalize, entities::BreedEntity};
pub use crate::core::{error::DomainError, image::DecodedImage};
pub use quiz::entities::{OPTIONS_PER_QUIZ, Quiz};
