//! Breed subdomain.
//!
//! - [`entities::BreedEntity`]: one selectable breed or breed/sub-breed pair
//! - [`catalog::normalize`]: flattens the remote breed mapping into entities

pub mod catalog;
pub mod entities;
