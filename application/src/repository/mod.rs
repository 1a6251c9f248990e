//! Repositories
//!
//! Data access built on top of the ports: status interpretation and caching.

pub mod breed_repository;
