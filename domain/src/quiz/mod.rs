//! Quiz subdomain: one question instance and its answer check.

pub mod entities;
