//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_quiz;
pub mod quiz_controller;
pub mod quiz_state;
