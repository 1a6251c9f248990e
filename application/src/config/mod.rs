//! Application-level configuration.
//!
//! - [`QuizParams`]: timing of the quiz state machine (shake feedback window)

pub mod quiz_params;

pub use quiz_params::QuizParams;
