//! Terminal output

pub mod console;
pub mod preview;
