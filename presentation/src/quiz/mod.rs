//! Interactive terminal quiz

pub mod command;
mod repl;
pub mod score;
pub mod session;

pub use repl::QuizRepl;
