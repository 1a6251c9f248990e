//! Parsing of prompt input

use dog_quiz_domain::OPTIONS_PER_QUIZ;
use std::str::FromStr;

/// One line typed at the quiz prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick an option (0-based index)
    Select(usize),
    Next,
    Retry,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        match input.as_str() {
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "n" | "next" => Ok(Command::Next),
            "r" | "retry" => Ok(Command::Retry),
            "h" | "help" | "?" => Ok(Command::Help),
            _ => match input.parse::<usize>() {
                Ok(n) if (1..=OPTIONS_PER_QUIZ).contains(&n) => Ok(Command::Select(n - 1)),
                Ok(n) => Err(format!(
                    "There is no option {}. Pick 1-{}.",
                    n, OPTIONS_PER_QUIZ
                )),
                Err(_) => Err(format!("Unknown command: {}", s.trim())),
            },
        }
    }
}
