//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not enough breeds to build a quiz: {available} available, {required} required")]
    InsufficientOptions { available: usize, required: usize },

    #[error("Quiz options must have unique ids, found duplicate '{0}'")]
    DuplicateOption(String),

    #[error("Correct answer '{0}' is not one of the quiz options")]
    AnswerNotInOptions(String),

    #[error("Quiz needs exactly {required} options, got {actual}")]
    WrongOptionCount { actual: usize, required: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_options_display() {
        let error = DomainError::InsufficientOptions {
            available: 3,
            required: 4,
        };
        assert_eq!(
            error.to_string(),
            "Not enough breeds to build a quiz: 3 available, 4 required"
        );
    }
}
