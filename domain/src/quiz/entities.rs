//! Quiz entity

use crate::breed::entities::BreedEntity;
use crate::core::error::DomainError;
use crate::core::image::DecodedImage;
use std::collections::HashSet;

/// Number of candidate breeds offered per quiz
pub const OPTIONS_PER_QUIZ: usize = 4;

/// One question: a photo and four candidate breeds, one of them correct (Entity)
///
/// Construction validates the invariants, so a `Quiz` always has
/// [`OPTIONS_PER_QUIZ`] options with unique ids and its correct answer is
/// one of them.
#[derive(Debug, Clone)]
pub struct Quiz {
    image: DecodedImage,
    options: Vec<BreedEntity>,
    correct_answer: BreedEntity,
}

impl Quiz {
    pub fn new(
        image: DecodedImage,
        options: Vec<BreedEntity>,
        correct_answer: BreedEntity,
    ) -> Result<Self, DomainError> {
        if options.len() != OPTIONS_PER_QUIZ {
            return Err(DomainError::WrongOptionCount {
                actual: options.len(),
                required: OPTIONS_PER_QUIZ,
            });
        }

        let mut seen = HashSet::new();
        if let Some(dup) = options.iter().find(|o| !seen.insert(o.id())) {
            return Err(DomainError::DuplicateOption(dup.id().to_string()));
        }

        if !options.iter().any(|o| o.id() == correct_answer.id()) {
            return Err(DomainError::AnswerNotInOptions(
                correct_answer.id().to_string(),
            ));
        }

        Ok(Self {
            image,
            options,
            correct_answer,
        })
    }

    pub fn image(&self) -> &DecodedImage {
        &self.image
    }

    pub fn options(&self) -> &[BreedEntity] {
        &self.options
    }

    pub fn correct_answer(&self) -> &BreedEntity {
        &self.correct_answer
    }

    /// Whether `id` names the correct breed
    pub fn is_correct_answer(&self, id: &str) -> bool {
        id == self.correct_answer.id()
    }
}
