//! Build Quiz use case
//!
//! Assembles one [`Quiz`]: four random breeds, one of them chosen as the
//! answer, and a decoded photo of the answer's breed.

use crate::ports::image_loader::{ImageLoadError, ImageLoader};
use crate::repository::breed_repository::{BreedRepository, RepositoryError};
use dog_quiz_domain::{BreedEntity, DomainError, OPTIONS_PER_QUIZ, Quiz};
use rand::Rng;
use rand::seq::index;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while building a quiz
///
/// The display text is what the player sees; the underlying cause is kept
/// as the error source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildQuizError {
    #[error("get all breeds error")]
    AllBreeds(#[source] RepositoryError),

    #[error("get image url error")]
    ImageUrl(#[source] RepositoryError),

    #[error("get image error")]
    Image(#[source] ImageLoadError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Use case for building quizzes
///
/// Steps run strictly in order (catalog, image URL, image) and stop at the
/// first failure. Retrying is left to the caller.
#[derive(Clone)]
pub struct BuildQuizUseCase {
    repository: Arc<BreedRepository>,
    image_loader: Arc<dyn ImageLoader>,
}

impl BuildQuizUseCase {
    pub fn new(repository: Arc<BreedRepository>, image_loader: Arc<dyn ImageLoader>) -> Self {
        Self {
            repository,
            image_loader,
        }
    }

    /// Build the next quiz
    pub async fn execute(&self) -> Result<Quiz, BuildQuizError> {
        let breeds = self
            .repository
            .all_breeds()
            .await
            .map_err(BuildQuizError::AllBreeds)?;

        // ThreadRng is !Send; keep it out of scope across awaits.
        let (options, correct_answer) = {
            let mut rng = rand::thread_rng();
            pick_options(&breeds, &mut rng)?
        };
        info!(
            "Quiz options: {}",
            options
                .iter()
                .map(|o| o.id())
                .collect::<Vec<_>>()
                .join(", ")
        );
        debug!("Correct answer: {}", correct_answer.id());

        let url = self
            .repository
            .image_url_for(&correct_answer)
            .await
            .map_err(BuildQuizError::ImageUrl)?;

        let image = self.image_loader.load(&url).await.map_err(|e| {
            warn!("Failed to load quiz image {}: {}", url, e);
            BuildQuizError::Image(e)
        })?;

        Ok(Quiz::new(image, options, correct_answer)?)
    }

    /// Whether `selected_id` is the quiz's correct answer
    pub fn check_answer(&self, quiz: &Quiz, selected_id: &str) -> bool {
        quiz.is_correct_answer(selected_id)
    }
}

/// Draw [`OPTIONS_PER_QUIZ`] distinct breeds uniformly at random, in random
/// order, and pick the correct answer uniformly among them.
pub(crate) fn pick_options<R: Rng + ?Sized>(
    breeds: &[BreedEntity],
    rng: &mut R,
) -> Result<(Vec<BreedEntity>, BreedEntity), DomainError> {
    if breeds.len() < OPTIONS_PER_QUIZ {
        return Err(DomainError::InsufficientOptions {
            available: breeds.len(),
            required: OPTIONS_PER_QUIZ,
        });
    }

    let options: Vec<BreedEntity> = index::sample(rng, breeds.len(), OPTIONS_PER_QUIZ)
        .into_iter()
        .map(|i| breeds[i].clone())
        .collect();
    let correct_answer = options[rng.gen_range(0..options.len())].clone();

    Ok((options, correct_answer))
}
