//! Breed repository
//!
//! Wraps a [`BreedApi`] with status interpretation and a catalog cache.
//! Every operation returns a tagged [`Result`]; nothing raised by the
//! adapter crosses this boundary unconverted.

use crate::ports::breed_api::{ApiError, BreedApi, ImageUrlResponse};
use dog_quiz_domain::{BreedEntity, normalize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// Errors surfaced by [`BreedRepository`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The remote answered with a status other than `"success"`;
    /// the message is that status verbatim.
    #[error("{0}")]
    Remote(String),

    /// The request or its payload decoding failed
    #[error("Transport error: {0}")]
    Transport(#[from] ApiError),
}

/// Repository of breeds and breed images
///
/// The catalog is fetched at most once per repository on success. Concurrent
/// first callers share a single in-flight fetch; a failed fetch leaves the
/// cache empty so the next call tries again. There is no expiry.
pub struct BreedRepository {
    api: Arc<dyn BreedApi>,
    catalog: OnceCell<Arc<[BreedEntity]>>,
}

impl BreedRepository {
    pub fn new(api: Arc<dyn BreedApi>) -> Self {
        Self {
            api,
            catalog: OnceCell::new(),
        }
    }

    /// All selectable breeds, from cache when available
    pub async fn all_breeds(&self) -> Result<Arc<[BreedEntity]>, RepositoryError> {
        if let Some(cached) = self.catalog.get() {
            debug!("Breed catalog cache hit ({} entries)", cached.len());
            return Ok(Arc::clone(cached));
        }

        let catalog = self
            .catalog
            .get_or_try_init(|| self.fetch_catalog())
            .await?;
        Ok(Arc::clone(catalog))
    }

    /// Random image URL for a breed
    pub async fn random_breed_image(&self, breed: &str) -> Result<String, RepositoryError> {
        let response = self.api.random_breed_image(breed).await?;
        Self::image_url(response, breed)
    }

    /// Random image URL for a breed/sub-breed pair
    pub async fn random_sub_breed_image(
        &self,
        breed: &str,
        sub_breed: &str,
    ) -> Result<String, RepositoryError> {
        let response = self.api.random_sub_breed_image(breed, sub_breed).await?;
        Self::image_url(response, &format!("{}/{}", breed, sub_breed))
    }

    /// Random image URL for an entity, using the sub-breed endpoint when
    /// the entity has a sub-breed
    pub async fn image_url_for(&self, entity: &BreedEntity) -> Result<String, RepositoryError> {
        match entity.sub_breed() {
            Some(sub_breed) => self.random_sub_breed_image(entity.breed(), sub_breed).await,
            None => self.random_breed_image(entity.breed()).await,
        }
    }

    async fn fetch_catalog(&self) -> Result<Arc<[BreedEntity]>, RepositoryError> {
        info!("Fetching breed catalog");
        let response = self.api.all_breeds().await.inspect_err(|e| {
            warn!("Breed catalog request failed: {}", e);
        })?;

        if !response.is_success() {
            warn!("Breed catalog returned status '{}'", response.status);
            return Err(RepositoryError::Remote(response.status));
        }

        let breeds = normalize(&response.breeds);
        info!("Breed catalog cached ({} entries)", breeds.len());
        Ok(breeds.into())
    }

    fn image_url(response: ImageUrlResponse, target: &str) -> Result<String, RepositoryError> {
        if response.is_success() {
            debug!("Image URL for {}: {}", target, response.image_url);
            Ok(response.image_url)
        } else {
            warn!("Image lookup for {} returned status '{}'", target, response.status);
            Err(RepositoryError::Remote(response.status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::breed_api::CatalogResponse;
    use crate::test_support::{MockBreedApi, catalog};

    fn repository(api: &Arc<MockBreedApi>) -> BreedRepository {
        BreedRepository::new(Arc::clone(api) as Arc<dyn BreedApi>)
    }

    #[tokio::test]
    async fn test_all_breeds_success_and_cached() {
        let api = Arc::new(MockBreedApi::new(catalog(&[
            ("affenpinscher", vec![]),
            ("australian", vec!["kelpie", "shepherd"]),
            ("bakharwal", vec!["indian"]),
        ])));
        let repo = repository(&api);

        let first = repo.all_breeds().await.unwrap();
        let mut ids: Vec<_> = first.iter().map(|b| b.id().to_string()).collect();
        ids.sort();
        assert_eq!(
            ids,
            vec![
                "affenpinscher",
                "australian_kelpie",
                "australian_shepherd",
                "bakharwal_indian"
            ]
        );

        let second = repo.all_breeds().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(api.catalog_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_first_calls_share_one_fetch() {
        let api = Arc::new(
            MockBreedApi::new(catalog(&[("akita", vec![]), ("pug", vec![])]))
                .with_catalog_delay(std::time::Duration::from_millis(100)),
        );
        let repo = repository(&api);

        let results =
            futures::future::join_all((0..5).map(|_| repo.all_breeds())).await;

        assert!(results.iter().all(|r| r.as_ref().map(|b| b.len()) == Ok(2)));
        assert_eq!(api.catalog_calls(), 1);
    }

    #[tokio::test]
    async fn test_all_breeds_error_status() {
        let api = Arc::new(MockBreedApi::scripted().with_catalog_response(Ok(CatalogResponse {
            status: "failed".to_string(),
            breeds: Default::default(),
        })));
        let repo = repository(&api);

        let err = repo.all_breeds().await.unwrap_err();
        assert_eq!(err, RepositoryError::Remote("failed".to_string()));
        assert_eq!(err.to_string(), "failed");
    }

    #[tokio::test]
    async fn test_all_breeds_transport_error() {
        let api = Arc::new(
            MockBreedApi::scripted()
                .with_catalog_response(Err(ApiError::ConnectionError("Network Error".to_string()))),
        );
        let repo = repository(&api);

        let err = repo.all_breeds().await.unwrap_err();
        assert_eq!(
            err,
            RepositoryError::Transport(ApiError::ConnectionError("Network Error".to_string()))
        );
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Connection error: Network Error"));
    }

    #[tokio::test]
    async fn test_failed_fetch_does_not_poison_cache() {
        let api = Arc::new(
            MockBreedApi::new(catalog(&[("akita", vec![])]))
                .with_catalog_response(Err(ApiError::Timeout)),
        );
        let repo = repository(&api);

        assert!(repo.all_breeds().await.is_err());
        let breeds = repo.all_breeds().await.unwrap();
        assert_eq!(breeds.len(), 1);
        assert_eq!(api.catalog_calls(), 2);

        repo.all_breeds().await.unwrap();
        assert_eq!(api.catalog_calls(), 2);
    }

    #[tokio::test]
    async fn test_random_breed_image_success() {
        let api = Arc::new(
            MockBreedApi::scripted()
                .with_image_response(Ok(ImageUrlResponse::success("https://dog.ceo/random.jpg"))),
        );
        let repo = repository(&api);

        let url = repo.random_breed_image("retriever").await.unwrap();
        assert_eq!(url, "https://dog.ceo/random.jpg");
        assert_eq!(api.image_requests(), vec![("retriever".to_string(), None)]);
    }

    #[tokio::test]
    async fn test_random_breed_image_error_status() {
        let api = Arc::new(MockBreedApi::scripted().with_image_response(Ok(ImageUrlResponse {
            status: "error".to_string(),
            image_url: "Breed not found (main breed does not exist)".to_string(),
        })));
        let repo = repository(&api);

        let err = repo.random_breed_image("unicorn").await.unwrap_err();
        assert_eq!(err.to_string(), "error");
    }

    #[tokio::test]
    async fn test_random_sub_breed_image_transport_error() {
        let api = Arc::new(
            MockBreedApi::scripted()
                .with_image_response(Err(ApiError::RequestFailed("HTTP 500".to_string()))),
        );
        let repo = repository(&api);

        let err = repo
            .random_sub_breed_image("retriever", "golden")
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Transport(ApiError::RequestFailed(_))));
        assert_eq!(
            api.image_requests(),
            vec![("retriever".to_string(), Some("golden".to_string()))]
        );
    }

    #[tokio::test]
    async fn test_image_url_for_dispatches_on_sub_breed() {
        let api = Arc::new(MockBreedApi::scripted());
        let repo = repository(&api);

        repo.image_url_for(&BreedEntity::new("pug")).await.unwrap();
        repo.image_url_for(&BreedEntity::with_sub_breed("retriever", "golden"))
            .await
            .unwrap();

        assert_eq!(
            api.image_requests(),
            vec![
                ("pug".to_string(), None),
                ("retriever".to_string(), Some("golden".to_string())),
            ]
        );
    }
}
