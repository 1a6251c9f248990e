//! Scripted port implementations shared by the unit tests of this crate.

use crate::ports::breed_api::{ApiError, BreedApi, CatalogResponse, ImageUrlResponse};
use crate::ports::image_loader::{ImageLoadError, ImageLoader};
use async_trait::async_trait;
use dog_quiz_domain::DecodedImage;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub(crate) fn catalog(entries: &[(&str, Vec<&str>)]) -> BTreeMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(breed, subs)| {
            (
                breed.to_string(),
                subs.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
}

/// Five top-level breeds and two sub-breeds: seven selectable entities
pub(crate) fn sample_catalog() -> BTreeMap<String, Vec<String>> {
    catalog(&[
        ("affenpinscher", vec![]),
        ("african", vec![]),
        ("akita", vec![]),
        ("australian", vec!["kelpie", "shepherd"]),
        ("beagle", vec![]),
        ("pug", vec![]),
    ])
}

/// [`BreedApi`] answering from scripted queues
///
/// When a queue is empty the catalog falls back to `fallback_catalog` and
/// image lookups succeed with a URL derived from the breed path.
pub(crate) struct MockBreedApi {
    catalog_responses: Mutex<VecDeque<Result<CatalogResponse, ApiError>>>,
    fallback_catalog: Option<BTreeMap<String, Vec<String>>>,
    image_responses: Mutex<VecDeque<Result<ImageUrlResponse, ApiError>>>,
    catalog_delay: Duration,
    catalog_calls: AtomicUsize,
    image_requests: Mutex<Vec<(String, Option<String>)>>,
}

impl MockBreedApi {
    pub(crate) fn new(breeds: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            catalog_responses: Mutex::new(VecDeque::new()),
            fallback_catalog: Some(breeds),
            image_responses: Mutex::new(VecDeque::new()),
            catalog_delay: Duration::ZERO,
            catalog_calls: AtomicUsize::new(0),
            image_requests: Mutex::new(Vec::new()),
        }
    }

    /// No fallback: every catalog call must be scripted
    pub(crate) fn scripted() -> Self {
        Self {
            fallback_catalog: None,
            ..Self::new(BTreeMap::new())
        }
    }

    pub(crate) fn with_catalog_response(self, response: Result<CatalogResponse, ApiError>) -> Self {
        self.catalog_responses.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn with_image_response(self, response: Result<ImageUrlResponse, ApiError>) -> Self {
        self.image_responses.lock().unwrap().push_back(response);
        self
    }

    pub(crate) fn with_catalog_delay(mut self, delay: Duration) -> Self {
        self.catalog_delay = delay;
        self
    }

    pub(crate) fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn image_requests(&self) -> Vec<(String, Option<String>)> {
        self.image_requests.lock().unwrap().clone()
    }

    fn next_image(&self, path: &str) -> Result<ImageUrlResponse, ApiError> {
        self.image_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(ImageUrlResponse::success(format!(
                    "https://images.dog.ceo/breeds/{}/n02085620_1.jpg",
                    path
                )))
            })
    }
}

#[async_trait]
impl BreedApi for MockBreedApi {
    async fn all_breeds(&self) -> Result<CatalogResponse, ApiError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        if !self.catalog_delay.is_zero() {
            tokio::time::sleep(self.catalog_delay).await;
        }
        let scripted = self.catalog_responses.lock().unwrap().pop_front();
        match (scripted, &self.fallback_catalog) {
            (Some(response), _) => response,
            (None, Some(breeds)) => Ok(CatalogResponse::success(breeds.clone())),
            (None, None) => Err(ApiError::RequestFailed("no catalog scripted".to_string())),
        }
    }

    async fn random_breed_image(&self, breed: &str) -> Result<ImageUrlResponse, ApiError> {
        self.image_requests
            .lock()
            .unwrap()
            .push((breed.to_string(), None));
        self.next_image(breed)
    }

    async fn random_sub_breed_image(
        &self,
        breed: &str,
        sub_breed: &str,
    ) -> Result<ImageUrlResponse, ApiError> {
        self.image_requests
            .lock()
            .unwrap()
            .push((breed.to_string(), Some(sub_breed.to_string())));
        self.next_image(&format!("{}-{}", breed, sub_breed))
    }
}

/// [`ImageLoader`] producing an `n × 1` image on its n-th call
///
/// The width makes it possible to tell which call produced an image.
/// Failures are scripted per call number; delays are consumed in order.
pub(crate) struct MockImageLoader {
    failures: Mutex<HashMap<usize, ImageLoadError>>,
    delays: Mutex<VecDeque<Duration>>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl MockImageLoader {
    pub(crate) fn new() -> Self {
        Self {
            failures: Mutex::new(HashMap::new()),
            delays: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    /// Fail the `call`-th load (1-based) with `error`
    pub(crate) fn fail_call(self, call: usize, error: ImageLoadError) -> Self {
        self.failures.lock().unwrap().insert(call, error);
        self
    }

    pub(crate) fn with_delays(self, delays: &[Duration]) -> Self {
        self.delays.lock().unwrap().extend(delays.iter().copied());
        self
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageLoader for MockImageLoader {
    async fn load(&self, url: &str) -> Result<DecodedImage, ImageLoadError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.urls.lock().unwrap().push(url.to_string());

        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.failures.lock().unwrap().remove(&call);
        if let Some(error) = failure {
            return Err(error);
        }

        let width = call as u32;
        Ok(DecodedImage::from_rgba(url, width, 1, vec![0u8; call * 4]).unwrap())
    }
}
