//! HTTP client for the dog.ceo API

use super::protocol::Envelope;
use async_trait::async_trait;
use dog_quiz_application::{ApiError, BreedApi, CatalogResponse, ImageUrlResponse};
use std::time::Duration;
use tracing::{debug, warn};

/// Public dog.ceo endpoint
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

const USER_AGENT: &str = concat!("dog-quiz/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client used by the dog.ceo and image adapters
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// [`BreedApi`] adapter talking to dog.ceo (or any server with the same API)
#[derive(Debug, Clone)]
pub struct DogCeoClient {
    client: reqwest::Client,
    base_url: String,
}

impl DogCeoClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET `url` and decode the status envelope.
    ///
    /// dog.ceo answers unknown breeds with HTTP 404 and an error envelope, so
    /// the body is decoded regardless of the HTTP status. Only a body that is
    /// not an envelope turns a failing HTTP status into an [`ApiError`].
    async fn get_envelope(&self, url: &str) -> Result<Envelope, ApiError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        match Envelope::parse(&body) {
            Ok(envelope) => {
                if !envelope.is_success() {
                    warn!(
                        "dog.ceo answered {} with status '{}' (HTTP {})",
                        url,
                        envelope.status,
                        status.as_u16()
                    );
                }
                Ok(envelope)
            }
            Err(_) if !status.is_success() => Err(ApiError::RequestFailed(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ))),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl BreedApi for DogCeoClient {
    async fn all_breeds(&self) -> Result<CatalogResponse, ApiError> {
        self.get_envelope(&self.endpoint("breeds/list/all"))
            .await?
            .into_catalog()
    }

    async fn random_breed_image(&self, breed: &str) -> Result<ImageUrlResponse, ApiError> {
        self.get_envelope(&self.endpoint(&format!("breed/{}/images/random", breed)))
            .await?
            .into_image_url()
    }

    async fn random_sub_breed_image(
        &self,
        breed: &str,
        sub_breed: &str,
    ) -> Result<ImageUrlResponse, ApiError> {
        self.get_envelope(&self.endpoint(&format!(
            "breed/{}/{}/images/random",
            breed, sub_breed
        )))
        .await?
        .into_image_url()
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_connect() {
        ApiError::ConnectionError(e.to_string())
    } else {
        ApiError::RequestFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{local_client, serve_once};
    use tokio::net::TcpListener;

    fn client(base_url: &str) -> DogCeoClient {
        DogCeoClient::new(local_client(), base_url)
    }

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(Duration::from_secs(1)).is_ok());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = client("https://dog.ceo/api/");
        assert_eq!(client.base_url(), "https://dog.ceo/api");
        assert_eq!(
            client.endpoint("breeds/list/all"),
            "https://dog.ceo/api/breeds/list/all"
        );
    }

    #[tokio::test]
    async fn test_all_breeds_request() {
        let (base, server) = serve_once(
            "200 OK",
            "application/json",
            r#"{"message":{"akita":[],"hound":["afghan","basset"]},"status":"success"}"#,
        )
        .await;

        let catalog = client(&base).all_breeds().await.unwrap();

        assert_eq!(server.await.unwrap(), "GET /api/breeds/list/all HTTP/1.1");
        assert!(catalog.is_success());
        assert_eq!(catalog.breeds["hound"], vec!["afghan", "basset"]);
    }

    #[tokio::test]
    async fn test_sub_breed_image_request() {
        let (base, server) = serve_once(
            "200 OK",
            "application/json",
            r#"{"message":"https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg","status":"success"}"#,
        )
        .await;

        let response = client(&base)
            .random_sub_breed_image("hound", "afghan")
            .await
            .unwrap();

        assert_eq!(
            server.await.unwrap(),
            "GET /api/breed/hound/afghan/images/random HTTP/1.1"
        );
        assert_eq!(
            response.image_url,
            "https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg"
        );
    }

    #[tokio::test]
    async fn test_not_found_envelope_is_returned_as_status() {
        let (base, server) = serve_once(
            "404 Not Found",
            "application/json",
            r#"{"status":"error","message":"Breed not found (main breed does not exist)","code":404}"#,
        )
        .await;

        let response = client(&base).random_breed_image("unicorn").await.unwrap();

        assert_eq!(
            server.await.unwrap(),
            "GET /api/breed/unicorn/images/random HTTP/1.1"
        );
        assert_eq!(response.status, "error");
    }

    #[tokio::test]
    async fn test_http_error_without_envelope() {
        let (base, _server) = serve_once("503 Service Unavailable", "text/plain", "upstream down").await;

        let err = client(&base).all_breeds().await.unwrap_err();
        assert_eq!(
            err,
            ApiError::RequestFailed("HTTP error: 503 Service Unavailable".to_string())
        );
    }

    #[tokio::test]
    async fn test_ok_with_garbage_body_is_invalid_response() {
        let (base, _server) = serve_once("200 OK", "text/plain", "not json").await;

        let err = client(&base).all_breeds().await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}/api", addr))
            .all_breeds()
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ConnectionError(_)));
    }
}
