//! Directions API HTTP client.
//!
//! Provides the async client used for live runs. Handles authentication,
//! request shaping (pipe-joined waypoints, metric units), and conversion
//! to routes.

use tracing::debug;

use crate::domain::Address;
use crate::reconcile::DirectionsProvider;

use super::convert::{Route, convert_response};
use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Default base URL for the Directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// How much of an unparseable body to keep in the error.
const BODY_SNIPPET_LEN: usize = 500;

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google Maps Directions API client.
#[derive(Debug, Clone)]
pub struct GoogleDirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleDirectionsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch candidate driving routes between two stops.
    ///
    /// The request always asks for `mode=driving` and `units=metric`, so
    /// returned distances are integer meters. Waypoints are sent as one
    /// pipe-joined parameter, in travel order, and only when present.
    ///
    /// # Errors
    ///
    /// HTTP 401/403 map to `Unauthorized`, 429 to `RateLimited`, other
    /// non-success codes to `ApiError`. A 200 response still fails if its
    /// `status` field is not `OK`; see [`convert_response`].
    pub async fn fetch_directions(
        &self,
        origin: &Address,
        destination: &Address,
        waypoints: &[Address],
    ) -> Result<Vec<Route>, DirectionsError> {
        let url = format!("{}/maps/api/directions/json", self.base_url);

        let mut query: Vec<(&str, String)> = vec![
            ("origin", origin.as_str().to_string()),
            ("destination", destination.as_str().to_string()),
            ("mode", "driving".to_string()),
            ("units", "metric".to_string()),
            ("key", self.api_key.clone()),
        ];

        if !waypoints.is_empty() {
            let joined = waypoints
                .iter()
                .map(Address::as_str)
                .collect::<Vec<_>>()
                .join("|");
            query.push(("waypoints", joined));
        }

        debug!(
            origin = %origin,
            destination = %destination,
            waypoints = waypoints.len(),
            "requesting directions"
        );

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DirectionsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(BODY_SNIPPET_LEN).collect()),
            })?;

        convert_response(parsed)
    }
}

impl DirectionsProvider for GoogleDirectionsClient {
    async fn directions(
        &self,
        origin: &Address,
        destination: &Address,
        waypoints: &[Address],
    ) -> Result<Vec<Route>, DirectionsError> {
        self.fetch_directions(origin, destination, waypoints).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = DirectionsConfig::new("secret");

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_builders() {
        let config = DirectionsConfig::new("secret")
            .with_base_url("http://localhost:9001")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:9001");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_builds_from_config() {
        let client = GoogleDirectionsClient::new(DirectionsConfig::new("secret"));
        assert!(client.is_ok());
    }
}
