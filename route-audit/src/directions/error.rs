//! Directions client error types.

use std::fmt;

/// Errors from the directions provider.
///
/// Everything the provider can do wrong lives here, including data faults
/// detected after a structurally successful call (no routes, an unusable
/// leg). The reconciler treats any of these as a provider failure for the
/// itinerary being processed.
#[derive(Debug)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Endpoint returned an error HTTP status code
    ApiError { status: u16, message: String },

    /// API rejected the key (REQUEST_DENIED or HTTP 401/403)
    Unauthorized,

    /// Query quota exhausted (OVER_QUERY_LIMIT or HTTP 429)
    RateLimited,

    /// No route exists between the requested stops
    NoRoute,

    /// Non-OK API status not covered by a more specific variant
    Status { status: String, message: String },

    /// A returned leg is unusable (missing or negative distance)
    InvalidLeg(&'static str),
}

impl fmt::Display for DirectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionsError::Http(e) => write!(f, "HTTP error: {e}"),
            DirectionsError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            DirectionsError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            DirectionsError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            DirectionsError::RateLimited => write!(f, "rate limited by directions API"),
            DirectionsError::NoRoute => write!(f, "no route found between the requested stops"),
            DirectionsError::Status { status, message } => {
                write!(f, "directions API status {status}: {message}")
            }
            DirectionsError::InvalidLeg(msg) => write!(f, "invalid leg in route: {msg}"),
        }
    }
}

impl std::error::Error for DirectionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectionsError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DirectionsError {
    fn from(err: reqwest::Error) -> Self {
        DirectionsError::Http(err)
    }
}
