//! Mock directions client for running without API access.
//!
//! Loads canned directions responses from JSON files and serves them as
//! if they were live API responses. Useful for development, offline
//! batch dry-runs, and tests that need no network.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::Address;
use crate::reconcile::DirectionsProvider;

use super::convert::{Route, convert_response};
use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// One canned journey: an origin/destination pair and the response the
/// mock should serve for it.
///
/// Stored one per `.json` file in the mock data directory. Lookups match
/// on the exact origin and destination strings; waypoints are ignored,
/// which is fine for a mock (a canned response already encodes whatever
/// legs the journey should have).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CannedDirections {
    pub origin: String,
    pub destination: String,
    pub response: DirectionsResponse,
}

/// Mock directions client that serves data from canned responses.
#[derive(Debug, Clone)]
pub struct MockDirectionsClient {
    responses: HashMap<(String, String), DirectionsResponse>,
}

impl MockDirectionsClient {
    /// Create a mock client from canned entries.
    pub fn with_canned(canned: impl IntoIterator<Item = CannedDirections>) -> Self {
        let responses = canned
            .into_iter()
            .map(|c| ((c.origin, c.destination), c.response))
            .collect();

        Self { responses }
    }

    /// Create a mock client by loading every `.json` file in a directory.
    ///
    /// Each file holds one [`CannedDirections`] entry.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self, DirectionsError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| DirectionsError::ApiError {
            status: 0,
            message: format!("failed to read mock data directory: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| DirectionsError::ApiError {
                status: 0,
                message: format!("failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| DirectionsError::ApiError {
                status: 0,
                message: format!("failed to read {path:?}: {e}"),
            })?;

            let canned: CannedDirections =
                serde_json::from_str(&json).map_err(|e| DirectionsError::Json {
                    message: format!("failed to parse {path:?}: {e}"),
                    body: None,
                })?;

            responses.insert((canned.origin, canned.destination), canned.response);
        }

        Ok(Self { responses })
    }

    /// Number of canned journeys loaded.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Returns true if no canned journeys are loaded.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl DirectionsProvider for MockDirectionsClient {
    async fn directions(
        &self,
        origin: &Address,
        destination: &Address,
        _waypoints: &[Address],
    ) -> Result<Vec<Route>, DirectionsError> {
        let key = (
            origin.as_str().to_string(),
            destination.as_str().to_string(),
        );

        match self.responses.get(&key) {
            Some(response) => convert_response(response.clone()),
            None => Err(DirectionsError::NoRoute),
        }
    }
}
