//! Directions API response DTOs.
//!
//! These types map directly to the Directions JSON responses. Fields the
//! audit does not use (polylines, durations, step detail) are simply not
//! modelled; serde ignores them on deserialization.

use serde::{Deserialize, Serialize};

/// Top-level response from the directions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsResponse {
    /// Request status: `"OK"`, `"ZERO_RESULTS"`, `"NOT_FOUND"`,
    /// `"OVER_QUERY_LIMIT"`, `"REQUEST_DENIED"`, `"INVALID_REQUEST"`, ...
    pub status: String,

    /// Human-readable detail accompanying a non-OK status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Candidate routes, best first. Empty on non-OK statuses.
    #[serde(default)]
    pub routes: Vec<RouteDto>,
}

/// One candidate route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDto {
    /// The route's legs, one per pair of consecutive stops.
    #[serde(default)]
    pub legs: Vec<LegDto>,
}

/// One leg of a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegDto {
    /// Start address as resolved by the provider's geocoder.
    #[serde(default)]
    pub start_address: String,

    /// End address as resolved by the provider's geocoder.
    #[serde(default)]
    pub end_address: String,

    /// Leg distance. Absent on some degenerate legs; validated downstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<TextValue>,
}

/// A measurement with a display string, e.g. `{"text": "162 km", "value": 162000}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextValue {
    /// The measurement in base units (meters, for distances).
    pub value: i64,

    /// Human-readable rendering of the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ok_response() {
        let json = r#"{
            "status": "OK",
            "routes": [{
                "legs": [
                    {
                        "start_address": "Summer Hill NSW, Australia",
                        "end_address": "Bathurst NSW, Australia",
                        "distance": {"text": "162 km", "value": 162000},
                        "duration": {"text": "2 hours 10 mins", "value": 7800}
                    }
                ],
                "overview_polyline": {"points": "abc"}
            }]
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "OK");
        assert_eq!(response.routes.len(), 1);
        let leg = &response.routes[0].legs[0];
        assert_eq!(leg.start_address, "Summer Hill NSW, Australia");
        assert_eq!(leg.distance.as_ref().unwrap().value, 162_000);
    }

    #[test]
    fn parses_error_response_without_routes() {
        let json = r#"{
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "REQUEST_DENIED");
        assert!(response.routes.is_empty());
        assert_eq!(
            response.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
    }

    #[test]
    fn parses_leg_without_distance() {
        let json = r#"{"start_address": "A", "end_address": "B"}"#;
        let leg: LegDto = serde_json::from_str(json).unwrap();
        assert!(leg.distance.is_none());
    }
}
