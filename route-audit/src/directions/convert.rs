//! Conversion from Directions API DTOs to routes.
//!
//! This layer maps the API's status strings onto the error taxonomy and
//! strips the wire types down to what the reconciler consumes. Distance
//! stays an `Option<i64>` here: deciding what a missing or negative value
//! means is reconciliation policy, not transport.

use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// One candidate route, ready for reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Legs in travel order.
    pub legs: Vec<RouteLeg>,
}

/// One leg of a candidate route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLeg {
    /// Start address as resolved by the provider.
    pub start_address: String,

    /// End address as resolved by the provider.
    pub end_address: String,

    /// Leg distance in meters, exactly as reported. `None` if the wire
    /// leg carried no distance; never coerced to zero here.
    pub distance_meters: Option<i64>,
}

/// Convert a directions response into candidate routes.
///
/// # Errors
///
/// Non-`OK` statuses become the matching [`DirectionsError`]:
/// `ZERO_RESULTS`/`NOT_FOUND` → `NoRoute`, `REQUEST_DENIED` →
/// `Unauthorized`, `OVER_QUERY_LIMIT` → `RateLimited`, anything else →
/// `Status`.
pub fn convert_response(response: DirectionsResponse) -> Result<Vec<Route>, DirectionsError> {
    match response.status.as_str() {
        "OK" => Ok(response
            .routes
            .into_iter()
            .map(|route| Route {
                legs: route
                    .legs
                    .into_iter()
                    .map(|leg| RouteLeg {
                        start_address: leg.start_address,
                        end_address: leg.end_address,
                        distance_meters: leg.distance.map(|d| d.value),
                    })
                    .collect(),
            })
            .collect()),
        "ZERO_RESULTS" | "NOT_FOUND" => Err(DirectionsError::NoRoute),
        "REQUEST_DENIED" => Err(DirectionsError::Unauthorized),
        "OVER_QUERY_LIMIT" => Err(DirectionsError::RateLimited),
        other => Err(DirectionsError::Status {
            status: other.to_string(),
            message: response.error_message.unwrap_or_default(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::types::{LegDto, RouteDto, TextValue};

    fn leg_dto(from: &str, to: &str, meters: Option<i64>) -> LegDto {
        LegDto {
            start_address: from.to_string(),
            end_address: to.to_string(),
            distance: meters.map(|value| TextValue { value, text: None }),
        }
    }

    fn ok_response(legs: Vec<LegDto>) -> DirectionsResponse {
        DirectionsResponse {
            status: "OK".into(),
            error_message: None,
            routes: vec![RouteDto { legs }],
        }
    }

    #[test]
    fn ok_response_converts_legs_in_order() {
        let response = ok_response(vec![
            leg_dto("A", "W1", Some(100)),
            leg_dto("W1", "B", Some(250)),
        ]);

        let routes = convert_response(response).unwrap();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].legs.len(), 2);
        assert_eq!(routes[0].legs[0].start_address, "A");
        assert_eq!(routes[0].legs[0].distance_meters, Some(100));
        assert_eq!(routes[0].legs[1].end_address, "B");
    }

    #[test]
    fn missing_distance_survives_conversion() {
        // Validation is the reconciler's job; conversion is lossless.
        let response = ok_response(vec![leg_dto("A", "B", None)]);
        let routes = convert_response(response).unwrap();
        assert_eq!(routes[0].legs[0].distance_meters, None);
    }

    #[test]
    fn status_mapping() {
        let zero = DirectionsResponse {
            status: "ZERO_RESULTS".into(),
            error_message: None,
            routes: vec![],
        };
        assert!(matches!(
            convert_response(zero),
            Err(DirectionsError::NoRoute)
        ));

        let denied = DirectionsResponse {
            status: "REQUEST_DENIED".into(),
            error_message: Some("bad key".into()),
            routes: vec![],
        };
        assert!(matches!(
            convert_response(denied),
            Err(DirectionsError::Unauthorized)
        ));

        let quota = DirectionsResponse {
            status: "OVER_QUERY_LIMIT".into(),
            error_message: None,
            routes: vec![],
        };
        assert!(matches!(
            convert_response(quota),
            Err(DirectionsError::RateLimited)
        ));

        let invalid = DirectionsResponse {
            status: "INVALID_REQUEST".into(),
            error_message: Some("waypoints malformed".into()),
            routes: vec![],
        };
        match convert_response(invalid) {
            Err(DirectionsError::Status { status, message }) => {
                assert_eq!(status, "INVALID_REQUEST");
                assert_eq!(message, "waypoints malformed");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }
}
