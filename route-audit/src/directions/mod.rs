//! Google Maps Directions API client.
//!
//! This module provides an HTTP client for the Directions API, which
//! measures the driving distance of each leg of a multi-stop journey.
//!
//! Key characteristics of the API:
//! - Errors usually arrive as HTTP 200 with a non-`OK` `status` field,
//!   so the status string must be inspected, not just the HTTP code
//! - Distances come back as integer meters under the metric-unit setting
//! - Waypoints are a single pipe-joined query parameter
//! - The provider may merge legs when it free-routes through a waypoint
//!   it judges unnecessary, so a route's leg count is not guaranteed to
//!   be waypoints + 1

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DirectionsConfig, GoogleDirectionsClient};
pub use convert::{Route, RouteLeg, convert_response};
pub use error::DirectionsError;
pub use mock::{CannedDirections, MockDirectionsClient};
pub use types::{DirectionsResponse, LegDto, RouteDto, TextValue};
