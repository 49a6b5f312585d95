//! Domain types for itinerary-to-distance reconciliation.
//!
//! These types represent validated itinerary data. Invariants are enforced
//! at construction time, so code that receives these types can trust them:
//! a `WaypointSlots` never holds more than six stops, and a `RouteResult`'s
//! total is always the sum of its own legs.

mod address;
mod error;
mod itinerary;
mod leg;
mod route;
mod waypoints;

pub use address::Address;
pub use error::DomainError;
pub use itinerary::ItineraryRequest;
pub use leg::Leg;
pub use route::RouteResult;
pub use waypoints::{MAX_WAYPOINTS, WaypointSlots};
