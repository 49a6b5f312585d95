//! Domain error types.
//!
//! These errors represent validation failures in itinerary data. They are
//! distinct from provider/IO errors and are raised before any external
//! call is made.

use super::waypoints::MAX_WAYPOINTS;

/// Domain-level errors for itinerary validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// More than six non-empty waypoints were supplied
    #[error("too many waypoints: {supplied} supplied, at most {MAX_WAYPOINTS} allowed")]
    CapacityExceeded { supplied: usize },

    /// A route result must contain at least one leg
    #[error("route must have at least one leg")]
    EmptyRoute,

    /// A required itinerary address was blank
    #[error("missing required address: {0}")]
    MissingAddress(&'static str),
}
