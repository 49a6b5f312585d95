//! Reconciled route result.

use super::{DomainError, Leg};

/// The expected distances for one itinerary: per-leg and in total.
///
/// Built once per itinerary from the legs the provider actually returned,
/// in provider order. The total is derived from the legs at construction
/// and can never be supplied or overwritten, so it always equals the sum
/// of the stored legs' distances. Under the six-waypoint cap a result
/// holds between 1 and 7 legs, but the length is not structurally capped:
/// the provider's returned leg count is authoritative.
///
/// # Examples
///
/// ```
/// use route_audit::domain::{Leg, RouteResult};
///
/// let result = RouteResult::from_legs(vec![
///     Leg::new("A".into(), "W1".into(), 100),
///     Leg::new("W1".into(), "B".into(), 250),
/// ])
/// .unwrap();
///
/// assert_eq!(result.leg_count(), 2);
/// assert_eq!(result.total_distance_meters(), 350);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    legs: Vec<Leg>,
    total_distance_meters: u64,
}

impl RouteResult {
    /// Construct a result from the legs of a returned route.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyRoute`] if `legs` is empty — a journey
    /// with no legs is a provider fault, not a zero-distance trip.
    pub fn from_legs(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        let total_distance_meters = legs.iter().map(Leg::distance_meters).sum();

        Ok(RouteResult {
            legs,
            total_distance_meters,
        })
    }

    /// The legs of the journey, in provider-returned order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Number of legs in the journey.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Total journey distance in meters (sum of the legs).
    pub fn total_distance_meters(&self) -> u64 {
        self.total_distance_meters
    }
}
