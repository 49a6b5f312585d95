//! Leg-count mismatch policy.

/// What to do when the provider returns a different number of legs than
/// the itinerary's waypoints imply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    /// Accept the provider's leg count as authoritative and report
    /// exactly the legs returned. This is the historical behavior of the
    /// audit and the default.
    #[default]
    Adaptive,

    /// Fail the itinerary when the returned count differs from
    /// `waypoints + 1`. Useful when waypoint alignment matters more than
    /// coverage, e.g. when each leg's distance is compared per-stop.
    Strict,
}
