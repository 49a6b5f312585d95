//! Route reconciliation — the core of the audit.
//!
//! Takes one itinerary, asks the directions provider for a route through
//! its stops, and aligns the returned leg sequence with the requested
//! stop sequence to produce a per-leg and total expected distance.
//!
//! The provider is allowed to merge legs when it free-routes through a
//! waypoint it judges unnecessary, so the returned leg count may differ
//! from `waypoints + 1`. Under the default policy the returned count is
//! authoritative: the result reports exactly the legs the provider
//! computed, never a padded or truncated set.

mod policy;
mod reconciler;

pub use policy::MismatchPolicy;
pub use reconciler::{DirectionsProvider, ReconcileError, RouteReconciler};
