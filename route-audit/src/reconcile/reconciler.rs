//! The route reconciler and its provider seam.

use std::future::Future;

use tracing::debug;

use crate::directions::{DirectionsError, Route};
use crate::domain::{Address, DomainError, ItineraryRequest, Leg, RouteResult};

use super::policy::MismatchPolicy;

/// Trait for fetching candidate routes between stops.
///
/// This abstraction allows the reconciler to be tested with canned data
/// and lets batch runs swap the live client for the mock.
pub trait DirectionsProvider {
    /// Fetch driving routes from `origin` to `destination` through
    /// `waypoints`, in order. Distances are integer meters.
    ///
    /// Returns candidate routes best-first; the reconciler only ever uses
    /// the first.
    fn directions(
        &self,
        origin: &Address,
        destination: &Address,
        waypoints: &[Address],
    ) -> impl Future<Output = Result<Vec<Route>, DirectionsError>> + Send;
}

/// Errors from reconciling one itinerary.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// The provider call failed, returned no usable route, or returned a
    /// leg with missing/negative distance
    #[error("directions provider failed: {0}")]
    Provider(#[from] DirectionsError),

    /// Returned leg count differs from expected under the strict policy
    #[error("leg count mismatch: expected {expected}, provider returned {actual}")]
    Mismatch { expected: usize, actual: usize },

    /// The itinerary itself was invalid
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Reconciles itineraries against a directions provider.
///
/// Stateless between calls: each itinerary is reconciled independently,
/// so callers are free to run reconciliations concurrently if they want
/// the throughput.
#[derive(Debug, Clone)]
pub struct RouteReconciler<P> {
    provider: P,
    policy: MismatchPolicy,
}

impl<P: DirectionsProvider> RouteReconciler<P> {
    /// Create a reconciler with the default (adaptive) mismatch policy.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            policy: MismatchPolicy::default(),
        }
    }

    /// Override the mismatch policy.
    pub fn with_policy(mut self, policy: MismatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Compute the expected distances for one itinerary.
    ///
    /// Requests a route through the itinerary's non-empty waypoints, takes
    /// the first candidate route, and reports its legs in returned order
    /// with their summed total.
    ///
    /// # Errors
    ///
    /// - [`ReconcileError::Provider`] when the call fails, no route comes
    ///   back, the route has zero legs, or any leg's distance is missing
    ///   or negative
    /// - [`ReconcileError::Mismatch`] when the leg count differs from
    ///   `waypoints + 1` under [`MismatchPolicy::Strict`]
    pub async fn reconcile(&self, request: &ItineraryRequest) -> Result<RouteResult, ReconcileError> {
        let expected = request.waypoints().expected_leg_count();

        let routes = self
            .provider
            .directions(request.start(), request.end(), request.waypoints().addresses())
            .await?;

        // Only the provider's best/default route is used.
        let route = routes.into_iter().next().ok_or(DirectionsError::NoRoute)?;

        if route.legs.is_empty() {
            return Err(DirectionsError::NoRoute.into());
        }

        let actual = route.legs.len();
        if actual != expected {
            match self.policy {
                MismatchPolicy::Strict => {
                    return Err(ReconcileError::Mismatch { expected, actual });
                }
                MismatchPolicy::Adaptive => {
                    debug!(
                        expected,
                        actual,
                        start = %request.start(),
                        "provider merged or split legs; using returned count"
                    );
                }
            }
        }

        let mut legs = Vec::with_capacity(actual);
        for leg in route.legs {
            let meters = leg
                .distance_meters
                .ok_or(DirectionsError::InvalidLeg("missing distance"))?;
            if meters < 0 {
                return Err(DirectionsError::InvalidLeg("negative distance").into());
            }

            legs.push(Leg::new(
                leg.start_address.into(),
                leg.end_address.into(),
                meters as u64,
            ));
        }

        Ok(RouteResult::from_legs(legs)?)
    }
}
