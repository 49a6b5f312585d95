//! Journey leg type.

use super::Address;

/// One provider-measured segment of a journey between two consecutive
/// stops.
///
/// Legs are produced only from directions-provider output; the reconciler
/// rejects legs whose wire distance is missing or negative before a `Leg`
/// is ever built, so `distance_meters` is non-negative by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    start_address: Address,
    end_address: Address,
    distance_meters: u64,
}

impl Leg {
    /// Construct a leg from provider-reported endpoints and distance.
    pub fn new(start_address: Address, end_address: Address, distance_meters: u64) -> Self {
        Leg {
            start_address,
            end_address,
            distance_meters,
        }
    }

    /// The address this leg departs from, as the provider reported it.
    ///
    /// Note this is the provider's resolved form, not the raw itinerary
    /// cell (the provider normalizes addresses while geocoding).
    pub fn start_address(&self) -> &Address {
        &self.start_address
    }

    /// The address this leg arrives at, as the provider reported it.
    pub fn end_address(&self) -> &Address {
        &self.end_address
    }

    /// Driving distance of this leg in meters.
    pub fn distance_meters(&self) -> u64 {
        self.distance_meters
    }
}
