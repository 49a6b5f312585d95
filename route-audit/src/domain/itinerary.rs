//! Itinerary request type.

use super::{Address, DomainError, WaypointSlots};

/// One planned journey: start, end, and ordered intermediate stops.
///
/// This is the unit of work for reconciliation — one request yields
/// exactly one [`RouteResult`](super::RouteResult) or one error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryRequest {
    start: Address,
    end: Address,
    waypoints: WaypointSlots,
}

impl ItineraryRequest {
    /// Construct a request, requiring non-blank start and end addresses.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingAddress`] if either endpoint is
    /// blank. Waypoints may be empty; a direct journey is a single leg.
    pub fn new(
        start: impl Into<Address>,
        end: impl Into<Address>,
        waypoints: WaypointSlots,
    ) -> Result<Self, DomainError> {
        let start = start.into();
        let end = end.into();

        if start.is_empty() {
            return Err(DomainError::MissingAddress("start_address"));
        }
        if end.is_empty() {
            return Err(DomainError::MissingAddress("end_address"));
        }

        Ok(ItineraryRequest {
            start,
            end,
            waypoints,
        })
    }

    /// The journey's starting address.
    pub fn start(&self) -> &Address {
        &self.start
    }

    /// The journey's final destination.
    pub fn end(&self) -> &Address {
        &self.end
    }

    /// The intermediate stops, in travel order.
    pub fn waypoints(&self) -> &WaypointSlots {
        &self.waypoints
    }
}
