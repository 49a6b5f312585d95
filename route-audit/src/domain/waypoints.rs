//! Fixed-capacity waypoint container.

use super::{Address, DomainError};

/// Maximum number of intermediate stops on a single itinerary.
///
/// This matches the source data's fixed-width layout (`Waypoint1` through
/// `Waypoint6`), which in turn keeps every itinerary within a single
/// directions request.
pub const MAX_WAYPOINTS: usize = 6;

/// The ordered intermediate stops of an itinerary (0 to 6 of them).
///
/// Source rows carry six waypoint columns of which any may be blank, and
/// documents carry sparse optional fields. Both are normalized here: empty
/// entries are dropped and the non-empty subsequence is kept in its
/// original order, which encodes the intended travel order. Immutable
/// after construction.
///
/// # Examples
///
/// ```
/// use route_audit::domain::WaypointSlots;
///
/// // Blank cells between stops are skipped, order is preserved.
/// let slots =
///     WaypointSlots::from_ordered_addresses(["Bathurst, NSW", "", "Queanbeyan, NSW"]).unwrap();
/// assert_eq!(slots.count(), 2);
/// assert_eq!(slots.expected_leg_count(), 3);
///
/// // Seven non-empty stops exceed capacity.
/// let too_many = ["a", "b", "c", "d", "e", "f", "g"];
/// assert!(WaypointSlots::from_ordered_addresses(too_many).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaypointSlots {
    addresses: Vec<Address>,
}

impl WaypointSlots {
    /// Build waypoint slots from addresses in travel order.
    ///
    /// Empty and whitespace-only entries mean "no waypoint at this
    /// position" and are dropped; the rest are kept in order.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CapacityExceeded`] if more than
    /// [`MAX_WAYPOINTS`] non-empty addresses are supplied.
    pub fn from_ordered_addresses<I, A>(addresses: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = A>,
        A: Into<Address>,
    {
        let addresses: Vec<Address> = addresses
            .into_iter()
            .map(Into::into)
            .filter(|a| !a.is_empty())
            .collect();

        if addresses.len() > MAX_WAYPOINTS {
            return Err(DomainError::CapacityExceeded {
                supplied: addresses.len(),
            });
        }

        Ok(WaypointSlots { addresses })
    }

    /// An itinerary with no intermediate stops.
    pub fn none() -> Self {
        WaypointSlots {
            addresses: Vec::new(),
        }
    }

    /// Number of non-empty waypoint slots (0 to 6).
    pub fn count(&self) -> usize {
        self.addresses.len()
    }

    /// Returns true if the itinerary has no intermediate stops.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// The non-empty waypoint addresses, in travel order.
    ///
    /// This is exactly the sequence handed to the directions provider.
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Number of legs a provider route should have for these waypoints.
    ///
    /// N waypoints split the journey into N + 1 legs. The provider may
    /// return fewer if it free-routes through a stop; see the reconciler.
    pub fn expected_leg_count(&self) -> usize {
        self.addresses.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entries_are_dropped() {
        let slots =
            WaypointSlots::from_ordered_addresses(["", "Katoomba, NSW", "", "Gloucester, NSW", ""])
                .unwrap();

        assert_eq!(slots.count(), 2);
        assert_eq!(slots.addresses()[0].as_str(), "Katoomba, NSW");
        assert_eq!(slots.addresses()[1].as_str(), "Gloucester, NSW");
    }

    #[test]
    fn no_waypoints() {
        let slots = WaypointSlots::from_ordered_addresses(Vec::<String>::new()).unwrap();
        assert!(slots.is_empty());
        assert_eq!(slots.count(), 0);
        assert_eq!(slots.expected_leg_count(), 1);
        assert_eq!(slots, WaypointSlots::none());
    }

    #[test]
    fn six_waypoints_is_full_capacity() {
        let slots =
            WaypointSlots::from_ordered_addresses(["a", "b", "c", "d", "e", "f"]).unwrap();
        assert_eq!(slots.count(), MAX_WAYPOINTS);
        assert_eq!(slots.expected_leg_count(), 7);
    }

    #[test]
    fn seven_waypoints_is_rejected() {
        let result = WaypointSlots::from_ordered_addresses(["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(result, Err(DomainError::CapacityExceeded { supplied: 7 }));
    }

    #[test]
    fn capacity_counts_only_non_empty() {
        // Eight entries, but only six carry an address.
        let slots =
            WaypointSlots::from_ordered_addresses(["a", "", "b", "c", "d", "", "e", "f"]).unwrap();
        assert_eq!(slots.count(), 6);
    }

    #[test]
    fn order_is_preserved() {
        let slots = WaypointSlots::from_ordered_addresses(["third", "first", "second"]).unwrap();
        let names: Vec<&str> = slots.addresses().iter().map(Address::as_str).collect();
        assert_eq!(names, ["third", "first", "second"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Interleave `n` generated addresses with blank entries.
    fn addresses_with_blanks(n: usize) -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec(
            prop_oneof![
                3 => "[a-z]{1,12}( [A-Z]{2,3})?",
                1 => Just(String::new()),
                1 => Just("   ".to_string()),
            ],
            n,
        )
    }

    proptest! {
        /// `count()` always equals the number of non-blank inputs, and
        /// construction fails exactly when that number exceeds capacity.
        #[test]
        fn count_matches_non_empty_inputs(inputs in addresses_with_blanks(10)) {
            let non_empty = inputs.iter().filter(|s| !s.trim().is_empty()).count();

            match WaypointSlots::from_ordered_addresses(inputs) {
                Ok(slots) => {
                    prop_assert!(non_empty <= MAX_WAYPOINTS);
                    prop_assert_eq!(slots.count(), non_empty);
                    prop_assert_eq!(slots.expected_leg_count(), non_empty + 1);
                }
                Err(DomainError::CapacityExceeded { supplied }) => {
                    prop_assert!(non_empty > MAX_WAYPOINTS);
                    prop_assert_eq!(supplied, non_empty);
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }

        /// The non-empty subsequence is preserved in order.
        #[test]
        fn subsequence_order_preserved(inputs in addresses_with_blanks(8)) {
            let expected: Vec<String> = inputs
                .iter()
                .filter(|s| !s.trim().is_empty())
                .cloned()
                .collect();

            if let Ok(slots) = WaypointSlots::from_ordered_addresses(inputs) {
                let got: Vec<String> = slots
                    .addresses()
                    .iter()
                    .map(|a| a.as_str().to_string())
                    .collect();
                prop_assert_eq!(got, expected);
            }
        }
    }
}
