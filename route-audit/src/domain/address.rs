//! Address type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A free-form address string, opaque to this crate.
///
/// Addresses are passed verbatim to the directions provider, which is
/// responsible for geocoding them. No structure is validated here; the
/// provider rejects addresses it cannot resolve. The empty string is a
/// sentinel meaning "no address at this position" (an unused waypoint
/// slot), so `is_empty()` is the one query callers care about.
///
/// # Examples
///
/// ```
/// use route_audit::domain::Address;
///
/// let depot = Address::from("45 Bennett Rd St Clair NSW");
/// assert!(!depot.is_empty());
/// assert_eq!(depot.as_str(), "45 Bennett Rd St Clair NSW");
///
/// assert!(Address::from("").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the "unused slot" sentinel.
    ///
    /// Whitespace-only strings are treated as empty too; a row of spaces
    /// in a CSV cell is not a routable address.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Address(s)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Address(s.to_string())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
