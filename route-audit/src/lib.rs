//! Expected-distance auditing for planned truck itineraries.
//!
//! Reconciles planned multi-stop itineraries against the Google Maps
//! Directions API to produce expected per-leg and total travel distances,
//! for later comparison against recorded odometer readings.

pub mod batch;
pub mod directions;
pub mod domain;
pub mod reconcile;
