//! Batch orchestration: itinerary sources, result sinks, and the runner.
//!
//! A batch run reads itineraries from a source (CSV rows or JSON-lines
//! documents), reconciles each one, and writes results to a sink of the
//! same shape. One itinerary's failure never aborts the batch; the runner
//! tallies successes and failures and the final summary is checked
//! against the number of itineraries read.

mod csv_io;
mod error;
mod jsonl;
mod runner;
mod summary;

pub use csv_io::{CsvItinerarySource, CsvResultSink};
pub use error::BatchError;
pub use jsonl::{JsonlItinerarySource, JsonlResultSink};
pub use runner::{BatchRunner, ItinerarySource, ResultSink};
pub use summary::{BatchFailure, BatchSummary};
