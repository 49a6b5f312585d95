//! Batch run summary.

use std::fmt;

/// One failed itinerary: where it sat in the source and why it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// Zero-based index of the itinerary in source order.
    pub index: usize,
    /// Rendered error for the failure.
    pub message: String,
}

/// Tally of a completed batch run.
///
/// The interesting post-condition is `results written == itineraries
/// read`; a shortfall means some itineraries failed, which is diagnostic
/// information for the analyst, not a batch error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Itineraries read from the source, including unparseable ones.
    pub read: usize,
    /// Results successfully reconciled and written to the sink.
    pub succeeded: usize,
    /// Per-itinerary failures, in source order.
    pub failures: Vec<BatchFailure>,
}

impl BatchSummary {
    /// Number of failed itineraries.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// True when every itinerary read produced a written result.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.succeeded == self.read
    }

    pub(crate) fn record_failure(&mut self, index: usize, message: String) {
        self.failures.push(BatchFailure { index, message });
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} read, {} succeeded, {} failed",
            self.read,
            self.succeeded,
            self.failed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_run() {
        let summary = BatchSummary {
            read: 10,
            succeeded: 10,
            failures: vec![],
        };

        assert!(summary.is_complete());
        assert_eq!(summary.to_string(), "10 read, 10 succeeded, 0 failed");
    }

    #[test]
    fn partial_failure() {
        let mut summary = BatchSummary {
            read: 10,
            succeeded: 9,
            failures: vec![],
        };
        summary.record_failure(3, "no route found between the requested stops".into());

        assert!(!summary.is_complete());
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.failures[0].index, 3);
        assert_eq!(summary.to_string(), "10 read, 9 succeeded, 1 failed");
    }
}
