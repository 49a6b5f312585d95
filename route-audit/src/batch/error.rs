//! Batch I/O error types.

/// Errors from reading itineraries or writing results.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// Underlying file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON document parsing or writing failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column is missing from the CSV header
    #[error("missing required column: {column}")]
    MissingColumn { column: String },

    /// One source record could not be turned into an itinerary
    #[error("bad record at index {index}: {message}")]
    BadRecord { index: usize, message: String },
}
