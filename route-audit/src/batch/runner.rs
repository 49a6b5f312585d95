//! The batch runner.

use tracing::{info, warn};

use crate::domain::{ItineraryRequest, RouteResult};
use crate::reconcile::{DirectionsProvider, RouteReconciler};

use super::error::BatchError;
use super::summary::BatchSummary;

/// A source of itineraries in processing order.
///
/// Sources are scoped to one batch run: opened by the caller before the
/// run and dropped when it ends.
pub trait ItinerarySource {
    /// Pull the next itinerary, `None` when the source is exhausted.
    ///
    /// A `Some(Err(..))` is a per-record fault (malformed row, invalid
    /// addresses); the runner records it and keeps pulling.
    fn next_itinerary(&mut self) -> Option<Result<ItineraryRequest, BatchError>>;
}

/// A sink for reconciled results.
pub trait ResultSink {
    /// Write one result.
    fn write_result(&mut self, result: &RouteResult) -> Result<(), BatchError>;

    /// Flush the sink at the end of the run.
    fn finish(&mut self) -> Result<(), BatchError>;
}

/// Runs a whole batch of itineraries through the reconciler.
///
/// Itineraries are processed sequentially, each one to completion
/// (including the provider call) before the next begins.
pub struct BatchRunner<P> {
    reconciler: RouteReconciler<P>,
}

impl<P: DirectionsProvider> BatchRunner<P> {
    /// Create a runner around a reconciler.
    pub fn new(reconciler: RouteReconciler<P>) -> Self {
        Self { reconciler }
    }

    /// Process every itinerary in `source`, writing results to `sink`.
    ///
    /// Per-itinerary failures (bad records, provider errors) are recorded
    /// in the summary and do not stop the run. If the final written count
    /// falls short of the read count a warning is logged; the summary is
    /// still returned normally.
    ///
    /// # Errors
    ///
    /// Only sink write/flush failures abort the batch — if results cannot
    /// be persisted there is nothing useful to continue with.
    pub async fn run<S, K>(
        &self,
        source: &mut S,
        sink: &mut K,
    ) -> Result<BatchSummary, BatchError>
    where
        S: ItinerarySource,
        K: ResultSink,
    {
        let mut summary = BatchSummary::default();

        while let Some(item) = source.next_itinerary() {
            let index = summary.read;
            summary.read += 1;

            match item {
                Ok(request) => match self.reconciler.reconcile(&request).await {
                    Ok(result) => {
                        sink.write_result(&result)?;
                        summary.succeeded += 1;
                    }
                    Err(e) => {
                        warn!(index, error = %e, "itinerary failed to reconcile");
                        summary.record_failure(index, e.to_string());
                    }
                },
                Err(e) => {
                    warn!(index, error = %e, "itinerary could not be read");
                    summary.record_failure(index, e.to_string());
                }
            }
        }

        sink.finish()?;

        if summary.is_complete() {
            info!(read = summary.read, "batch complete");
        } else {
            warn!(
                read = summary.read,
                written = summary.succeeded,
                "result count does not match itinerary count"
            );
        }

        Ok(summary)
    }
}
