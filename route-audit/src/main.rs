use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use route_audit::batch::{
    BatchError, BatchRunner, BatchSummary, CsvItinerarySource, CsvResultSink,
    JsonlItinerarySource, JsonlResultSink,
};
use route_audit::directions::{DirectionsConfig, GoogleDirectionsClient, MockDirectionsClient};
use route_audit::reconcile::{DirectionsProvider, RouteReconciler};

#[derive(Clone, Copy)]
enum Mode {
    Csv,
    Jsonl,
}

fn usage() -> ! {
    eprintln!("Usage: route-audit <csv|jsonl> <infile> <outfile>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GOOGLE_MAPS_API_KEY   Directions API key (required for live runs)");
    eprintln!("  ROUTE_AUDIT_MOCK_DIR  Serve canned responses from this directory instead");
    std::process::exit(2);
}

async fn run_batch<P: DirectionsProvider>(
    provider: P,
    mode: Mode,
    infile: &str,
    outfile: &str,
) -> Result<BatchSummary, BatchError> {
    let runner = BatchRunner::new(RouteReconciler::new(provider));

    match mode {
        Mode::Csv => {
            let mut source = CsvItinerarySource::open(infile)?;
            let mut sink = CsvResultSink::create(outfile)?;
            runner.run(&mut source, &mut sink).await
        }
        Mode::Jsonl => {
            let mut source = JsonlItinerarySource::open(infile)?;
            let mut sink = JsonlResultSink::create(outfile)?;
            runner.run(&mut source, &mut sink).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (mode, infile, outfile) = match args.as_slice() {
        [_, mode, infile, outfile] => {
            let mode = match mode.as_str() {
                "csv" => Mode::Csv,
                "jsonl" => Mode::Jsonl,
                _ => usage(),
            };
            (mode, infile.as_str(), outfile.as_str())
        }
        _ => usage(),
    };

    // The provider and sink are scoped to this run: built here, dropped
    // when the batch returns.
    let outcome = match std::env::var("ROUTE_AUDIT_MOCK_DIR") {
        Ok(dir) => {
            let mock = match MockDirectionsClient::load(&dir) {
                Ok(mock) => mock,
                Err(e) => {
                    eprintln!("Failed to load mock directions from {dir}: {e}");
                    return ExitCode::FAILURE;
                }
            };
            println!("Using mock directions ({} canned journeys)", mock.len());
            run_batch(mock, mode, infile, outfile).await
        }
        Err(_) => {
            let api_key = std::env::var("GOOGLE_MAPS_API_KEY").unwrap_or_else(|_| {
                eprintln!("Warning: GOOGLE_MAPS_API_KEY not set. API calls will fail.");
                String::new()
            });
            let client = match GoogleDirectionsClient::new(DirectionsConfig::new(api_key)) {
                Ok(client) => client,
                Err(e) => {
                    eprintln!("Failed to create directions client: {e}");
                    return ExitCode::FAILURE;
                }
            };
            run_batch(client, mode, infile, outfile).await
        }
    };

    let summary = match outcome {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Batch aborted: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Processing complete: {summary}");
    for failure in &summary.failures {
        println!("  itinerary {} failed: {}", failure.index, failure.message);
    }
    if !summary.is_complete() {
        println!(
            "Warning: {} results written for {} itineraries read",
            summary.succeeded, summary.read
        );
    }

    ExitCode::SUCCESS
}
