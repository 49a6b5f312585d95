//! JSON-lines document source and sink.
//!
//! Document mode mirrors the database layout this data historically
//! lived in: one document per itinerary with sparse optional
//! `waypoint_1..waypoint_6` fields, and one result document per journey
//! with its legs and total distance.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{ItineraryRequest, RouteResult, WaypointSlots};

use super::error::BatchError;
use super::runner::{ItinerarySource, ResultSink};

/// Source document: one planned itinerary.
#[derive(Debug, Deserialize)]
struct ItineraryDocument {
    start_address: String,
    end_address: String,
    #[serde(default)]
    waypoint_1: Option<String>,
    #[serde(default)]
    waypoint_2: Option<String>,
    #[serde(default)]
    waypoint_3: Option<String>,
    #[serde(default)]
    waypoint_4: Option<String>,
    #[serde(default)]
    waypoint_5: Option<String>,
    #[serde(default)]
    waypoint_6: Option<String>,
}

impl ItineraryDocument {
    fn into_request(self) -> Result<ItineraryRequest, crate::domain::DomainError> {
        let waypoints = [
            self.waypoint_1,
            self.waypoint_2,
            self.waypoint_3,
            self.waypoint_4,
            self.waypoint_5,
            self.waypoint_6,
        ]
        .into_iter()
        .map(Option::unwrap_or_default);

        let slots = WaypointSlots::from_ordered_addresses(waypoints)?;
        ItineraryRequest::new(self.start_address, self.end_address, slots)
    }
}

/// Result document: one leg of a reconciled journey.
#[derive(Debug, Serialize)]
struct LegDocument<'a> {
    /// 1-based position of the leg within the journey.
    leg: usize,
    start_address: &'a str,
    end_address: &'a str,
    /// Leg distance in meters.
    distance: u64,
}

/// Result document: one reconciled journey.
#[derive(Debug, Serialize)]
struct RouteDocument<'a> {
    legs: Vec<LegDocument<'a>>,
    total_distance: u64,
}

impl<'a> RouteDocument<'a> {
    fn from_result(result: &'a RouteResult) -> Self {
        RouteDocument {
            legs: result
                .legs()
                .iter()
                .enumerate()
                .map(|(i, leg)| LegDocument {
                    leg: i + 1,
                    start_address: leg.start_address().as_str(),
                    end_address: leg.end_address().as_str(),
                    distance: leg.distance_meters(),
                })
                .collect(),
            total_distance: result.total_distance_meters(),
        }
    }
}

/// Reads itinerary documents from a JSON-lines file.
pub struct JsonlItinerarySource {
    lines: Lines<BufReader<File>>,
    index: usize,
}

impl JsonlItinerarySource {
    /// Open a JSON-lines file of itinerary documents.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BatchError> {
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            index: 0,
        })
    }

    fn parse_line(&self, line: &str) -> Result<ItineraryRequest, BatchError> {
        let bad_record = |message: String| BatchError::BadRecord {
            index: self.index,
            message,
        };

        let document: ItineraryDocument =
            serde_json::from_str(line).map_err(|e| bad_record(e.to_string()))?;

        document.into_request().map_err(|e| bad_record(e.to_string()))
    }
}

impl ItinerarySource for JsonlItinerarySource {
    fn next_itinerary(&mut self) -> Option<Result<ItineraryRequest, BatchError>> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let item = self.parse_line(&line);
                    self.index += 1;
                    return Some(item);
                }
                Err(e) => {
                    self.index += 1;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

/// Writes result documents to a JSON-lines file, one per journey.
///
/// The output file is truncated on creation, replacing any previous run's
/// results.
pub struct JsonlResultSink {
    writer: BufWriter<File>,
}

impl JsonlResultSink {
    /// Create (or replace) the output file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, BatchError> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl ResultSink for JsonlResultSink {
    fn write_result(&mut self, result: &RouteResult) -> Result<(), BatchError> {
        let document = RouteDocument::from_result(result);
        serde_json::to_writer(&mut self.writer, &document)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), BatchError> {
        self.writer.flush()?;
        Ok(())
    }
}
