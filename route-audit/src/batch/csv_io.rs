//! CSV itinerary source and result sink.
//!
//! Input rows carry `StartAddress,Waypoint1..Waypoint6,EndAddress` with
//! blank cells for unused waypoint slots. Output rows are fixed-width:
//! the addresses of the legs actually travelled, then seven distance
//! columns and a total, blank-padded so every row has the same shape
//! regardless of leg count. The padding lives entirely here — results
//! themselves are variable-length.

use std::fs::File;
use std::path::Path;

use crate::domain::{ItineraryRequest, MAX_WAYPOINTS, RouteResult, WaypointSlots};

use super::error::BatchError;
use super::runner::{ItinerarySource, ResultSink};

/// Fixed number of leg columns in an output row (six waypoints make at
/// most seven legs).
const LEG_COLUMNS: usize = MAX_WAYPOINTS + 1;

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

/// Reads itineraries from a CSV file, one row at a time.
#[derive(Debug)]
pub struct CsvItinerarySource {
    reader: csv::Reader<File>,
    record: csv::StringRecord,
    start_idx: usize,
    end_idx: usize,
    waypoint_idx: [Option<usize>; MAX_WAYPOINTS],
    index: usize,
}

impl CsvItinerarySource {
    /// Open a CSV file and resolve its header.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or the `StartAddress` /
    /// `EndAddress` columns are missing. Waypoint columns are optional;
    /// a missing `WaypointN` column reads as an empty slot.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BatchError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)?;

        let headers = reader.headers()?.clone();

        let start_idx =
            column_index(&headers, "StartAddress").ok_or_else(|| BatchError::MissingColumn {
                column: "StartAddress".into(),
            })?;
        let end_idx =
            column_index(&headers, "EndAddress").ok_or_else(|| BatchError::MissingColumn {
                column: "EndAddress".into(),
            })?;

        let mut waypoint_idx = [None; MAX_WAYPOINTS];
        for (i, slot) in waypoint_idx.iter_mut().enumerate() {
            *slot = column_index(&headers, &format!("Waypoint{}", i + 1));
        }

        Ok(Self {
            reader,
            record: csv::StringRecord::new(),
            start_idx,
            end_idx,
            waypoint_idx,
            index: 0,
        })
    }

    fn build_request(&self) -> Result<ItineraryRequest, BatchError> {
        let field = |idx: usize| self.record.get(idx).unwrap_or("");

        let waypoints = self
            .waypoint_idx
            .iter()
            .map(|idx| idx.map(field).unwrap_or(""));

        let bad_record = |message: String| BatchError::BadRecord {
            index: self.index,
            message,
        };

        let slots =
            WaypointSlots::from_ordered_addresses(waypoints).map_err(|e| bad_record(e.to_string()))?;

        ItineraryRequest::new(field(self.start_idx), field(self.end_idx), slots)
            .map_err(|e| bad_record(e.to_string()))
    }
}

impl ItinerarySource for CsvItinerarySource {
    fn next_itinerary(&mut self) -> Option<Result<ItineraryRequest, BatchError>> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                let item = self.build_request();
                self.index += 1;
                Some(item)
            }
            Err(e) => {
                self.index += 1;
                Some(Err(e.into()))
            }
        }
    }
}

/// Writes results as fixed-width CSV rows.
///
/// The output file is truncated on creation: a batch run always replaces
/// the previous run's results.
pub struct CsvResultSink {
    writer: csv::Writer<File>,
}

impl CsvResultSink {
    /// Create (or replace) the output file and write the header row.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, BatchError> {
        let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;

        writer.write_record([
            "StartAddress",
            "Waypoint1",
            "Waypoint2",
            "Waypoint3",
            "Waypoint4",
            "Waypoint5",
            "Waypoint6",
            "EndAddress",
            "Distance1",
            "Distance2",
            "Distance3",
            "Distance4",
            "Distance5",
            "Distance6",
            "Distance7",
            "TotalDistance",
        ])?;

        Ok(Self { writer })
    }
}

impl ResultSink for CsvResultSink {
    fn write_result(&mut self, result: &RouteResult) -> Result<(), BatchError> {
        let legs = result.legs();
        let mut row: Vec<String> = Vec::with_capacity(2 * LEG_COLUMNS + 2);

        // Leg start addresses fill StartAddress + Waypoint1..6, padded.
        for leg in legs {
            row.push(leg.start_address().as_str().to_string());
        }
        while row.len() < LEG_COLUMNS {
            row.push(String::new());
        }

        // The journey's end is the last leg's end address. `RouteResult`
        // guarantees at least one leg.
        row.push(legs[legs.len() - 1].end_address().as_str().to_string());

        let distances_at = row.len();
        for leg in legs {
            row.push(leg.distance_meters().to_string());
        }
        while row.len() < distances_at + LEG_COLUMNS {
            row.push(String::new());
        }

        row.push(result.total_distance_meters().to_string());

        self.writer.write_record(&row)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), BatchError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Leg;

    fn leg(from: &str, to: &str, meters: u64) -> Leg {
        Leg::new(from.into(), to.into(), meters)
    }

    #[test]
    fn reads_rows_with_sparse_waypoints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("itineraries.csv");
        std::fs::write(
            &path,
            "StartAddress,Waypoint1,Waypoint2,Waypoint3,Waypoint4,Waypoint5,Waypoint6,EndAddress\n\
             Summer Hill NSW,Bathurst NSW,Queanbeyan NSW,,,,,\"Brisbane, QLD\"\n\
             Sunshine Coast QLD,,,,,,,Cairns QLD\n",
        )
        .unwrap();

        let mut source = CsvItinerarySource::open(&path).unwrap();

        let first = source.next_itinerary().unwrap().unwrap();
        assert_eq!(first.start().as_str(), "Summer Hill NSW");
        assert_eq!(first.end().as_str(), "Brisbane, QLD");
        assert_eq!(first.waypoints().count(), 2);

        let second = source.next_itinerary().unwrap().unwrap();
        assert_eq!(second.start().as_str(), "Sunshine Coast QLD");
        assert!(second.waypoints().is_empty());

        assert!(source.next_itinerary().is_none());
    }

    #[test]
    fn blank_start_address_is_a_bad_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("itineraries.csv");
        std::fs::write(
            &path,
            "StartAddress,Waypoint1,Waypoint2,Waypoint3,Waypoint4,Waypoint5,Waypoint6,EndAddress\n\
             ,,,,,,,Cairns QLD\n",
        )
        .unwrap();

        let mut source = CsvItinerarySource::open(&path).unwrap();

        match source.next_itinerary().unwrap() {
            Err(BatchError::BadRecord { index: 0, message }) => {
                assert!(message.contains("start_address"));
            }
            other => panic!("expected BadRecord, got {other:?}"),
        }
    }

    #[test]
    fn missing_required_column_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("itineraries.csv");
        std::fs::write(&path, "Origin,EndAddress\nA,B\n").unwrap();

        match CsvItinerarySource::open(&path) {
            Err(BatchError::MissingColumn { column }) => assert_eq!(column, "StartAddress"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn sink_pads_to_fixed_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        let result = RouteResult::from_legs(vec![
            leg("A", "W1", 100),
            leg("W1", "W2", 250),
            leg("W2", "B", 75),
        ])
        .unwrap();

        let mut sink = CsvResultSink::create(&path).unwrap();
        sink.write_result(&result).unwrap();
        sink.finish().unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&path)
            .unwrap();
        let row = reader.records().next().unwrap().unwrap();

        assert_eq!(row.len(), 16);
        // Addresses: 3 leg starts, 4 blanks, then the journey end.
        assert_eq!(&row[0], "A");
        assert_eq!(&row[1], "W1");
        assert_eq!(&row[2], "W2");
        assert_eq!(&row[3], "");
        assert_eq!(&row[6], "");
        assert_eq!(&row[7], "B");
        // Distances: 3 values, 4 blanks, then the total.
        assert_eq!(&row[8], "100");
        assert_eq!(&row[9], "250");
        assert_eq!(&row[10], "75");
        assert_eq!(&row[11], "");
        assert_eq!(&row[14], "");
        assert_eq!(&row[15], "425");
    }

    #[test]
    fn sink_truncates_previous_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(&path, "stale data from a previous run\n").unwrap();

        let result = RouteResult::from_legs(vec![leg("A", "B", 500)]).unwrap();

        let mut sink = CsvResultSink::create(&path).unwrap();
        sink.write_result(&result).unwrap();
        sink.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale data"));
        assert!(contents.starts_with("StartAddress,"));
    }
}
