use crate::source::{self, TripLogConfig};
use csv::{ReaderBuilder, StringRecord};
use std::{
    collections::{HashMap, HashSet},
    io::Read,
    sync::Arc,
    time::Instant,
};
use tracing::debug;

/// The two columns of a trip log row that matter for traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRecord {
    pub start_station_id: Arc<str>,
    pub end_station_id: Arc<str>,
}

impl TripRecord {
    pub fn new(start_station_id: impl Into<Arc<str>>, end_station_id: impl Into<Arc<str>>) -> Self {
        Self {
            start_station_id: start_station_id.into(),
            end_station_id: end_station_id.into(),
        }
    }

    /// `None` when either station id is absent or blank.
    fn from_record(record: &StringRecord, start_idx: usize, end_idx: usize) -> Option<Self> {
        let start = record.get(start_idx).map(str::trim).filter(|id| !id.is_empty())?;
        let end = record.get(end_idx).map(str::trim).filter(|id| !id.is_empty())?;
        Some(Self::new(start, end))
    }
}

/// Departures and arrivals per station id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrafficTable {
    departures: HashMap<Arc<str>, u64>,
    arrivals: HashMap<Arc<str>, u64>,
    skipped_rows: usize,
}

impl FromIterator<TripRecord> for TrafficTable {
    fn from_iter<T: IntoIterator<Item = TripRecord>>(iter: T) -> Self {
        let mut table = Self::new();
        iter.into_iter().for_each(|trip| table.record(trip));
        table
    }
}

impl TrafficTable {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn record(&mut self, trip: TripRecord) {
        *self.departures.entry(trip.start_station_id).or_insert(0) += 1;
        *self.arrivals.entry(trip.end_station_id).or_insert(0) += 1;
    }

    pub fn skip_row(&mut self) {
        self.skipped_rows += 1;
    }

    pub fn departures(&self, id: &str) -> u64 {
        self.departures.get(id).copied().unwrap_or(0)
    }

    pub fn arrivals(&self, id: &str) -> u64 {
        self.arrivals.get(id).copied().unwrap_or(0)
    }

    pub fn departure_counts(&self) -> &HashMap<Arc<str>, u64> {
        &self.departures
    }

    pub fn arrival_counts(&self) -> &HashMap<Arc<str>, u64> {
        &self.arrivals
    }

    /// Rows left out of both tables because a station id was unusable.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn trip_count(&self) -> u64 {
        self.departures.values().sum()
    }

    /// Every station id seen on either end of a trip.
    pub fn station_ids(&self) -> HashSet<&str> {
        self.departures
            .keys()
            .chain(self.arrivals.keys())
            .map(|id| id.as_ref())
            .collect()
    }

    pub fn merge(mut self, other: Self) -> Self {
        for (id, count) in other.departures {
            *self.departures.entry(id).or_insert(0) += count;
        }
        for (id, count) in other.arrivals {
            *self.arrivals.entry(id).or_insert(0) += count;
        }
        self.skipped_rows += other.skipped_rows;
        self
    }
}

/// Reads a headered trip log and counts departures by start station and
/// arrivals by end station. Rows without usable ids are skipped; only
/// read failures of the underlying source are errors.
pub fn aggregate_trips<R: Read>(
    reader: R,
    config: &TripLogConfig,
) -> Result<TrafficTable, source::Error> {
    debug!("Aggregating trips...");
    let now = Instant::now();
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let start_idx = column_index(&headers, &config.start_station_column)?;
    let end_idx = column_index(&headers, &config.end_station_column)?;

    let mut table = TrafficTable::new();
    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                debug!("Skipping unreadable trip row: {err}");
                table.skip_row();
                continue;
            }
        };
        match TripRecord::from_record(&record, start_idx, end_idx) {
            Some(trip) => table.record(trip),
            None => table.skip_row(),
        }
    }

    debug!(
        "Aggregating {} trips took {:?} ({} rows skipped)",
        table.trip_count(),
        now.elapsed(),
        table.skipped_rows()
    );
    Ok(table)
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, source::Error> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or_else(|| source::Error::MissingColumn(name.to_string()))
}

#[test]
fn merge_test() {
    let a: TrafficTable = [TripRecord::new("A", "B")].into_iter().collect();
    let b: TrafficTable = [TripRecord::new("A", "A")].into_iter().collect();
    let merged = a.merge(b);
    assert_eq!(merged.departures("A"), 2);
    assert_eq!(merged.arrivals("A"), 1);
    assert_eq!(merged.arrivals("B"), 1);
    assert_eq!(merged.trip_count(), 2);
}

#[test]
fn column_index_test() {
    let headers = StringRecord::from(vec!["ride_id", " start_station_id ", "end_station_id"]);
    assert_eq!(column_index(&headers, "start_station_id").unwrap(), 1);
    assert!(matches!(
        column_index(&headers, "bike_type"),
        Err(source::Error::MissingColumn(_))
    ));
}
