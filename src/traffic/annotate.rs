use crate::{
    shared::{Coordinate, Identifiable},
    source::{Station, TrafficTable},
};
use rayon::prelude::*;
use std::sync::Arc;

/// A station together with the trips that started or ended there.
#[derive(Debug, Clone, PartialEq)]
pub struct StationTraffic {
    station: Station,
    arrivals: u64,
    departures: u64,
}

impl Identifiable for StationTraffic {
    fn id(&self) -> &str {
        &self.station.id
    }

    fn name(&self) -> &str {
        &self.station.name
    }
}

impl StationTraffic {
    pub fn new(station: Station, arrivals: u64, departures: u64) -> Self {
        Self {
            station,
            arrivals,
            departures,
        }
    }

    pub fn station(&self) -> &Station {
        &self.station
    }

    pub fn station_id(&self) -> &Arc<str> {
        &self.station.id
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.station.coordinate
    }

    pub fn arrivals(&self) -> u64 {
        self.arrivals
    }

    pub fn departures(&self) -> u64 {
        self.departures
    }

    pub fn total_traffic(&self) -> u64 {
        self.arrivals + self.departures
    }
}

/// Left join of the directory against the trip counts. Stations missing
/// from the trip log get zero traffic, the output keeps directory order.
pub fn annotate(stations: &[Station], table: &TrafficTable) -> Vec<StationTraffic> {
    stations
        .par_iter()
        .map(|station| {
            StationTraffic::new(
                station.clone(),
                table.arrivals(&station.id),
                table.departures(&station.id),
            )
        })
        .collect()
}

/// Ids that trips reference but the directory does not know, sorted.
/// Their trips count toward no station.
pub fn orphan_ids<'a>(stations: &[Station], table: &'a TrafficTable) -> Vec<&'a str> {
    let known: std::collections::HashSet<&str> =
        stations.iter().map(|station| station.id.as_ref()).collect();
    let mut orphans: Vec<&str> = table
        .station_ids()
        .into_iter()
        .filter(|id| !known.contains(id))
        .collect();
    orphans.sort_unstable();
    orphans
}
