use bikeflow::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationDto {
    pub id: String,
    pub name: String,
    pub coordinate: Coordinate,
    pub arrivals: u64,
    pub departures: u64,
    pub total_traffic: u64,
    pub radius: f64,
}

impl StationDto {
    pub fn from(station: &StationTraffic, layer: &MarkerLayer) -> Self {
        Self {
            id: station.id().to_string(),
            name: station.name().to_string(),
            coordinate: *station.coordinate(),
            arrivals: station.arrivals(),
            departures: station.departures(),
            total_traffic: station.total_traffic(),
            radius: layer.radius(station),
        }
    }
}
