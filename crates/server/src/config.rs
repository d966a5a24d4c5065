use bikeflow::{map::MapOptions, traffic::DEFAULT_MAX_RADIUS};
use std::{env, path::PathBuf, str::FromStr};
use tracing::warn;

const STATIONS_URL: &str = "https://dsc106.com/labs/lab07/data/bluebikes-stations.json";
const TRIPS_URL: &str = "https://dsc106.com/labs/lab07/data/bluebikes-traffic-2024-03.csv";
const BOSTON_LANES: &str = "Existing_Bike_Network_2022.geojson";
const CAMBRIDGE_LANES: &str = "RECREATION_BikeFacilities.geojson.txt";
const PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub stations_url: String,
    pub trips_url: String,
    pub boston_lanes: PathBuf,
    pub cambridge_lanes: PathBuf,
    pub max_radius: f64,
    pub port: u16,
    pub map: MapOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stations_url: STATIONS_URL.into(),
            trips_url: TRIPS_URL.into(),
            boston_lanes: BOSTON_LANES.into(),
            cambridge_lanes: CAMBRIDGE_LANES.into(),
            max_radius: DEFAULT_MAX_RADIUS,
            port: PORT,
            map: MapOptions::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unset keys keep their default, unparseable ones are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup("BIKEFLOW_STATIONS_URL") {
            config.stations_url = url;
        }
        if let Some(url) = lookup("BIKEFLOW_TRIPS_URL") {
            config.trips_url = url;
        }
        if let Some(path) = lookup("BIKEFLOW_BOSTON_LANES") {
            config.boston_lanes = path.into();
        }
        if let Some(path) = lookup("BIKEFLOW_CAMBRIDGE_LANES") {
            config.cambridge_lanes = path.into();
        }
        if let Some(radius) = parsed(&lookup, "BIKEFLOW_MAX_RADIUS") {
            config.max_radius = radius;
        }
        if let Some(port) = parsed(&lookup, "BIKEFLOW_PORT") {
            config.port = port;
        }
        config
    }
}

fn parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let value = lookup(key)?;
    match value.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {key}={value}: not a valid value");
            None
        }
    }
}
