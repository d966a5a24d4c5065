use crate::config::Config;
use bikeflow::prelude::*;
use futures_util::StreamExt;
use std::{fmt::Display, time::Instant};
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Data unavailable from {url}: {reason}")]
    DataUnavailable { url: String, reason: String },
}

fn unavailable(url: &str, reason: impl Display) -> Error {
    Error::DataUnavailable {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, Error> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| unavailable(url, err))?;

    if !response.status().is_success() {
        return Err(unavailable(url, response.status()));
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let data = chunk.map_err(|err| unavailable(url, err))?;
        body.extend_from_slice(&data);
    }
    Ok(body)
}

pub async fn fetch_stations(
    client: &reqwest::Client,
    url: &str,
    config: &DirectoryConfig,
) -> Result<Vec<Station>, Error> {
    let body = fetch_bytes(client, url).await?;
    parse_directory_slice(&body, config).map_err(|err| unavailable(url, err))
}

pub async fn fetch_trips(
    client: &reqwest::Client,
    url: &str,
    config: &TripLogConfig,
) -> Result<TrafficTable, Error> {
    let body = fetch_bytes(client, url).await?;
    aggregate_trips(body.as_slice(), config).map_err(|err| unavailable(url, err))
}

/// Fetches the directory and the trip log at the same time and joins them.
/// A failed source is logged and treated as empty, so the result is at worst
/// an empty or zero-traffic station list.
pub async fn load_stations(client: &reqwest::Client, config: &Config) -> Vec<StationTraffic> {
    let now = Instant::now();
    let directory_config = DirectoryConfig::default();
    let trip_config = TripLogConfig::default();
    let (stations, trips) = tokio::join!(
        fetch_stations(client, &config.stations_url, &directory_config),
        fetch_trips(client, &config.trips_url, &trip_config),
    );

    let stations = stations.unwrap_or_else(|err| {
        error!("Error loading stations: {err}");
        Vec::new()
    });
    let trips = trips.unwrap_or_else(|err| {
        error!("Error loading trips: {err}");
        TrafficTable::default()
    });

    if trips.skipped_rows() > 0 {
        warn!("Skipped {} malformed trip rows", trips.skipped_rows());
    }
    let orphans = orphan_ids(&stations, &trips);
    if !orphans.is_empty() {
        debug!(
            "{} station ids in the trip log are not in the directory",
            orphans.len()
        );
    }

    let stations = annotate(&stations, &trips);
    info!(
        "Loaded {} stations and {} trips in {:?}",
        stations.len(),
        trips.trip_count(),
        now.elapsed()
    );
    stations
}
