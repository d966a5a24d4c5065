mod api;
mod config;
mod dto;
mod fetch;
mod state;

use crate::{config::Config, state::AppState};
use axum::routing::get;
use bikeflow::prelude::*;
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let config = Config::from_env();

    info!("Loading data...");
    let now = Instant::now();
    let stations = fetch::load_stations(&reqwest::Client::new(), &config).await;
    let layers = load_layers(&config);
    let (state, receiver) = AppState::new(stations, layers, config.map, config.max_radius);
    let state = Arc::new(state);
    state::spawn_reprojection(state.clone(), receiver);
    info!("Loading data took {:?}", now.elapsed());

    let app = axum::Router::new()
        .route("/stations", get(api::stations))
        .route("/markers", get(api::markers))
        .route("/map.svg", get(api::svg))
        .route("/viewport", get(api::viewport).post(api::apply))
        .route("/layers", get(api::layers))
        .route("/layers/{id}", get(api::layer))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}

/// Bike lane overlays. A layer that fails to load is left out.
fn load_layers(config: &Config) -> Vec<LineLayer> {
    [
        ("bike-lanes", &config.boston_lanes),
        ("bike-lanes-cambridge", &config.cambridge_lanes),
    ]
    .into_iter()
    .filter_map(|(id, path)| match LineLayer::load(id, path) {
        Ok(layer) => Some(layer),
        Err(err) => {
            error!("Error loading layer {id} from {}: {err}", path.display());
            None
        }
    })
    .collect()
}
