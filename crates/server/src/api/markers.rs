use crate::{dto::MarkersDto, state::AppState};
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use bikeflow::prelude::*;
use std::sync::Arc;

/// Marker positions from the latest reprojection pass.
pub async fn markers(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let layer = state.markers.read().await;
    let result = MarkersDto {
        revision: layer.revision(),
        markers: layer.positions().to_vec(),
    };
    Ok(Json(result).into_response())
}

pub async fn svg(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let context = *state.viewport.read().await.context();
    let layer = state.markers.read().await;
    let document = SvgMap {
        context: &context,
        layers: &state.layers,
        markers: &layer,
        style: &state.style,
    }
    .to_string();
    Ok(([(CONTENT_TYPE, "image/svg+xml")], document).into_response())
}
