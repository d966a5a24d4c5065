use crate::{dto::LayerDto, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub async fn layers(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let result: Vec<_> = state.layers.iter().map(LayerDto::from).collect();
    Ok(Json(result).into_response())
}

/// The layer's GeoJSON exactly as it was loaded.
pub async fn layer(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let layer = state
        .layers
        .iter()
        .find(|layer| layer.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(&layer.data).into_response())
}
