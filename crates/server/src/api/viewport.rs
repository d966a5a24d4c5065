use crate::{
    dto::{MarkersDto, ViewportDto},
    state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bikeflow::prelude::*;
use std::sync::Arc;
use tracing::debug;

pub async fn viewport(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let viewport = state.viewport.read().await;
    Ok(Json(ViewportDto::from(&viewport)).into_response())
}

/// Applies a viewport event and answers with the markers for the new
/// context. The shared marker layer is updated by the reprojection task.
pub async fn apply(
    State(state): State<Arc<AppState>>,
    Json(event): Json<ViewportEvent>,
) -> Result<Response, StatusCode> {
    let context = state.viewport.write().await.apply(event);
    debug!("Applied {} event, revision {}", event.kind(), context.revision);
    let markers = state.markers.read().await.markers(&context);
    let result = MarkersDto {
        revision: Some(context.revision),
        markers,
    };
    Ok(Json(result).into_response())
}
