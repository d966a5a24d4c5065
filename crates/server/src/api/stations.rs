use crate::{dto::StationDto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::{collections::HashMap, sync::Arc};

/// Annotated stations, busiest first when `sort=traffic`.
pub async fn stations(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let layer = state.markers.read().await;
    let mut result: Vec<_> = layer
        .stations()
        .iter()
        .map(|station| StationDto::from(station, &layer))
        .collect();

    match params.get("sort").map(String::as_str) {
        None => (),
        Some("traffic") => result.sort_by(|a, b| b.total_traffic.cmp(&a.total_traffic)),
        Some(_) => return Err(StatusCode::BAD_REQUEST),
    }
    Ok(Json(result).into_response())
}
