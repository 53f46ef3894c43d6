//! Map view configuration.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MapConfig {
    pub maptiler_key: Option<String>,
}

/// `GET /api/map/config`: the tile key, or `null` when none is configured.
pub async fn config(State(state): State<AppState>) -> Json<MapConfig> {
    Json(MapConfig { maptiler_key: state.config.maptiler_key.clone() })
}

#[cfg(test)]
#[path = "map_test.rs"]
mod tests;
