use crate::core::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// Application metadata handler
///
/// GET /api/info
pub async fn info_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(InfoResponse {
            name: state.config.app.name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: state.config.app.description.clone(),
        }),
    )
}
