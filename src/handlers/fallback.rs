use crate::core::error::ApiError;
use axum::response::{IntoResponse, Response};

/// Catch-all for unmatched paths
pub async fn fallback_handler() -> Response {
    ApiError::RouteNotFound.into_response()
}
