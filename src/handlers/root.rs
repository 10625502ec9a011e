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
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub app: String,
}

/// Greeting handler
///
/// GET /
pub async fn root_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: "Hello World!".to_string(),
            status: "success".to_string(),
            app: state.config.app.name.clone(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::tests::create_test_state;
    use axum::body::Body;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_root_handler() {
        let response = root_handler(State(create_test_state())).await.into_response();

        let (parts, body) = response.into_parts();
        assert_eq!(parts.status, StatusCode::OK);

        let body = Body::new(body);
        let bytes = body.collect().await.unwrap().to_bytes();
        let payload: RootResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(payload.message, "Hello World!");
        assert_eq!(payload.status, "success");
        assert_eq!(payload.app, "demo-app");
    }
}
