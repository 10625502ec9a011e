// HTTP routes configuration

use crate::core::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(crate::handlers::root::root_handler))
        .route("/health", get(crate::handlers::health::health_handler))

        // API endpoints
        .route("/api/info", get(crate::handlers::info::info_handler))
        .route("/api/users", get(crate::handlers::users::list_users_handler))
        .route("/api/users/{id}", get(crate::handlers::users::get_user_handler))

        // 404 fallback for all unmatched routes
        .fallback(crate::handlers::fallback::fallback_handler)

        .with_state(state)
}
