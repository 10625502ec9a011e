use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::user::User;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for user listing
#[derive(Debug, Deserialize)]
pub struct UsersQuery {
    /// Filter to active users when the literal string "true" (any case)
    #[serde(default)]
    pub active: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub count: usize,
}

/// User listing handler
///
/// GET /api/users?active=true|false
pub async fn list_users_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UsersQuery>,
) -> impl IntoResponse {
    let active_only = params.active.eq_ignore_ascii_case("true");

    let users: Vec<User> = state
        .user_store
        .list(active_only)
        .into_iter()
        .cloned()
        .collect();

    let count = users.len();

    (StatusCode::OK, Json(UsersResponse { users, count }))
}

/// Single user lookup handler
///
/// GET /api/users/{id}
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    // A non-numeric segment behaves like an unmatched route
    let id: u32 = id.parse().map_err(|_| ApiError::RouteNotFound)?;

    let user = state
        .user_store
        .get(id)
        .cloned()
        .ok_or(ApiError::UserNotFound)?;

    Ok((StatusCode::OK, Json(user)).into_response())
}
