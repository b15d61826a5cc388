//! # REST API for the Session
//!
//! Login is self-declared: whoever posts a username and role is that user
//! until the next login or logout.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use log::info;
use shared::LoginRequest;

use super::mappers::SessionMapper;
use super::{ApiError, AppState, JsonBody};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(login).delete(logout).get(get_header))
}

pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/session - request: {:?}", request);

    let command = SessionMapper::to_login_command(request);
    let user = state.backend().login(command)?;
    Ok((StatusCode::OK, Json(SessionMapper::to_session_info(&user))))
}

pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /api/session");
    state.backend().logout();
    StatusCode::NO_CONTENT
}

/// Who is logged in, and for a child their points, level and progress
pub async fn get_header(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/session");
    let summary = state.backend().header();
    Json(SessionMapper::to_header(summary))
}
