//! # REST API for Saving
//!
//! Mutations already save the file they touch. This rewrites both files on
//! demand.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Router};
use log::info;

use super::{ApiError, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(save_all))
}

pub async fn save_all(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/save");
    state.backend().save()?;
    Ok(StatusCode::NO_CONTENT)
}
