//! # REST API for a Child's Tables
//!
//! Read-only views of one child's tasks, wishes and score. Any logged-in
//! role may look at any child.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::info;

use super::mappers::{SessionMapper, TaskMapper, WishMapper};
use super::{ApiError, AppState};
use crate::domain::{authorize, Action};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:username/tasks", get(get_tasks))
        .route("/:username/wishes", get(get_wishes))
        .route("/:username/score", get(get_score))
}

pub async fn get_tasks(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/children/{}/tasks", username);
    let backend = state.backend();
    authorize(backend.session(), Action::ViewTasks)?;
    Ok(Json(TaskMapper::to_dto_list(backend.tasks_of(&username))))
}

pub async fn get_wishes(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/children/{}/wishes", username);
    let backend = state.backend();
    authorize(backend.session(), Action::ViewWishes)?;
    Ok(Json(WishMapper::to_dto_list(backend.wishes_of(&username))))
}

pub async fn get_score(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /api/children/{}/score", username);
    let backend = state.backend();
    authorize(backend.session(), Action::ViewTasks)?;
    Ok(Json(SessionMapper::to_score_dto(&username, backend.score_of(&username))))
}
