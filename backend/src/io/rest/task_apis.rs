//! # REST API for Tasks
//!
//! Assigning, completing and rating tasks. Each successful call has already
//! rewritten the tasks file; a failed rewrite comes back as `warning`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use log::info;
use shared::{AddTaskRequest, ApproveTaskRequest};

use super::mappers::TaskMapper;
use super::{to_mutation_response, ApiError, AppState, JsonBody};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_task))
        .route("/:id/complete", post(complete_task))
        .route("/:id/approve", post(approve_task))
}

/// Assign a new task to a child (parent or teacher)
pub async fn add_task(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddTaskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/tasks - request: {:?}", request);

    let command = TaskMapper::to_add_command(request);
    let persisted = state.backend().add_task(command)?;
    Ok((
        StatusCode::CREATED,
        Json(to_mutation_response(persisted, TaskMapper::to_dto)),
    ))
}

/// Mark the logged-in child's task as done
pub async fn complete_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/tasks/{}/complete", task_id);

    let command = TaskMapper::to_complete_command(task_id);
    let persisted = state.backend().complete_task(command)?;
    Ok(Json(to_mutation_response(persisted, TaskMapper::to_dto)))
}

/// Rate a completed task (parent or teacher)
pub async fn approve_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    JsonBody(request): JsonBody<ApproveTaskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/tasks/{}/approve - request: {:?}", task_id, request);

    let command = TaskMapper::to_approve_command(task_id, request);
    let persisted = state.backend().approve_task(command)?;
    Ok(Json(to_mutation_response(persisted, TaskMapper::to_dto)))
}
