//! # REST API for Wishes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use log::info;
use shared::AddWishRequest;

use super::mappers::WishMapper;
use super::{to_mutation_response, ApiError, AppState, JsonBody};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_wish))
        .route("/:id/approve", post(approve_wish))
}

/// Add a wish for the logged-in child
pub async fn add_wish(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddWishRequest>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/wishes - request: {:?}", request);

    let command = WishMapper::to_add_command(request);
    let persisted = state.backend().add_wish(command)?;
    Ok((
        StatusCode::CREATED,
        Json(to_mutation_response(persisted, WishMapper::to_dto)),
    ))
}

/// Approve a wish (parents only)
pub async fn approve_wish(
    State(state): State<AppState>,
    Path(wish_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /api/wishes/{}/approve", wish_id);

    let command = WishMapper::to_approve_command(wish_id);
    let persisted = state.backend().approve_wish(command)?;
    Ok(Json(to_mutation_response(persisted, WishMapper::to_dto)))
}
