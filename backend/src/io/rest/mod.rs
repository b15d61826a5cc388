//! # REST API Interface Layer
//!
//! HTTP endpoints over [`Backend`](crate::Backend). Every handler takes the
//! single backend lock, runs one synchronous operation and releases it, so
//! requests are applied one at a time in arrival order.
//!
//! ## Routes
//!
//! - `POST|DELETE|GET /api/session`: login, logout, header
//! - `GET /api/children/:username/{tasks,wishes,score}`
//! - `POST /api/tasks`, `POST /api/tasks/:id/{complete,approve}`
//! - `POST /api/wishes`, `POST /api/wishes/:id/approve`
//! - `POST /api/save`
//!
//! ## Errors
//!
//! Domain errors become a JSON [`ErrorResponse`] with a status per kind:
//! 401 not logged in, 403 wrong role or owner, 400 bad input, 404 unknown
//! id, 409 state conflicts, 500 for a failed explicit save. A body that does
//! not parse (say a number sent as text) is bad input as well.

pub mod child_apis;
pub mod mappers;
pub mod save_apis;
pub mod session_apis;
pub mod task_apis;
pub mod wish_apis;

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    Router,
};
use log::warn;
use shared::{ErrorResponse, MutationResponse};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tower_http::cors::{Any, CorsLayer};

use crate::domain::DomainError;
use crate::{Backend, Persisted};

/// Shared handler state: the one backend behind one lock
#[derive(Clone)]
pub struct AppState {
    backend: Arc<Mutex<Backend>>,
}

impl AppState {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend: Arc::new(Mutex::new(backend)),
        }
    }

    /// Lock the backend. A panic in an earlier handler does not make the data
    /// unusable, so a poisoned lock is taken over.
    pub fn backend(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origin: &str) -> Result<Router> {
    let origin = allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid allowed origin '{}'", allowed_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    Ok(api_router().layer(cors).with_state(app_state))
}

fn api_router() -> Router<AppState> {
    let api_routes = Router::new()
        .nest("/session", session_apis::router())
        .nest("/children", child_apis::router())
        .nest("/tasks", task_apis::router())
        .nest("/wishes", wish_apis::router())
        .nest("/save", save_apis::router());

    Router::new().nest("/api", api_routes)
}

/// Wrap a mutation result, turning a persistence warning into its message
pub fn to_mutation_response<D, T>(persisted: Persisted<D>, to_dto: impl FnOnce(&D) -> T) -> MutationResponse<T> {
    if let Some(warning) = &persisted.warning {
        warn!("{}", warning);
    }
    MutationResponse {
        data: to_dto(&persisted.value),
        warning: persisted.warning.map(|w| w.to_string()),
    }
}

/// A domain error on its way out as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(DomainError::invalid("request body", rejection.body_text()))
    }
}

/// `Json` whose rejection is reported like any other invalid input
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DomainError::NotLoggedIn => StatusCode::UNAUTHORIZED,
            DomainError::RoleForbidden(_) | DomainError::NotOwner(_) => StatusCode::FORBIDDEN,
            DomainError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::NotCompleted(_)
            | DomainError::AlreadyRated(_)
            | DomainError::AlreadyPurchased(_)
            | DomainError::DuplicateId(_) => StatusCode::CONFLICT,
            DomainError::PersistenceWarning(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("Request rejected ({}): {}", status, self.0);
        let body = ErrorResponse {
            kind: self.0.kind().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::storage::FlatFileConnection;
    use axum::body::Body;
    use axum::http::Request;
    use serde::de::DeserializeOwned;
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::util::ServiceExt; // for `oneshot`

    /// Router over a backend in a fresh temporary directory
    pub struct TestApp {
        pub router: Router,
        pub temp_dir: TempDir,
    }

    impl TestApp {
        pub fn new() -> Self {
            let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
            let backend = Backend::open(FlatFileConnection::new(temp_dir.path()))
                .expect("Failed to open backend");
            let router = create_router(AppState::new(backend), "http://localhost:8080")
                .expect("Failed to build router");
            Self { router, temp_dir }
        }

        pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
            let mut builder = Request::builder().method(method).uri(uri);
            let body = match body {
                Some(json) => {
                    builder = builder.header("content-type", "application/json");
                    Body::from(json.to_string())
                }
                None => Body::empty(),
            };

            let response = self
                .router
                .clone()
                .oneshot(builder.body(body).unwrap())
                .await
                .unwrap();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
            (status, bytes.to_vec())
        }

        pub async fn send_json<T: DeserializeOwned>(
            &self,
            method: Method,
            uri: &str,
            body: Option<Value>,
        ) -> (StatusCode, T) {
            let (status, bytes) = self.send(method, uri, body).await;
            let parsed = serde_json::from_slice(&bytes)
                .unwrap_or_else(|e| panic!("Unexpected body {:?}: {}", String::from_utf8_lossy(&bytes), e));
            (status, parsed)
        }

        pub async fn login(&self, username: &str, role: &str) {
            let (status, _) = self
                .send(
                    Method::POST,
                    "/api/session",
                    Some(serde_json::json!({ "username": username, "role": role })),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
        }
    }
}
