//! Error types for the gox backend.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use uuid::Uuid;

/// Every failure a request can run into.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid user id {value:?}: {reason}")]
    InvalidId { value: String, reason: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("No route for {0}")]
    RouteNotFound(String),

    #[error("User already exists: {0}")]
    DuplicateUser(Uuid),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP status and machine-readable kind for this error.
    pub fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            Error::InvalidId { .. } => (StatusCode::BAD_REQUEST, "invalid_id"),
            Error::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            Error::UserNotFound(_) => (StatusCode::NOT_FOUND, "user_not_found"),
            Error::RouteNotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Error::DuplicateUser(_) => (StatusCode::CONFLICT, "duplicate_user"),
            Error::Serialization(_) => (StatusCode::INTERNAL_SERVER_ERROR, "serialization_error"),
            Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string()
            }
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
