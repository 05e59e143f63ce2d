use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use taskd_core::TaskError;
use thiserror::Error;

/// Error payload returned to clients: a short human-readable message, no
/// structured error codes.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// HTTP-facing error taxonomy.
///
/// Every failure a handler can produce collapses into one of three buckets:
/// `BadRequest` (400) for unusable input, `NotFound` (404) for a missing
/// row, and `Internal` (500) for store failures and timeouts. All errors are
/// terminal for the request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed JSON body or unusable request parameter
    #[error("{0}")]
    BadRequest(String),

    /// No task exists for the requested id
    #[error("{0}")]
    NotFound(String),

    /// Store failure or exceeded deadline
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(id: i64) -> Self {
        Self::NotFound(format!("Task with ID {id} not found"))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(message) => Self::NotFound(message),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
