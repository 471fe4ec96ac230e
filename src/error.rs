//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service and repository layers returns
//! [`AppError`]. Handlers return it directly and axum renders it through the
//! [`IntoResponse`] implementation below.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

/// JSON error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input rejected (400).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Unknown short code (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Store precondition violated, e.g. duplicate code on insert (409).
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Storage or other internal failure (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            // Redirect misses answer in plain text.
            AppError::NotFound { message, .. } => (status, message).into_response(),
            AppError::Internal { message, details } => {
                tracing::error!(%details, "{}", message);
                (status, Json(ErrorBody { error: message })).into_response()
            }
            AppError::Validation { message, .. } | AppError::Conflict { message, .. } => {
                (status, Json(ErrorBody { error: message })).into_response()
            }
        }
    }
}
