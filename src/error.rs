//! Application error type and its HTTP representation.
//!
//! Every service and repository returns [`AppError`]. Handlers propagate it with
//! `?` and axum renders it through [`IntoResponse`] as:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short link not found", "details": {} } }
//! ```
//!
//! Server-side failures are logged with their cause and rendered with a generic
//! message so database internals never reach the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;
use thiserror::Error;

use crate::utils::db_error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Client-facing error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Column whose uniqueness constraint rejected an insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictTarget {
    OriginalUrl,
    ShortCode,
    Other(Option<String>),
}

impl fmt::Display for ConflictTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictTarget::OriginalUrl => f.write_str("original_url"),
            ConflictTarget::ShortCode => f.write_str("short_code"),
            ConflictTarget::Other(Some(constraint)) => f.write_str(constraint),
            ConflictTarget::Other(None) => f.write_str("unknown constraint"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or missing input. Raised before any store access.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// A uniqueness constraint rejected an insert.
    ///
    /// Services resolve this into a benign result or a [`AppError::Collision`];
    /// if it escapes to the HTTP layer it is reported as an internal error.
    #[error("unique constraint violation on {target}")]
    Conflict { target: ConflictTarget },

    /// Two distinct URLs derived the same short code.
    #[error("short code collision on {short_code}")]
    Collision { short_code: String },

    /// The connection pool could not hand out a connection.
    #[error("store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    #[error("{message}")]
    Internal { message: String },
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

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Conflict { .. } | AppError::Collision { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Builds the client-facing payload for this error.
    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                code: "validation_error",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::NotFound { message, details } => ErrorInfo {
                code: "not_found",
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Collision { short_code } => ErrorInfo {
                code: "short_code_collision",
                message: "Short code collision".to_string(),
                details: json!({ "short_code": short_code }),
            },
            AppError::StoreUnavailable { .. } => ErrorInfo {
                code: "store_unavailable",
                message: "Database connection failed".to_string(),
                details: json!({}),
            },
            AppError::Conflict { .. } | AppError::Internal { .. } => ErrorInfo {
                code: "internal_error",
                message: "Internal server error".to_string(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(target) = db_error::unique_violation_target(&e) {
            return AppError::Conflict { target };
        }

        if db_error::is_store_unavailable(&e) {
            return AppError::StoreUnavailable {
                reason: e.to_string(),
            };
        }

        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message, json!(errors))
    }
}
