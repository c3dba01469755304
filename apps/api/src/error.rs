//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Taxonomy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  InvalidRequest ─► 400 {"error": "<explanatory message>"}        │
//! │  NotFound       ─► 404 {"error": "<what was missing>"}           │
//! │  Internal       ─► 500 {"error": "Error interno del servidor"}   │
//! │                                                                  │
//! │  Store failures are logged server-side with their cause and      │
//! │  surfaced as Internal; nothing from the driver leaks out.        │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Client-facing messages are Spanish, matching the API's established
//! contract with its frontend.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use inventario_db::DbError;

/// Error returned from HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required fields missing or invalid (400).
    #[error("{0}")]
    InvalidRequest(String),

    /// The targeted resource does not exist (404).
    ///
    /// Only supplier deletion produces this; every other zero-rows write
    /// is silent success.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected persistence failure (500). The cause was already logged.
    #[error("internal error")]
    Internal,
}

impl ApiError {
    /// Creates an InvalidRequest error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::InvalidRequest(message.into())
    }

    /// Creates a NotFound error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }
}

/// Store failures: log the real cause, hand the client a generic message.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        tracing::error!(error = %err, "database operation failed");
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error interno del servidor".to_string(),
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
