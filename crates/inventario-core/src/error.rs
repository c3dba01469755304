//! # Error Types
//!
//! Validation errors raised before any SQL runs.
//!
//! ## Error Hierarchy
//! ```text
//! ValidationError (this crate)  - input rejected before touching the store
//! DbError         (inventario-db) - persistence failures
//! ApiError        (apps/api)    - what the HTTP client sees
//!
//! Flow: ValidationError ─► ApiError (400)
//!       DbError         ─► ApiError (500, cause logged, never leaked)
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// Field names are the wire names the client sent (`nombre`, `detalles`,
/// `productoId`, ...), so the message points at what to fix in the request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A collection that must contain at least one element is empty.
    #[error("{field} must not be empty")]
    EmptyCollection { field: &'static str },

    /// A numeric field that must be non-zero is zero.
    #[error("{field} must be non-zero")]
    MustBeNonZero { field: &'static str },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
