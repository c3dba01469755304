//! # Database Error Types
//!
//! ## Error Flow
//! ```text
//! sqlx::Error ─► DbError (this module) ─► ApiError (apps/api) ─► client
//! ```
//! DbError adds categorization; the HTTP layer decides what leaks out
//! (nothing, for store failures).

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database file could not be opened or the pool could not be built.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Embedded migration failed to apply.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// A foreign key constraint was violated.
    ///
    /// Only `sale_items.sale_id` carries a real FK, and that id always
    /// comes from an insert in the same transaction, so seeing this means
    /// a programming error rather than bad input.
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// All pool connections are in use.
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Anything else from the driver.
    #[error("internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// SQLite reports constraint violations as database errors with
/// well-known message prefixes; we sniff the message the same way the
/// driver's own tests do.
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message().to_string();
                if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation(msg)
                } else {
                    DbError::QueryFailed(msg)
                }
            }
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
