//! # Database Migrations
//!
//! Embedded SQL migrations, applied on startup.
//!
//! The `sqlx::migrate!()` macro embeds every file from `migrations/sqlite/`
//! into the binary at compile time; sqlx tracks applied migrations in the
//! `_sqlx_migrations` table, so running them again is a no-op. This is how
//! the store bootstraps itself on first boot against an empty file.
//!
//! ## Adding New Migrations
//! 1. Create `migrations/sqlite/NNN_description.sql` with the next number
//! 2. Write idempotent SQL (`IF NOT EXISTS` where possible)
//! 3. NEVER modify an existing migration - always add a new one

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending database migrations.
///
/// Idempotent and ordered; each migration runs in its own transaction.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("checking for pending migrations");
    MIGRATOR.run(pool).await?;
    info!("all migrations applied");
    Ok(())
}
