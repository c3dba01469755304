//! # inventario-api: REST API Server
//!
//! HTTP surface of the inventory/sales backend.
//!
//! ## Request Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Request ─► route handler ─► validation ─► repository ─► JSON    │
//! │                                                                  │
//! │  routes/products.rs        catalog CRUD + inventory alias        │
//! │  routes/sales.rs           sale registration + read models       │
//! │  routes/dashboard.rs       subcategory/month aggregate           │
//! │  routes/suppliers.rs       supplier CRUD (delete 404s)           │
//! │  routes/purchase_orders.rs purchase order record + detail        │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers are stateless; the only shared state is the [`Database`]
//! handle injected as an `Extension`.

use axum::routing::get;
use axum::{Extension, Router};

use inventario_db::Database;

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

/// Builds the full application router around an open database handle.
///
/// Extracted from `main` so black-box tests can drive the router directly
/// (no port binding) against an in-memory database.
pub fn build_app(db: Database) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .merge(routes::router())
        .layer(Extension(db))
}
