//! HTTP routes, one file per domain area, each exposing a `router()` that
//! `build_app` merges into the full application.

use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

pub mod dashboard;
pub mod products;
pub mod purchase_orders;
pub mod sales;
pub mod suppliers;

use axum::Router;

/// Builds the combined API router.
pub fn router() -> Router {
    Router::new()
        .merge(products::router())
        .merge(sales::router())
        .merge(dashboard::router())
        .merge(suppliers::router())
        .merge(purchase_orders::router())
}

/// Liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
