//! # Dashboard Routes
//!
//! One endpoint: the subcategory/month sales aggregate. The repository
//! returns the GROUP BY rows; `inventario_core::reporting` does the month
//! labeling, profit math, and rounding.

use axum::extract::Extension;
use axum::routing::get;
use axum::{Json, Router};

use inventario_core::{subcategory_report, SubcategoryReport};
use inventario_db::Database;

use crate::error::ApiError;

pub fn router() -> Router {
    Router::new().route("/api/dashboard-subcategorias", get(subcategories))
}

/// `GET /api/dashboard-subcategorias` - quantity sold, average sale price,
/// and derived profit per (subcategory, month, year), ordered by year then
/// month.
pub async fn subcategories(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<SubcategoryReport>>, ApiError> {
    let rows = db.sales().subcategory_month_rows().await?;
    Ok(Json(subcategory_report(rows)))
}
