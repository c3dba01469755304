//! # Sales Routes
//!
//! | Method | Path                    | Handler    |
//! |--------|-------------------------|------------|
//! | POST   | /api/ventas             | `register` |
//! | GET    | /api/ventas             | `list`     |
//! | GET    | /api/ventas-resumen     | `summary`  |
//! | GET    | /api/ventas-detalle/:id | `detail`   |
//!
//! Registration is the one multi-statement write in the system: header,
//! line items, and stock decrements commit together (see
//! `SaleRepository::register`). Sales have no update or delete.

use axum::extract::{Extension, Path};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use inventario_core::validation;
use inventario_core::{NewSale, NewSaleItem, Sale, SaleCustomer, SaleDetailLine, SaleSummary};
use inventario_db::Database;

use crate::dto::RegisterSaleResponse;
use crate::error::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/api/ventas", get(list).post(register))
        .route("/api/ventas-resumen", get(summary))
        .route("/api/ventas-detalle/:id", get(detail))
}

/// Registration payload. `cliente` and `detalles` are optional at the
/// deserialization layer so their absence can be answered with the
/// API's 400 instead of a generic body rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterSaleRequest {
    #[serde(rename = "cliente")]
    pub customer: Option<SaleCustomer>,

    #[serde(rename = "detalles")]
    pub items: Option<Vec<NewSaleItem>>,

    pub total: Option<f64>,

    #[serde(rename = "fecha")]
    pub sold_at: Option<String>,
}

/// `POST /api/ventas` - registers a sale with line items and stock
/// decrement. Missing customer, missing items, or an empty item list is
/// rejected before anything is written.
pub async fn register(
    Extension(db): Extension<Database>,
    Json(body): Json<RegisterSaleRequest>,
) -> Result<Json<RegisterSaleResponse>, ApiError> {
    let (Some(customer), Some(items)) = (body.customer, body.items) else {
        return Err(ApiError::invalid_request("Datos incompletos"));
    };
    validation::validate_sale_items(&items)
        .map_err(|_| ApiError::invalid_request("Datos incompletos"))?;

    let sale = NewSale {
        customer,
        items,
        total: body.total,
        sold_at: body.sold_at,
    };

    let sale_id = db.sales().register(&sale).await?;
    info!(sale_id, items = sale.items.len(), "venta registrada");

    Ok(Json(RegisterSaleResponse {
        message: "Venta registrada",
        sale_id,
    }))
}

/// `GET /api/ventas` - all sales, newest id first.
pub async fn list(Extension(db): Extension<Database>) -> Result<Json<Vec<Sale>>, ApiError> {
    let sales = db.sales().list().await?;
    Ok(Json(sales))
}

/// `GET /api/ventas-resumen` - id, display name, total, timestamp.
pub async fn summary(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<SaleSummary>>, ApiError> {
    let summaries = db.sales().summaries().await?;
    Ok(Json(summaries))
}

/// `GET /api/ventas-detalle/:id` - the line items of one sale, joined with
/// product sku/name. An unknown sale id yields an empty list, not a 404.
pub async fn detail(
    Extension(db): Extension<Database>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<SaleDetailLine>>, ApiError> {
    let lines = db.sales().detail(id).await?;
    Ok(Json(lines))
}
