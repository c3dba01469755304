//! # Purchase Order Routes
//!
//! | Method | Path                 | Handler  |
//! |--------|----------------------|----------|
//! | POST   | /api/pedidos         | `create` |
//! | GET    | /api/pedidos-detalle | `detail` |
//!
//! Creating a purchase order records it and nothing else: product stock is
//! untouched (receiving goods is outside this system). Validation checks
//! presence of the references and a non-zero quantity, not existence.

use axum::extract::Extension;
use axum::routing::{get, post};
use axum::{Json, Router};

use inventario_core::validation;
use inventario_core::{NewPurchaseOrder, PurchaseOrderDetail};
use inventario_db::Database;

use crate::dto::CreatedResponse;
use crate::error::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/api/pedidos", post(create))
        .route("/api/pedidos-detalle", get(detail))
}

/// `POST /api/pedidos` - creates a purchase order. Timestamp defaults to
/// now when absent.
pub async fn create(
    Extension(db): Extension<Database>,
    Json(body): Json<NewPurchaseOrder>,
) -> Result<Json<CreatedResponse>, ApiError> {
    validation::validate_purchase_order(&body)
        .map_err(|_| ApiError::invalid_request("Datos incompletos del pedido"))?;

    let id = db.purchase_orders().insert(&body).await?;
    Ok(Json(CreatedResponse::new(id)))
}

/// `GET /api/pedidos-detalle` - purchase orders with product and supplier
/// names, newest id first.
pub async fn detail(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<PurchaseOrderDetail>>, ApiError> {
    let orders = db.purchase_orders().list_detail().await?;
    Ok(Json(orders))
}
