//! # Product Catalog Routes
//!
//! | Method | Path                | Handler     |
//! |--------|---------------------|-------------|
//! | POST   | /api/productos      | `create`    |
//! | GET    | /api/productos      | `list`      |
//! | PUT    | /api/productos/:id  | `update`    |
//! | DELETE | /api/productos/:id  | `remove`    |
//! | GET    | /api/inventario     | `inventory` |
//!
//! `/api/inventario` is a deliberate alias of the product listing: the
//! dashboard consumes it as a separate read path with identical semantics.

use axum::extract::{Extension, Path};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;

use inventario_core::{NewProduct, Product};
use inventario_db::Database;

use crate::dto::{CreatedResponse, DeletedResponse, OkResponse};
use crate::error::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/api/productos", get(list).post(create))
        .route("/api/productos/:id", put(update).delete(remove))
        .route("/api/inventario", get(inventory))
}

/// Update payload: the only three fields mutable after creation. Values
/// are written as sent, absent fields included (as NULL).
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(rename = "precioCompra")]
    pub purchase_price: Option<f64>,

    #[serde(rename = "precioVenta")]
    pub sale_price: Option<f64>,

    #[serde(rename = "cantidad")]
    pub quantity: Option<i64>,
}

/// `POST /api/productos` - creates a product. No required fields.
pub async fn create(
    Extension(db): Extension<Database>,
    Json(body): Json<NewProduct>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = db.products().insert(&body).await?;
    Ok(Json(CreatedResponse::new(id)))
}

/// `GET /api/productos` - all products, store order.
pub async fn list(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = db.products().list().await?;
    Ok(Json(products))
}

/// `GET /api/inventario` - the listing alias.
pub async fn inventory(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = db.products().list().await?;
    Ok(Json(products))
}

/// `PUT /api/productos/:id` - updates prices and quantity. An id that
/// matches nothing still reports success; zero rows affected is not an
/// error here.
pub async fn update(
    Extension(db): Extension<Database>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<OkResponse>, ApiError> {
    db.products()
        .update_pricing(id, body.purchase_price, body.sale_price, body.quantity)
        .await?;
    Ok(Json(OkResponse::ok()))
}

/// `DELETE /api/productos/:id` - deletes a product, reporting how many
/// rows went away (0 included).
pub async fn remove(
    Extension(db): Extension<Database>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let deleted = db.products().delete(id).await?;
    Ok(Json(DeletedResponse::new(deleted)))
}
