//! # Supplier Routes
//!
//! | Method | Path                  | Handler  |
//! |--------|-----------------------|----------|
//! | POST   | /api/proveedores      | `create` |
//! | GET    | /api/proveedores      | `list`   |
//! | DELETE | /api/proveedores/:id  | `remove` |
//!
//! Supplier deletion is the only delete in the system that treats "zero
//! rows affected" as an error (404). Product deletion reports a count and
//! succeeds; the asymmetry is part of the API contract.

use axum::extract::{Extension, Path};
use axum::routing::{delete, get};
use axum::{Json, Router};

use inventario_core::validation;
use inventario_core::{NewSupplier, Supplier};
use inventario_db::Database;

use crate::dto::{CreatedResponse, OkResponse};
use crate::error::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/api/proveedores", get(list).post(create))
        .route("/api/proveedores/:id", delete(remove))
}

/// `POST /api/proveedores` - creates a supplier. The name is required and
/// must be non-blank; everything else is optional.
pub async fn create(
    Extension(db): Extension<Database>,
    Json(body): Json<NewSupplier>,
) -> Result<Json<CreatedResponse>, ApiError> {
    validation::validate_supplier_name(body.name.as_deref())
        .map_err(|_| ApiError::invalid_request("El nombre del proveedor es obligatorio"))?;

    let id = db.suppliers().insert(&body).await?;
    Ok(Json(CreatedResponse::new(id)))
}

/// `GET /api/proveedores` - all suppliers, store order.
pub async fn list(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<Supplier>>, ApiError> {
    let suppliers = db.suppliers().list().await?;
    Ok(Json(suppliers))
}

/// `DELETE /api/proveedores/:id` - deletes a supplier; 404 when the id
/// matches nothing.
pub async fn remove(
    Extension(db): Extension<Database>,
    Path(id): Path<i64>,
) -> Result<Json<OkResponse>, ApiError> {
    let deleted = db.suppliers().delete(id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("Proveedor no encontrado"));
    }
    Ok(Json(OkResponse::ok()))
}
