//! # Validation Module
//!
//! Required-field checks for the write endpoints.
//!
//! ## Validation Strategy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Layer 1: HTTP handler (apps/api)                                │
//! │  ├── Shape validation (deserialization)                          │
//! │  └── THIS MODULE: required-field rules                           │
//! │           │                                                      │
//! │           ▼                                                      │
//! │  Layer 2: Database (SQLite)                                      │
//! │  └── NOT NULL constraint on suppliers.name                       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rules are deliberately minimal. Products accept anything (all ten
//! fields nullable); only sales, suppliers, and purchase orders have
//! required fields, and nothing beyond presence is checked.

use crate::error::{ValidationError, ValidationResult};
use crate::types::{NewPurchaseOrder, NewSaleItem};

/// Validates the line items of a sale registration.
///
/// ## Rules
/// - The collection must contain at least one item.
///
/// Quantities are NOT range-checked: zero and negative quantities pass
/// through, and stock may go negative as a consequence.
pub fn validate_sale_items(items: &[NewSaleItem]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::EmptyCollection { field: "detalles" });
    }
    Ok(())
}

/// Validates a supplier name.
///
/// ## Rules
/// - Must be present and non-blank after trimming.
///
/// ## Example
/// ```rust
/// use inventario_core::validation::validate_supplier_name;
///
/// assert!(validate_supplier_name(Some("Distribuidora Sur")).is_ok());
/// assert!(validate_supplier_name(Some("   ")).is_err());
/// assert!(validate_supplier_name(None).is_err());
/// ```
pub fn validate_supplier_name(name: Option<&str>) -> ValidationResult<()> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::Required { field: "nombre" }),
    }
}

/// Validates a purchase order payload.
///
/// ## Rules
/// - `productoId` and `proveedorId` must be present.
/// - `cantidad` must be present and non-zero.
///
/// Existence of the referenced product/supplier is NOT checked; a purchase
/// order is a record, not a stock movement.
pub fn validate_purchase_order(order: &NewPurchaseOrder) -> ValidationResult<()> {
    if order.product_id.is_none() {
        return Err(ValidationError::Required { field: "productoId" });
    }
    if order.supplier_id.is_none() {
        return Err(ValidationError::Required { field: "proveedorId" });
    }
    match order.quantity {
        None => Err(ValidationError::Required { field: "cantidad" }),
        Some(0) => Err(ValidationError::MustBeNonZero { field: "cantidad" }),
        Some(_) => Ok(()),
    }
}
