//! # Domain Types
//!
//! Entities, write payloads, and read models for the inventory/sales domain.
//!
//! ## Type Groups
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  Entities (rows)     Write payloads      Read models (joins)     │
//! │  ───────────────     ──────────────      ─────────────────────   │
//! │  Product             NewProduct          SaleSummary             │
//! │  Sale                NewSale             SaleDetailLine          │
//! │  Supplier            NewSupplier         PurchaseOrderDetail     │
//! │                      NewPurchaseOrder                            │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every identifier is a server-generated integer (SQLite rowid). Product
//! attributes are all optional at the storage layer: the catalog accepts
//! partially described products and the schema does not push back.
//!
//! The sqlx `FromRow` derives are behind the `sqlx` cargo feature so this
//! crate stays I/O-free for everyone except the database layer.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A catalog product. Serialized form is the wire shape of
/// `GET /api/productos` and `GET /api/inventario`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,

    pub sku: Option<String>,

    #[serde(rename = "nombre")]
    pub name: Option<String>,

    #[serde(rename = "categoria")]
    pub category: Option<String>,

    /// Subcategory, the grouping key of the dashboard report.
    #[serde(rename = "subcategoria")]
    pub subcategory: Option<String>,

    #[serde(rename = "precioCompra")]
    pub purchase_price: Option<f64>,

    #[serde(rename = "precioVenta")]
    pub sale_price: Option<f64>,

    /// Stock on hand. Decremented by sale registration; may go negative
    /// (no underflow guard, deliberately).
    #[serde(rename = "cantidad")]
    pub quantity: Option<i64>,

    pub color: Option<String>,

    #[serde(rename = "marca")]
    pub brand: Option<String>,

    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

/// Payload of `POST /api/productos`. All ten fields optional: the storage
/// layer is the only enforcement and it accepts NULL everywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProduct {
    pub sku: Option<String>,

    #[serde(rename = "nombre")]
    pub name: Option<String>,

    #[serde(rename = "categoria")]
    pub category: Option<String>,

    #[serde(rename = "subcategoria")]
    pub subcategory: Option<String>,

    #[serde(rename = "precioCompra")]
    pub purchase_price: Option<f64>,

    #[serde(rename = "precioVenta")]
    pub sale_price: Option<f64>,

    #[serde(rename = "cantidad")]
    pub quantity: Option<i64>,

    pub color: Option<String>,

    #[serde(rename = "marca")]
    pub brand: Option<String>,

    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

// =============================================================================
// Sale
// =============================================================================

/// A registered sale header. Immutable once created: there is no update or
/// delete endpoint for sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: i64,

    /// Timestamp in `%Y-%m-%d %H:%M:%S` (the SQLite CURRENT_TIMESTAMP
    /// shape) unless the caller supplied something else verbatim.
    #[serde(rename = "fecha")]
    pub sold_at: String,

    #[serde(rename = "nombreCliente")]
    pub customer_name: Option<String>,

    #[serde(rename = "apellidosCliente")]
    pub customer_surname: Option<String>,

    #[serde(rename = "cedulaCliente")]
    pub customer_document: Option<String>,

    #[serde(rename = "direccionCliente")]
    pub customer_address: Option<String>,

    /// Caller-supplied total. Never recomputed from line items.
    pub total: Option<f64>,
}

/// Customer block of a sale registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleCustomer {
    #[serde(rename = "nombre")]
    pub name: Option<String>,

    #[serde(rename = "apellidos")]
    pub surname: Option<String>,

    #[serde(rename = "cedula")]
    pub document: Option<String>,

    #[serde(rename = "direccion")]
    pub address: Option<String>,
}

/// One line item of a sale registration.
///
/// `id` on the wire is the product id (the client sends cart rows keyed by
/// product). `subtotal` is caller-supplied and stored as-is, never checked
/// against `precio * cantidad`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSaleItem {
    #[serde(rename = "id")]
    pub product_id: i64,

    /// Product name snapshot, preserved with the sale even if the catalog
    /// row is renamed or deleted later.
    #[serde(rename = "nombre")]
    pub product_name: Option<String>,

    #[serde(rename = "precio")]
    pub unit_price: Option<f64>,

    #[serde(rename = "cantidad")]
    pub quantity: i64,

    pub subtotal: Option<f64>,
}

/// A validated sale registration: customer present, at least one item.
/// Built by the HTTP layer after validation, consumed by the repository.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub customer: SaleCustomer,
    pub items: Vec<NewSaleItem>,
    pub total: Option<f64>,
    /// Pass-through timestamp; the repository defaults it to now if absent.
    pub sold_at: Option<String>,
}

/// Row of `GET /api/ventas-resumen`: the sale with a display name
/// concatenated from customer name and surname.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleSummary {
    pub id: i64,

    #[serde(rename = "cliente")]
    pub customer: String,

    pub total: Option<f64>,

    #[serde(rename = "fecha")]
    pub sold_at: String,
}

/// Row of `GET /api/ventas-detalle/:id`: one line item joined with the
/// product catalog for sku and current name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleDetailLine {
    pub id: i64,

    #[serde(rename = "productoId")]
    pub product_id: Option<i64>,

    /// Stored snapshot when present, otherwise the joined catalog name.
    #[serde(rename = "nombreProducto")]
    pub product_name: Option<String>,

    pub sku: Option<String>,

    #[serde(rename = "precio")]
    pub unit_price: Option<f64>,

    #[serde(rename = "cantidad")]
    pub quantity: Option<i64>,

    pub subtotal: Option<f64>,
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier. `name` is the only required attribute in the whole catalog
/// side of the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Supplier {
    pub id: i64,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "telefono")]
    pub phone: Option<String>,

    pub email: Option<String>,
}

/// Payload of `POST /api/proveedores`. `name` is optional here because the
/// wire allows omitting it; validation rejects the request before the
/// repository ever sees a NULL name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSupplier {
    #[serde(rename = "nombre")]
    pub name: Option<String>,

    #[serde(rename = "telefono")]
    pub phone: Option<String>,

    pub email: Option<String>,
}

// =============================================================================
// Purchase Order
// =============================================================================

/// Payload of `POST /api/pedidos`.
///
/// A purchase order is purely a record: it never adjusts product stock
/// (asymmetric with sales on purpose). Ids must be present and quantity
/// non-zero; existence of the referenced rows is not checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPurchaseOrder {
    #[serde(rename = "productoId")]
    pub product_id: Option<i64>,

    #[serde(rename = "proveedorId")]
    pub supplier_id: Option<i64>,

    #[serde(rename = "cantidad")]
    pub quantity: Option<i64>,

    #[serde(rename = "precioCompra")]
    pub purchase_price: Option<f64>,

    #[serde(rename = "precioVenta")]
    pub sale_price: Option<f64>,

    #[serde(rename = "fecha")]
    pub ordered_at: Option<String>,
}

/// Row of `GET /api/pedidos-detalle`: purchase order joined with product and
/// supplier names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PurchaseOrderDetail {
    pub id: i64,

    #[serde(rename = "producto")]
    pub product_name: Option<String>,

    #[serde(rename = "proveedor")]
    pub supplier_name: Option<String>,

    #[serde(rename = "cantidad")]
    pub quantity: i64,

    #[serde(rename = "precioCompra")]
    pub purchase_price: Option<f64>,

    #[serde(rename = "fecha")]
    pub ordered_at: String,
}
