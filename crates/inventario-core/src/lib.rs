//! # inventario-core: Pure Business Logic
//!
//! Domain types and pure functions for the inventory/sales backend.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                        Request Data Flow                           │
//! │                                                                    │
//! │  HTTP handler (apps/api)                                           │
//! │       │  deserialize + validate                                    │
//! │       ▼                                                            │
//! │  ★ inventario-core (THIS CRATE) ★                                  │
//! │                                                                    │
//! │   ┌───────────┐  ┌────────────┐  ┌────────────┐                   │
//! │   │   types   │  │ validation │  │ reporting  │                   │
//! │   │  Product  │  │  required  │  │ month map  │                   │
//! │   │   Sale    │  │   fields   │  │ profit calc│                   │
//! │   └───────────┘  └────────────┘  └────────────┘                   │
//! │                                                                    │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS               │
//! │       │                                                            │
//! │       ▼                                                            │
//! │  inventario-db (SQLite queries, repositories)                      │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, Supplier, PurchaseOrder, ...)
//! - [`validation`] - Required-field validation for write operations
//! - [`reporting`] - Subcategory/month dashboard math and month-name table
//! - [`error`] - Typed validation errors
//!
//! ## Wire Format Note
//!
//! The public API of this service predates the Rust rewrite and speaks
//! Spanish JSON (`nombre`, `precioCompra`, `ventaId`, ...). Rust field names
//! are English; serde `rename` attributes carry the mapping, so serializing
//! an entity IS the wire shape.

pub mod error;
pub mod reporting;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use reporting::{month_name, round2, subcategory_report, SubcategoryReport, SubcategorySalesRow};
pub use types::*;
