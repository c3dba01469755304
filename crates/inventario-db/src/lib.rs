//! # inventario-db: Database Layer
//!
//! SQLite access for the inventory/sales backend.
//!
//! ## Architecture Position
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler (apps/api)                                           │
//! │       │                                                            │
//! │       ▼                                                            │
//! │  ┌──────────────────────────────────────────────────────────────┐  │
//! │  │                 inventario-db (THIS CRATE)                   │  │
//! │  │                                                              │  │
//! │  │   ┌──────────────┐   ┌───────────────┐   ┌───────────────┐  │  │
//! │  │   │   Database   │   │ Repositories  │   │  Migrations   │  │  │
//! │  │   │  (pool.rs)   │◄──│ product, sale │   │  (embedded)   │  │  │
//! │  │   │  SqlitePool  │   │ supplier, ... │   │ 001_init.sql  │  │  │
//! │  │   └──────────────┘   └───────────────┘   └───────────────┘  │  │
//! │  └──────────────────────────────────────────────────────────────┘  │
//! │       │                                                            │
//! │       ▼                                                            │
//! │  SQLite file (DATABASE_PATH, WAL mode, auto-created on boot)       │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inventario_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./data/inventario.db")).await?;
//! let products = db.products().list().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::product::ProductRepository;
pub use repository::purchase_order::PurchaseOrderRepository;
pub use repository::sale::SaleRepository;
pub use repository::supplier::SupplierRepository;
