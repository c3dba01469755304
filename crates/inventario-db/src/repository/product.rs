//! # Product Repository
//!
//! Catalog CRUD. Two behaviors worth calling out:
//!
//! - **Update touches prices and stock only.** Identity fields (sku, name,
//!   category, ...) are immutable through the update endpoint; the statement
//!   simply never mentions them.
//! - **Zero rows affected is not an error.** Updating or deleting an id
//!   that doesn't exist reports the row count and succeeds; the HTTP layer
//!   passes the count through.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use inventario_core::{NewProduct, Product};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and returns the generated id.
    ///
    /// Every field may be NULL; the storage layer is the only enforcement
    /// and it has none.
    pub async fn insert(&self, product: &NewProduct) -> DbResult<i64> {
        debug!(sku = ?product.sku, name = ?product.name, "inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (
                sku, name, category, subcategory,
                purchase_price, sale_price, quantity,
                color, brand, description
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&product.sku)
        .bind(&product.name)
        .bind(&product.category)
        .bind(&product.subcategory)
        .bind(product.purchase_price)
        .bind(product.sale_price)
        .bind(product.quantity)
        .bind(&product.color)
        .bind(&product.brand)
        .bind(&product.description)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Lists all products in store order (also the inventory view).
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                id, sku, name, category, subcategory,
                purchase_price, sale_price, quantity,
                color, brand, description
            FROM products
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Updates the mutable fields of a product: purchase price, sale price,
    /// and stock quantity. The bound values are written as-is, NULLs
    /// included.
    ///
    /// Returns the number of rows affected; 0 means the id didn't exist and
    /// is deliberately not an error.
    pub async fn update_pricing(
        &self,
        id: i64,
        purchase_price: Option<f64>,
        sale_price: Option<f64>,
        quantity: Option<i64>,
    ) -> DbResult<u64> {
        debug!(id, "updating product pricing");

        let result = sqlx::query(
            r#"
            UPDATE products
            SET purchase_price = ?2, sale_price = ?3, quantity = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(purchase_price)
        .bind(sale_price)
        .bind(quantity)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a product by id.
    ///
    /// Returns the number of rows removed (0 if not found; not an error).
    /// Historical sale line items keep their product_id and name snapshot.
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id, "deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
