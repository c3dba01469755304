//! # Sale Repository
//!
//! Sale registration and the sale-side read models.
//!
//! ## Registration Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  register(NewSale)                                               │
//! │                                                                  │
//! │  BEGIN                                                           │
//! │    INSERT sales (header, timestamp defaulted to now)             │
//! │    for each line item, in input order:                           │
//! │      INSERT sale_items (snapshot of name/price/subtotal)         │
//! │      UPDATE products SET quantity = quantity - item.quantity     │
//! │  COMMIT                                                          │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole sequence is one transaction: a failure mid-loop rolls back the
//! header and every already-applied item, so a sale either exists complete
//! or not at all. Within the transaction the statements stay per-item and
//! in input order, not a bulk insert.
//!
//! There is no isolation beyond SQLite's: two concurrent registrations
//! against the same product serialize on the write lock, but nothing stops
//! the combined decrements from driving quantity negative. No underflow
//! guard exists on purpose.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use inventario_core::{NewSale, Sale, SaleDetailLine, SaleSummary, SubcategorySalesRow};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Registers a sale: header, line items, and stock decrements, as one
    /// transaction. Returns the generated sale id.
    ///
    /// ## Snapshot Pattern
    /// The caller-supplied product name, unit price, and subtotal are
    /// stored on the line item so the sale record survives later catalog
    /// edits. Nothing is recomputed or cross-checked against the catalog.
    pub async fn register(&self, sale: &NewSale) -> DbResult<i64> {
        let sold_at = sale
            .sold_at
            .clone()
            .unwrap_or_else(|| Utc::now().format("%Y-%m-%d %H:%M:%S").to_string());

        debug!(items = sale.items.len(), %sold_at, "registering sale");

        let mut tx = self.pool.begin().await?;

        let header = sqlx::query(
            r#"
            INSERT INTO sales (
                sold_at, customer_name, customer_surname,
                customer_document, customer_address, total
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&sold_at)
        .bind(&sale.customer.name)
        .bind(&sale.customer.surname)
        .bind(&sale.customer.document)
        .bind(&sale.customer.address)
        .bind(sale.total)
        .execute(&mut *tx)
        .await?;

        let sale_id = header.last_insert_rowid();

        for item in &sale.items {
            sqlx::query(
                r#"
                INSERT INTO sale_items (
                    sale_id, product_id, product_name,
                    unit_price, quantity, subtotal
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
            )
            .bind(sale_id)
            .bind(item.product_id)
            .bind(&item.product_name)
            .bind(item.unit_price)
            .bind(item.quantity)
            .bind(item.subtotal)
            .execute(&mut *tx)
            .await?;

            // Delta update; affects zero rows when the product no longer
            // exists, which keeps sales of removed products recordable.
            sqlx::query(
                r#"
                UPDATE products
                SET quantity = COALESCE(quantity, 0) - ?2
                WHERE id = ?1
                "#,
            )
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(sale_id, "sale registered");
        Ok(sale_id)
    }

    /// Lists all sales, newest id first.
    pub async fn list(&self) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(
            r#"
            SELECT
                id, sold_at, customer_name, customer_surname,
                customer_document, customer_address, total
            FROM sales
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Sales with a concatenated "name surname" display string, newest id
    /// first.
    pub async fn summaries(&self) -> DbResult<Vec<SaleSummary>> {
        let summaries = sqlx::query_as::<_, SaleSummary>(
            r#"
            SELECT
                id,
                TRIM(COALESCE(customer_name, '') || ' ' || COALESCE(customer_surname, '')) AS customer,
                total,
                sold_at
            FROM sales
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }

    /// Line items of one sale joined with the catalog for sku and name,
    /// line-item id ascending.
    ///
    /// LEFT JOIN: a line item whose product was deleted still shows, with
    /// its stored name snapshot and a NULL sku.
    pub async fn detail(&self, sale_id: i64) -> DbResult<Vec<SaleDetailLine>> {
        let lines = sqlx::query_as::<_, SaleDetailLine>(
            r#"
            SELECT
                d.id,
                d.product_id,
                COALESCE(d.product_name, p.name) AS product_name,
                p.sku,
                d.unit_price,
                d.quantity,
                d.subtotal
            FROM sale_items d
            LEFT JOIN products p ON p.id = d.product_id
            WHERE d.sale_id = ?1
            ORDER BY d.id
            "#,
        )
        .bind(sale_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }

    /// The dashboard GROUP BY: quantity sums and price averages per
    /// (subcategory, month, year), extracted from the sale timestamp.
    ///
    /// Ordered by year then month as zero-padded strings; the profit math
    /// and month labeling happen in `inventario_core::reporting`.
    pub async fn subcategory_month_rows(&self) -> DbResult<Vec<SubcategorySalesRow>> {
        let rows = sqlx::query_as::<_, SubcategorySalesRow>(
            r#"
            SELECT
                p.subcategory AS subcategory,
                strftime('%m', s.sold_at) AS month,
                strftime('%Y', s.sold_at) AS year,
                SUM(d.quantity) AS units_sold,
                AVG(d.unit_price) AS avg_sale_price,
                AVG(p.purchase_price) AS avg_purchase_price
            FROM sale_items d
            JOIN products p ON d.product_id = p.id
            JOIN sales s ON d.sale_id = s.id
            GROUP BY p.subcategory, month, year
            ORDER BY year, month
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
