//! # Purchase Order Repository
//!
//! Purchase orders are pure records: creating one never adjusts product
//! stock (asymmetric with sales, which decrement it). The references to
//! product and supplier are loose integers; the detail view LEFT JOINs so
//! orders against later-deleted rows still list, with NULL names.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use inventario_core::{NewPurchaseOrder, PurchaseOrderDetail};

/// Repository for purchase order database operations.
#[derive(Debug, Clone)]
pub struct PurchaseOrderRepository {
    pool: SqlitePool,
}

impl PurchaseOrderRepository {
    /// Creates a new PurchaseOrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PurchaseOrderRepository { pool }
    }

    /// Inserts a purchase order and returns the generated id.
    ///
    /// Ids and quantity must already be validated present/non-zero; the
    /// timestamp defaults to now when absent.
    pub async fn insert(&self, order: &NewPurchaseOrder) -> DbResult<i64> {
        let ordered_at = order
            .ordered_at
            .clone()
            .unwrap_or_else(|| Utc::now().format("%Y-%m-%d %H:%M:%S").to_string());

        debug!(
            product_id = ?order.product_id,
            supplier_id = ?order.supplier_id,
            "inserting purchase order"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO purchase_orders (
                ordered_at, purchase_price, sale_price,
                product_id, supplier_id, quantity
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&ordered_at)
        .bind(order.purchase_price)
        .bind(order.sale_price)
        .bind(order.product_id)
        .bind(order.supplier_id)
        .bind(order.quantity)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Purchase orders joined with product and supplier names, newest id
    /// first.
    pub async fn list_detail(&self) -> DbResult<Vec<PurchaseOrderDetail>> {
        let orders = sqlx::query_as::<_, PurchaseOrderDetail>(
            r#"
            SELECT
                po.id,
                p.name AS product_name,
                s.name AS supplier_name,
                po.quantity,
                po.purchase_price,
                po.ordered_at
            FROM purchase_orders po
            LEFT JOIN products p ON p.id = po.product_id
            LEFT JOIN suppliers s ON s.id = po.supplier_id
            ORDER BY po.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use inventario_core::{NewProduct, NewSupplier};

    async fn seed(db: &Database) -> (i64, i64) {
        let product_id = db
            .products()
            .insert(&NewProduct {
                name: Some("Camiseta".to_string()),
                quantity: Some(10),
                ..Default::default()
            })
            .await
            .unwrap();
        let supplier_id = db
            .suppliers()
            .insert(&NewSupplier {
                name: Some("Distribuidora Sur".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        (product_id, supplier_id)
    }

    fn order(product_id: i64, supplier_id: i64, quantity: i64) -> NewPurchaseOrder {
        NewPurchaseOrder {
            product_id: Some(product_id),
            supplier_id: Some(supplier_id),
            quantity: Some(quantity),
            purchase_price: Some(4.5),
            sale_price: Some(9.0),
            ordered_at: None,
        }
    }

    #[tokio::test]
    async fn insert_then_detail_joins_names() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (product_id, supplier_id) = seed(&db).await;

        let id = db
            .purchase_orders()
            .insert(&order(product_id, supplier_id, 20))
            .await
            .unwrap();

        let detail = db.purchase_orders().list_detail().await.unwrap();
        assert_eq!(detail.len(), 1);
        assert_eq!(detail[0].id, id);
        assert_eq!(detail[0].product_name.as_deref(), Some("Camiseta"));
        assert_eq!(detail[0].supplier_name.as_deref(), Some("Distribuidora Sur"));
        assert_eq!(detail[0].quantity, 20);
        assert_eq!(detail[0].purchase_price, Some(4.5));
    }

    #[tokio::test]
    async fn purchase_order_never_touches_stock() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (product_id, supplier_id) = seed(&db).await;

        db.purchase_orders()
            .insert(&order(product_id, supplier_id, 20))
            .await
            .unwrap();

        let products = db.products().list().await.unwrap();
        assert_eq!(products[0].quantity, Some(10));
    }

    #[tokio::test]
    async fn detail_is_newest_first_and_survives_deleted_refs() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let (product_id, supplier_id) = seed(&db).await;

        let first = db.purchase_orders().insert(&order(product_id, supplier_id, 1)).await.unwrap();
        let second = db.purchase_orders().insert(&order(product_id, supplier_id, 2)).await.unwrap();

        db.products().delete(product_id).await.unwrap();

        let detail = db.purchase_orders().list_detail().await.unwrap();
        assert_eq!(detail[0].id, second);
        assert_eq!(detail[1].id, first);
        // Product deleted: the order row survives with a NULL name.
        assert!(detail[0].product_name.is_none());
    }
}
