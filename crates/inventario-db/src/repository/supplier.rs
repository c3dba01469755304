//! # Supplier Repository
//!
//! Suppliers are the one aggregate whose delete surfaces "not found": the
//! repository reports the affected row count and the HTTP layer turns 0
//! into a 404. Every other delete in the system treats 0 as silent success;
//! the asymmetry is intentional and preserved.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use inventario_core::{NewSupplier, Supplier};

/// Repository for supplier database operations.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: SqlitePool,
}

impl SupplierRepository {
    /// Creates a new SupplierRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SupplierRepository { pool }
    }

    /// Inserts a supplier and returns the generated id.
    ///
    /// The name must already be validated non-empty; `suppliers.name` is
    /// NOT NULL and this is the only write that could trip it.
    pub async fn insert(&self, supplier: &NewSupplier) -> DbResult<i64> {
        debug!(name = ?supplier.name, "inserting supplier");

        let result = sqlx::query(
            r#"
            INSERT INTO suppliers (name, phone, email)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&supplier.name)
        .bind(&supplier.phone)
        .bind(&supplier.email)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Lists all suppliers in store order.
    pub async fn list(&self) -> DbResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, phone, email FROM suppliers",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(suppliers)
    }

    /// Deletes a supplier by id, returning the number of rows removed.
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id, "deleting supplier");

        let result = sqlx::query("DELETE FROM suppliers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn supplier(name: &str) -> NewSupplier {
        NewSupplier {
            name: Some(name.to_string()),
            phone: Some("555-0101".to_string()),
            email: Some("ventas@ejemplo.com".to_string()),
        }
    }

    #[tokio::test]
    async fn insert_then_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.suppliers();

        let id = repo.insert(&supplier("Distribuidora Sur")).await.unwrap();

        let suppliers = repo.list().await.unwrap();
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].id, id);
        assert_eq!(suppliers[0].name, "Distribuidora Sur");
        assert_eq!(suppliers[0].phone.as_deref(), Some("555-0101"));
    }

    #[tokio::test]
    async fn delete_reports_row_count() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.suppliers();

        let id = repo.insert(&supplier("Acme")).await.unwrap();
        assert_eq!(repo.delete(id).await.unwrap(), 1);
        // Gone now; the HTTP layer maps this 0 to a 404.
        assert_eq!(repo.delete(id).await.unwrap(), 0);
    }
}
