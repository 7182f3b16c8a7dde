//! Supplier statements

use super::{PgQueries, SupplierQueries, expect_affected};
use crate::entities::{CreateSupplierParams, Supplier, SupplierAccountRow, UpdateSupplierParams};
use async_trait::async_trait;
use sqlx::Error;
use tracing::instrument;

/// Also used by the suppliers-of-a-good join in `goods_supplier`
pub(super) const SELECT_SUPPLIER_JOINED: &str = r#"
    SELECT
        s.id,
        a.id AS account_id,
        a.login AS account_login,
        a.created_at AS account_created_at,
        a.is_alive AS account_is_alive,
        s.created_at,
        s.is_alive
    FROM suppliers s
    INNER JOIN accounts a ON a.id = s.account_id
"#;

#[async_trait]
impl SupplierQueries for PgQueries {
    #[instrument(skip(self, params), fields(account_id = %params.account_id))]
    async fn create_supplier(&self, params: &CreateSupplierParams) -> Result<Supplier, Error> {
        sqlx::query_as::<_, Supplier>(
            r#"
            INSERT INTO suppliers (account_id, created_at, is_alive)
            VALUES ($1, $2, $3)
            RETURNING id, account_id, created_at, is_alive
            "#,
        )
        .bind(params.account_id)
        .bind(params.created_at)
        .bind(params.is_alive)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn get_supplier(&self, id: i32) -> Result<SupplierAccountRow, Error> {
        let query = format!("{SELECT_SUPPLIER_JOINED} WHERE s.id = $1");
        sqlx::query_as::<_, SupplierAccountRow>(&query)
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await
    }

    #[instrument(skip(self))]
    async fn list_suppliers(&self) -> Result<Vec<SupplierAccountRow>, Error> {
        let query = format!("{SELECT_SUPPLIER_JOINED} ORDER BY s.id");
        sqlx::query_as::<_, SupplierAccountRow>(&query)
            .fetch_all(&self.connection_pool)
            .await
    }

    #[instrument(skip(self, params), fields(id = %params.id))]
    async fn update_supplier(&self, params: &UpdateSupplierParams) -> Result<Supplier, Error> {
        sqlx::query_as::<_, Supplier>(
            r#"
            UPDATE suppliers
            SET is_alive = $2
            WHERE id = $1
            RETURNING id, account_id, created_at, is_alive
            "#,
        )
        .bind(params.id)
        .bind(params.is_alive)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn delete_supplier(&self, id: i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;
        expect_affected(result)
    }
}
