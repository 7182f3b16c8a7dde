//! GoodsSupplier link statements

use super::supplier::SELECT_SUPPLIER_JOINED;
use super::{GoodsSupplierQueries, PgQueries, expect_affected};
use crate::entities::{CreateGoodsSupplierParams, Good, GoodsSupplier, SupplierAccountRow};
use async_trait::async_trait;
use sqlx::Error;
use tracing::{debug, instrument};

#[async_trait]
impl GoodsSupplierQueries for PgQueries {
    #[instrument(skip(self, params), fields(good_id = %params.good_id, supplier_id = %params.supplier_id))]
    async fn create_goods_supplier(
        &self,
        params: &CreateGoodsSupplierParams,
    ) -> Result<GoodsSupplier, Error> {
        debug!("Linking good to supplier");
        sqlx::query_as::<_, GoodsSupplier>(
            r#"
            INSERT INTO goods_suppliers (good_id, supplier_id, created_at, is_alive)
            VALUES ($1, $2, $3, $4)
            RETURNING id, good_id, supplier_id, created_at, is_alive
            "#,
        )
        .bind(params.good_id)
        .bind(params.supplier_id)
        .bind(params.created_at)
        .bind(params.is_alive)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn list_goods_by_supplier(&self, supplier_id: i32) -> Result<Vec<Good>, Error> {
        sqlx::query_as::<_, Good>(
            r#"
            SELECT g.id, g.article, g.price, g.name, g.quantity, g.is_alive
            FROM goods g
            INNER JOIN goods_suppliers gs ON gs.good_id = g.id
            WHERE gs.supplier_id = $1
            ORDER BY gs.id
            "#,
        )
        .bind(supplier_id)
        .fetch_all(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn list_suppliers_by_good(
        &self,
        good_id: i32,
    ) -> Result<Vec<SupplierAccountRow>, Error> {
        let query = format!(
            "{SELECT_SUPPLIER_JOINED} INNER JOIN goods_suppliers gs ON gs.supplier_id = s.id \
             WHERE gs.good_id = $1 ORDER BY gs.id"
        );
        sqlx::query_as::<_, SupplierAccountRow>(&query)
            .bind(good_id)
            .fetch_all(&self.connection_pool)
            .await
    }

    #[instrument(skip(self))]
    async fn delete_goods_supplier(&self, id: i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM goods_suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;
        expect_affected(result)
    }
}
