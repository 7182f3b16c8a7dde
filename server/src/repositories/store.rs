//! Store statements

use super::{PgQueries, StoreQueries, expect_affected};
use crate::entities::{CreateStoreParams, Store, UpdateStoreParams};
use async_trait::async_trait;
use sqlx::Error;
use tracing::instrument;

#[async_trait]
impl StoreQueries for PgQueries {
    #[instrument(skip(self, params))]
    async fn create_store(&self, params: &CreateStoreParams) -> Result<Store, Error> {
        // updated_at starts equal to created_at
        sqlx::query_as::<_, Store>(
            r#"
            INSERT INTO stores (address, created_at, updated_at, is_alive)
            VALUES ($1, $2, $2, $3)
            RETURNING id, address, created_at, updated_at, is_alive
            "#,
        )
        .bind(&params.address)
        .bind(params.created_at)
        .bind(params.is_alive)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn get_store(&self, id: i32) -> Result<Store, Error> {
        sqlx::query_as::<_, Store>(
            "SELECT id, address, created_at, updated_at, is_alive FROM stores WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn list_stores(&self) -> Result<Vec<Store>, Error> {
        sqlx::query_as::<_, Store>(
            "SELECT id, address, created_at, updated_at, is_alive FROM stores ORDER BY id",
        )
        .fetch_all(&self.connection_pool)
        .await
    }

    #[instrument(skip(self, params), fields(id = %params.id))]
    async fn update_store(&self, params: &UpdateStoreParams) -> Result<Store, Error> {
        sqlx::query_as::<_, Store>(
            r#"
            UPDATE stores
            SET address = $2, updated_at = $3, is_alive = $4
            WHERE id = $1
            RETURNING id, address, created_at, updated_at, is_alive
            "#,
        )
        .bind(params.id)
        .bind(&params.address)
        .bind(params.updated_at)
        .bind(params.is_alive)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn delete_store(&self, id: i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;
        expect_affected(result)
    }
}
