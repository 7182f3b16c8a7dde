//! Good statements

use super::{GoodQueries, PgQueries, expect_affected};
use crate::entities::{CreateGoodParams, Good, UpdateGoodParams};
use async_trait::async_trait;
use sqlx::Error;
use tracing::instrument;

#[async_trait]
impl GoodQueries for PgQueries {
    #[instrument(skip(self, params), fields(article = %params.article))]
    async fn create_good(&self, params: &CreateGoodParams) -> Result<Good, Error> {
        sqlx::query_as::<_, Good>(
            r#"
            INSERT INTO goods (article, price, name, quantity, is_alive)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, article, price, name, quantity, is_alive
            "#,
        )
        .bind(&params.article)
        .bind(params.price)
        .bind(&params.name)
        .bind(params.quantity)
        .bind(params.is_alive)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn get_good(&self, id: i32) -> Result<Good, Error> {
        sqlx::query_as::<_, Good>(
            "SELECT id, article, price, name, quantity, is_alive FROM goods WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn list_goods(&self) -> Result<Vec<Good>, Error> {
        sqlx::query_as::<_, Good>(
            "SELECT id, article, price, name, quantity, is_alive FROM goods ORDER BY id",
        )
        .fetch_all(&self.connection_pool)
        .await
    }

    #[instrument(skip(self, params), fields(id = %params.id))]
    async fn update_good(&self, params: &UpdateGoodParams) -> Result<Good, Error> {
        sqlx::query_as::<_, Good>(
            r#"
            UPDATE goods
            SET article = $2, price = $3, name = $4, quantity = $5, is_alive = $6
            WHERE id = $1
            RETURNING id, article, price, name, quantity, is_alive
            "#,
        )
        .bind(params.id)
        .bind(&params.article)
        .bind(params.price)
        .bind(&params.name)
        .bind(params.quantity)
        .bind(params.is_alive)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn delete_good(&self, id: i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM goods WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;
        expect_affected(result)
    }
}
