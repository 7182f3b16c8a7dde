//! Account statements

use super::{AccountQueries, PgQueries, expect_affected};
use crate::entities::{Account, CreateAccountParams, UpdateAccountParams};
use async_trait::async_trait;
use sqlx::Error;
use tracing::{debug, instrument};

#[async_trait]
impl AccountQueries for PgQueries {
    #[instrument(skip(self, params), fields(login = %params.login))]
    async fn create_account(&self, params: &CreateAccountParams) -> Result<Account, Error> {
        debug!("Inserting account");
        sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (login, password, created_at, is_alive)
            VALUES ($1, $2, $3, $4)
            RETURNING id, login, password, created_at, is_alive
            "#,
        )
        .bind(&params.login)
        .bind(&params.password)
        .bind(params.created_at)
        .bind(params.is_alive)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn get_account(&self, id: i32) -> Result<Account, Error> {
        sqlx::query_as::<_, Account>(
            "SELECT id, login, password, created_at, is_alive FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn list_accounts(&self) -> Result<Vec<Account>, Error> {
        sqlx::query_as::<_, Account>(
            "SELECT id, login, password, created_at, is_alive FROM accounts ORDER BY id",
        )
        .fetch_all(&self.connection_pool)
        .await
    }

    #[instrument(skip(self, params), fields(id = %params.id))]
    async fn update_account(&self, params: &UpdateAccountParams) -> Result<Account, Error> {
        debug!("Updating account");
        sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET login = $2, password = COALESCE($3, password), is_alive = $4
            WHERE id = $1
            RETURNING id, login, password, created_at, is_alive
            "#,
        )
        .bind(params.id)
        .bind(&params.login)
        .bind(params.password.as_deref())
        .bind(params.is_alive)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn delete_account(&self, id: i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;
        expect_affected(result)
    }
}
