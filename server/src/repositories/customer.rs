//! Customer statements

use super::{CustomerQueries, PgQueries, expect_affected};
use crate::entities::{CreateCustomerParams, Customer, CustomerAccountRow, UpdateCustomerParams};
use async_trait::async_trait;
use sqlx::Error;
use tracing::instrument;

const SELECT_CUSTOMER_JOINED: &str = r#"
    SELECT
        c.id,
        a.id AS account_id,
        a.login AS account_login,
        a.created_at AS account_created_at,
        a.is_alive AS account_is_alive,
        c.balance,
        c.created_at,
        c.is_alive
    FROM customers c
    INNER JOIN accounts a ON a.id = c.account_id
"#;

#[async_trait]
impl CustomerQueries for PgQueries {
    #[instrument(skip(self, params), fields(account_id = %params.account_id))]
    async fn create_customer(&self, params: &CreateCustomerParams) -> Result<Customer, Error> {
        sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (account_id, balance, created_at, is_alive)
            VALUES ($1, $2, $3, $4)
            RETURNING id, account_id, balance, created_at, is_alive
            "#,
        )
        .bind(params.account_id)
        .bind(params.balance)
        .bind(params.created_at)
        .bind(params.is_alive)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn get_customer(&self, id: i32) -> Result<CustomerAccountRow, Error> {
        let query = format!("{SELECT_CUSTOMER_JOINED} WHERE c.id = $1");
        sqlx::query_as::<_, CustomerAccountRow>(&query)
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await
    }

    #[instrument(skip(self))]
    async fn list_customers(&self) -> Result<Vec<CustomerAccountRow>, Error> {
        let query = format!("{SELECT_CUSTOMER_JOINED} ORDER BY c.id");
        sqlx::query_as::<_, CustomerAccountRow>(&query)
            .fetch_all(&self.connection_pool)
            .await
    }

    #[instrument(skip(self, params), fields(id = %params.id))]
    async fn update_customer(&self, params: &UpdateCustomerParams) -> Result<Customer, Error> {
        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET balance = $2, is_alive = $3
            WHERE id = $1
            RETURNING id, account_id, balance, created_at, is_alive
            "#,
        )
        .bind(params.id)
        .bind(params.balance)
        .bind(params.is_alive)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn delete_customer(&self, id: i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;
        expect_affected(result)
    }
}
