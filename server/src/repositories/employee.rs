//! Employee statements
//!
//! The single read and the listing select identical columns but decode into
//! their own row types, `GetEmployeeRow` and `ListEmployeesRow`.

use super::{EmployeeQueries, PgQueries, expect_affected};
use crate::entities::{
    CreateEmployeeParams, Employee, GetEmployeeRow, ListEmployeesRow, UpdateEmployeeParams,
};
use async_trait::async_trait;
use sqlx::Error;
use tracing::{debug, instrument};

const SELECT_EMPLOYEE_JOINED: &str = r#"
    SELECT
        e.id,
        a.id AS account_id,
        a.login AS account_login,
        a.created_at AS account_created_at,
        a.is_alive AS account_is_alive,
        r.id AS role_id,
        r.name AS role_name,
        r.created_at AS role_created_at,
        e.created_at,
        e.is_alive
    FROM employees e
    INNER JOIN accounts a ON a.id = e.account_id
    INNER JOIN roles r ON r.id = e.role_id
"#;

#[async_trait]
impl EmployeeQueries for PgQueries {
    #[instrument(skip(self, params), fields(account_id = %params.account_id, role_id = %params.role_id))]
    async fn create_employee(&self, params: &CreateEmployeeParams) -> Result<Employee, Error> {
        debug!("Inserting employee");
        sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (account_id, role_id, created_at, is_alive)
            VALUES ($1, $2, $3, $4)
            RETURNING id, account_id, role_id, created_at, is_alive
            "#,
        )
        .bind(params.account_id)
        .bind(params.role_id)
        .bind(params.created_at)
        .bind(params.is_alive)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn get_employee(&self, id: i32) -> Result<GetEmployeeRow, Error> {
        let query = format!("{SELECT_EMPLOYEE_JOINED} WHERE e.id = $1");
        sqlx::query_as::<_, GetEmployeeRow>(&query)
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await
    }

    #[instrument(skip(self))]
    async fn list_employees(&self) -> Result<Vec<ListEmployeesRow>, Error> {
        let query = format!("{SELECT_EMPLOYEE_JOINED} ORDER BY e.id");
        sqlx::query_as::<_, ListEmployeesRow>(&query)
            .fetch_all(&self.connection_pool)
            .await
    }

    #[instrument(skip(self, params), fields(id = %params.id))]
    async fn update_employee(&self, params: &UpdateEmployeeParams) -> Result<Employee, Error> {
        sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET account_id = $2, role_id = $3, is_alive = $4
            WHERE id = $1
            RETURNING id, account_id, role_id, created_at, is_alive
            "#,
        )
        .bind(params.id)
        .bind(params.account_id)
        .bind(params.role_id)
        .bind(params.is_alive)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn delete_employee(&self, id: i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;
        expect_affected(result)
    }
}
