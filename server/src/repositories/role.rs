//! Role statements

use super::{PgQueries, RoleQueries, expect_affected};
use crate::entities::{CreateRoleParams, Role, UpdateRoleParams};
use async_trait::async_trait;
use sqlx::Error;
use tracing::instrument;

#[async_trait]
impl RoleQueries for PgQueries {
    #[instrument(skip(self, params), fields(name = %params.name))]
    async fn create_role(&self, params: &CreateRoleParams) -> Result<Role, Error> {
        sqlx::query_as::<_, Role>(
            "INSERT INTO roles (name, created_at) VALUES ($1, $2) RETURNING id, name, created_at",
        )
        .bind(&params.name)
        .bind(params.created_at)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn get_role(&self, id: i32) -> Result<Role, Error> {
        sqlx::query_as::<_, Role>("SELECT id, name, created_at FROM roles WHERE id = $1")
            .bind(id)
            .fetch_one(&self.connection_pool)
            .await
    }

    #[instrument(skip(self))]
    async fn list_roles(&self) -> Result<Vec<Role>, Error> {
        sqlx::query_as::<_, Role>("SELECT id, name, created_at FROM roles ORDER BY id")
            .fetch_all(&self.connection_pool)
            .await
    }

    #[instrument(skip(self, params), fields(id = %params.id))]
    async fn update_role(&self, params: &UpdateRoleParams) -> Result<Role, Error> {
        sqlx::query_as::<_, Role>(
            "UPDATE roles SET name = $2 WHERE id = $1 RETURNING id, name, created_at",
        )
        .bind(params.id)
        .bind(&params.name)
        .fetch_one(&self.connection_pool)
        .await
    }

    #[instrument(skip(self))]
    async fn delete_role(&self, id: i32) -> Result<(), Error> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;
        expect_affected(result)
    }
}
