//! Role service

use super::error::{EntityKind, OrNotFound, ServiceError};
use crate::dtos::{CreateRoleDTO, RoleDTO, UpdateRoleDTO};
use crate::entities::{CreateRoleParams, UpdateRoleParams};
use crate::repositories::RoleQueries;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct RoleService {
    queries: Arc<dyn RoleQueries>,
}

impl RoleService {
    pub fn new(queries: Arc<dyn RoleQueries>) -> Self {
        Self { queries }
    }

    #[instrument(skip(self, body), fields(name = %body.name))]
    pub async fn create(&self, body: CreateRoleDTO) -> Result<RoleDTO, ServiceError> {
        let params = CreateRoleParams {
            name: body.name,
            created_at: Utc::now(),
        };
        let role = self.queries.create_role(&params).await?;
        info!(role_id = role.id, "Role created");
        Ok(RoleDTO::from(role))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<RoleDTO, ServiceError> {
        let role = self
            .queries
            .get_role(id)
            .await
            .or_not_found(EntityKind::Role)?;
        Ok(RoleDTO::from(role))
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<RoleDTO>, ServiceError> {
        let roles = self.queries.list_roles().await?;
        Ok(roles.into_iter().map(RoleDTO::from).collect())
    }

    #[instrument(skip(self, body))]
    pub async fn update(&self, id: i32, body: UpdateRoleDTO) -> Result<RoleDTO, ServiceError> {
        let params = UpdateRoleParams {
            id,
            name: body.name,
        };
        let role = self
            .queries
            .update_role(&params)
            .await
            .or_not_found(EntityKind::Role)?;
        info!("Role updated");
        Ok(RoleDTO::from(role))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.queries
            .delete_role(id)
            .await
            .or_not_found(EntityKind::Role)?;
        info!("Role deleted");
        Ok(())
    }
}
