//! Employee service
//!
//! Both read shapes go through `EmployeeRow` so there is a single
//! row-to-DTO conversion.

use super::error::{EntityKind, OrNotFound, ServiceError};
use crate::dtos::{CreateEmployeeDTO, EmployeeDTO, UpdateEmployeeDTO};
use crate::entities::{CreateEmployeeParams, EmployeeRow, UpdateEmployeeParams};
use crate::repositories::EmployeeQueries;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct EmployeeService {
    queries: Arc<dyn EmployeeQueries>,
}

impl EmployeeService {
    pub fn new(queries: Arc<dyn EmployeeQueries>) -> Self {
        Self { queries }
    }

    async fn reload(&self, id: i32) -> Result<EmployeeDTO, ServiceError> {
        let row = self
            .queries
            .get_employee(id)
            .await
            .or_not_found(EntityKind::Employee)?;
        Ok(EmployeeDTO::from(EmployeeRow::from(row)))
    }

    #[instrument(skip(self, body), fields(account_id = %body.account_id, role_id = %body.role_id))]
    pub async fn create(&self, body: CreateEmployeeDTO) -> Result<EmployeeDTO, ServiceError> {
        let params = CreateEmployeeParams {
            account_id: body.account_id,
            role_id: body.role_id,
            created_at: Utc::now(),
            is_alive: true,
        };
        let employee = self.queries.create_employee(&params).await?;
        info!(employee_id = employee.id, "Employee created");
        self.reload(employee.id).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<EmployeeDTO, ServiceError> {
        self.reload(id).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<EmployeeDTO>, ServiceError> {
        let rows = self.queries.list_employees().await?;
        debug!("Listed {} employees", rows.len());
        Ok(rows
            .into_iter()
            .map(|row| EmployeeDTO::from(EmployeeRow::from(row)))
            .collect())
    }

    #[instrument(skip(self, body))]
    pub async fn update(
        &self,
        id: i32,
        body: UpdateEmployeeDTO,
    ) -> Result<EmployeeDTO, ServiceError> {
        let params = UpdateEmployeeParams {
            id,
            account_id: body.account_id,
            role_id: body.role_id,
            is_alive: body.is_alive,
        };
        let employee = self
            .queries
            .update_employee(&params)
            .await
            .or_not_found(EntityKind::Employee)?;
        info!("Employee updated");
        self.reload(employee.id).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.queries
            .delete_employee(id)
            .await
            .or_not_found(EntityKind::Employee)?;
        info!("Employee deleted");
        Ok(())
    }
}
