//! Supplier service

use super::error::{EntityKind, OrNotFound, ServiceError};
use crate::dtos::{CreateSupplierDTO, SupplierDTO, UpdateSupplierDTO};
use crate::entities::{CreateSupplierParams, Supplier, UpdateSupplierParams};
use crate::repositories::{AccountQueries, SupplierQueries};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct SupplierService {
    queries: Arc<dyn SupplierQueries>,
    accounts: Arc<dyn AccountQueries>,
}

impl SupplierService {
    pub fn new(queries: Arc<dyn SupplierQueries>, accounts: Arc<dyn AccountQueries>) -> Self {
        Self { queries, accounts }
    }

    async fn with_account(&self, supplier: Supplier) -> Result<SupplierDTO, ServiceError> {
        let account = self
            .accounts
            .get_account(supplier.account_id)
            .await
            .or_not_found(EntityKind::Account)?;
        Ok(SupplierDTO::from((supplier, account)))
    }

    #[instrument(skip(self, body), fields(account_id = %body.account_id))]
    pub async fn create(&self, body: CreateSupplierDTO) -> Result<SupplierDTO, ServiceError> {
        let params = CreateSupplierParams {
            account_id: body.account_id,
            created_at: Utc::now(),
            is_alive: true,
        };
        let supplier = self.queries.create_supplier(&params).await?;
        info!(supplier_id = supplier.id, "Supplier created");
        self.with_account(supplier).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<SupplierDTO, ServiceError> {
        let row = self
            .queries
            .get_supplier(id)
            .await
            .or_not_found(EntityKind::Supplier)?;
        Ok(SupplierDTO::from(row))
    }

    /// An empty table is reported as not-found
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<SupplierDTO>, ServiceError> {
        let rows = self.queries.list_suppliers().await?;
        if rows.is_empty() {
            warn!("No suppliers registered");
            return Err(ServiceError::NotFound(EntityKind::Supplier));
        }
        Ok(rows.into_iter().map(SupplierDTO::from).collect())
    }

    #[instrument(skip(self, body))]
    pub async fn update(
        &self,
        id: i32,
        body: UpdateSupplierDTO,
    ) -> Result<SupplierDTO, ServiceError> {
        let params = UpdateSupplierParams {
            id,
            is_alive: body.is_alive,
        };
        let supplier = self
            .queries
            .update_supplier(&params)
            .await
            .or_not_found(EntityKind::Supplier)?;
        info!("Supplier updated");
        self.with_account(supplier).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.queries
            .delete_supplier(id)
            .await
            .or_not_found(EntityKind::Supplier)?;
        info!("Supplier deleted");
        Ok(())
    }
}
