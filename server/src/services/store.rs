//! Store service
//!
//! `updated_at` starts equal to `created_at` and is restamped on every
//! update. Listing an empty table is reported as not-found.

use super::error::{EntityKind, OrNotFound, ServiceError};
use crate::dtos::{CreateStoreDTO, StoreDTO, UpdateStoreDTO};
use crate::entities::{CreateStoreParams, UpdateStoreParams};
use crate::repositories::StoreQueries;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct StoreService {
    queries: Arc<dyn StoreQueries>,
}

impl StoreService {
    pub fn new(queries: Arc<dyn StoreQueries>) -> Self {
        Self { queries }
    }

    #[instrument(skip(self, body))]
    pub async fn create(&self, body: CreateStoreDTO) -> Result<StoreDTO, ServiceError> {
        let params = CreateStoreParams {
            address: body.address,
            created_at: Utc::now(),
            is_alive: true,
        };
        let store = self.queries.create_store(&params).await?;
        info!(store_id = store.id, "Store created");
        Ok(StoreDTO::from(store))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<StoreDTO, ServiceError> {
        let store = self
            .queries
            .get_store(id)
            .await
            .or_not_found(EntityKind::Store)?;
        Ok(StoreDTO::from(store))
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<StoreDTO>, ServiceError> {
        let stores = self.queries.list_stores().await?;
        if stores.is_empty() {
            warn!("No stores registered");
            return Err(ServiceError::NotFound(EntityKind::Store));
        }
        Ok(stores.into_iter().map(StoreDTO::from).collect())
    }

    #[instrument(skip(self, body))]
    pub async fn update(&self, id: i32, body: UpdateStoreDTO) -> Result<StoreDTO, ServiceError> {
        let params = UpdateStoreParams {
            id,
            address: body.address,
            updated_at: Utc::now(),
            is_alive: body.is_alive,
        };
        let store = self
            .queries
            .update_store(&params)
            .await
            .or_not_found(EntityKind::Store)?;
        info!("Store updated");
        Ok(StoreDTO::from(store))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.queries
            .delete_store(id)
            .await
            .or_not_found(EntityKind::Store)?;
        info!("Store deleted");
        Ok(())
    }
}
