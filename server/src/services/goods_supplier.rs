//! Goods/supplier link service
//!
//! The two lookups walk the link table in opposite directions and answer
//! with the entity on the far side. No links means an empty list.

use super::error::{EntityKind, OrNotFound, ServiceError};
use crate::dtos::{CreateGoodsSupplierDTO, GoodDTO, GoodsSupplierDTO, SupplierDTO};
use crate::entities::CreateGoodsSupplierParams;
use crate::repositories::GoodsSupplierQueries;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct GoodsSupplierService {
    queries: Arc<dyn GoodsSupplierQueries>,
}

impl GoodsSupplierService {
    pub fn new(queries: Arc<dyn GoodsSupplierQueries>) -> Self {
        Self { queries }
    }

    #[instrument(skip(self, body), fields(good_id = %body.product_id, supplier_id = %body.supplier_id))]
    pub async fn create(
        &self,
        body: CreateGoodsSupplierDTO,
    ) -> Result<GoodsSupplierDTO, ServiceError> {
        let params = CreateGoodsSupplierParams {
            good_id: body.product_id,
            supplier_id: body.supplier_id,
            created_at: Utc::now(),
            is_alive: true,
        };
        let link = self.queries.create_goods_supplier(&params).await?;
        info!(link_id = link.id, "Good linked to supplier");
        Ok(GoodsSupplierDTO::from(link))
    }

    #[instrument(skip(self))]
    pub async fn list_goods_by_supplier(
        &self,
        supplier_id: i32,
    ) -> Result<Vec<GoodDTO>, ServiceError> {
        let goods = self.queries.list_goods_by_supplier(supplier_id).await?;
        debug!("Supplier has {} linked goods", goods.len());
        Ok(goods.into_iter().map(GoodDTO::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn list_suppliers_by_good(
        &self,
        good_id: i32,
    ) -> Result<Vec<SupplierDTO>, ServiceError> {
        let suppliers = self.queries.list_suppliers_by_good(good_id).await?;
        debug!("Good has {} linked suppliers", suppliers.len());
        Ok(suppliers.into_iter().map(SupplierDTO::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.queries
            .delete_goods_supplier(id)
            .await
            .or_not_found(EntityKind::GoodsSupplierLink)?;
        info!("Link deleted");
        Ok(())
    }
}
