//! Goods (products) service
//!
//! Prices are whole units on the wire and NUMERIC in the table.

use super::error::{EntityKind, OrNotFound, ServiceError};
use crate::dtos::{CreateGoodDTO, GoodDTO, UpdateGoodDTO};
use crate::entities::{CreateGoodParams, UpdateGoodParams, decimal_from_units};
use crate::repositories::GoodQueries;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct GoodsService {
    queries: Arc<dyn GoodQueries>,
}

impl GoodsService {
    pub fn new(queries: Arc<dyn GoodQueries>) -> Self {
        Self { queries }
    }

    #[instrument(skip(self, body), fields(article = %body.article))]
    pub async fn create(&self, body: CreateGoodDTO) -> Result<GoodDTO, ServiceError> {
        let params = CreateGoodParams {
            article: body.article,
            price: decimal_from_units(body.price),
            name: body.name,
            quantity: body.quantity,
            is_alive: true,
        };
        let good = self.queries.create_good(&params).await?;
        info!(good_id = good.id, "Product created");
        Ok(GoodDTO::from(good))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<GoodDTO, ServiceError> {
        let good = self
            .queries
            .get_good(id)
            .await
            .or_not_found(EntityKind::Product)?;
        Ok(GoodDTO::from(good))
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<GoodDTO>, ServiceError> {
        let goods = self.queries.list_goods().await?;
        Ok(goods.into_iter().map(GoodDTO::from).collect())
    }

    /// The id is taken from the body
    #[instrument(skip(self, body), fields(id = %body.id))]
    pub async fn update(&self, body: UpdateGoodDTO) -> Result<GoodDTO, ServiceError> {
        let params = UpdateGoodParams {
            id: body.id,
            article: body.article,
            price: decimal_from_units(body.price),
            name: body.name,
            quantity: body.quantity,
            is_alive: body.is_alive,
        };
        let good = self
            .queries
            .update_good(&params)
            .await
            .or_not_found(EntityKind::Product)?;
        info!("Product updated");
        Ok(GoodDTO::from(good))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.queries
            .delete_good(id)
            .await
            .or_not_found(EntityKind::Product)?;
        info!("Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryQueries;

    fn kettle() -> CreateGoodDTO {
        CreateGoodDTO {
            article: "KT-100".to_string(),
            price: 2599,
            name: "Kettle".to_string(),
            quantity: 12,
        }
    }

    #[tokio::test]
    async fn price_survives_the_numeric_column() {
        let service = GoodsService::new(Arc::new(MemoryQueries::new()));
        let created = service.create(kettle()).await.unwrap();
        assert_eq!(created.price, 2599);
        assert_eq!(service.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_replaces_every_mutable_field() {
        let service = GoodsService::new(Arc::new(MemoryQueries::new()));
        let created = service.create(kettle()).await.unwrap();

        let updated = service
            .update(UpdateGoodDTO {
                id: created.id,
                article: "KT-200".to_string(),
                price: 3100,
                name: "Kettle Pro".to_string(),
                quantity: 0,
                is_alive: false,
            })
            .await
            .unwrap();
        assert_eq!(
            updated,
            GoodDTO {
                id: created.id,
                article: "KT-200".to_string(),
                price: 3100,
                name: "Kettle Pro".to_string(),
                quantity: 0,
                is_alive: false,
            }
        );
    }

    #[tokio::test]
    async fn missing_good_is_product_not_found() {
        let service = GoodsService::new(Arc::new(MemoryQueries::new()));
        let err = service.get(999).await.unwrap_err();
        assert_eq!(err.to_string(), "Product not found");
    }
}
