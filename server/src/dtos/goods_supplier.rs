//! GoodsSupplier link DTOs

use crate::entities::GoodsSupplier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GoodsSupplierDTO {
    pub id: i32,
    pub good_id: i32,
    pub supplier_id: i32,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

impl From<GoodsSupplier> for GoodsSupplierDTO {
    fn from(value: GoodsSupplier) -> Self {
        Self {
            id: value.id,
            good_id: value.good_id,
            supplier_id: value.supplier_id,
            created_at: value.created_at,
            is_alive: value.is_alive,
        }
    }
}

/// The good is called `product_id` on the wire
#[derive(Deserialize, Debug, Clone)]
pub struct CreateGoodsSupplierDTO {
    pub product_id: i32,
    pub supplier_id: i32,
}
