//! GoodsSupplier entity - Many-to-many link between goods and suppliers
//!
//! No uniqueness is enforced on (good_id, supplier_id): the same pair can be
//! linked more than once.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct GoodsSupplier {
    pub id: i32,
    pub good_id: i32,
    pub supplier_id: i32,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

#[derive(Debug, Clone)]
pub struct CreateGoodsSupplierParams {
    pub good_id: i32,
    pub supplier_id: i32,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}
