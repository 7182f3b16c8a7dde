//! Store entity - A physical shop

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Store {
    pub id: i32,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_alive: bool,
}

#[derive(Debug, Clone)]
pub struct CreateStoreParams {
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateStoreParams {
    pub id: i32,
    pub address: String,
    pub updated_at: DateTime<Utc>,
    pub is_alive: bool,
}
