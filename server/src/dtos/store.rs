//! Store DTOs

use crate::entities::Store;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StoreDTO {
    pub id: i32,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_alive: bool,
}

impl From<Store> for StoreDTO {
    fn from(value: Store) -> Self {
        Self {
            id: value.id,
            address: value.address,
            created_at: value.created_at,
            updated_at: value.updated_at,
            is_alive: value.is_alive,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CreateStoreDTO {
    pub address: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UpdateStoreDTO {
    pub address: String,
    pub is_alive: bool,
}
