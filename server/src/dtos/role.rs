//! Role DTOs

use crate::entities::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoleDTO {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Role> for RoleDTO {
    fn from(value: Role) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CreateRoleDTO {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UpdateRoleDTO {
    pub name: String,
}
