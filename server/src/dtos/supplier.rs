//! Supplier DTOs

use super::AccountDTO;
use crate::entities::{Account, Supplier, SupplierAccountRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SupplierDTO {
    pub id: i32,
    pub account: AccountDTO,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

impl From<SupplierAccountRow> for SupplierDTO {
    fn from(row: SupplierAccountRow) -> Self {
        Self {
            id: row.id,
            account: AccountDTO {
                id: row.account_id,
                login: row.account_login,
                created_at: row.account_created_at,
                is_alive: row.account_is_alive,
            },
            created_at: row.created_at,
            is_alive: row.is_alive,
        }
    }
}

impl From<(Supplier, Account)> for SupplierDTO {
    fn from(value: (Supplier, Account)) -> Self {
        let (supplier, account) = value;
        Self {
            id: supplier.id,
            account: AccountDTO::from(account),
            created_at: supplier.created_at,
            is_alive: supplier.is_alive,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CreateSupplierDTO {
    pub account_id: i32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UpdateSupplierDTO {
    pub is_alive: bool,
}
