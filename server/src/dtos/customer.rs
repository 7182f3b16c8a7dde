//! Customer DTOs

use super::AccountDTO;
use crate::entities::{Account, Customer, CustomerAccountRow, units_from_decimal};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The embedded account is a snapshot taken when the customer was read
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CustomerDTO {
    pub id: i32,
    pub account: AccountDTO,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

impl From<CustomerAccountRow> for CustomerDTO {
    fn from(row: CustomerAccountRow) -> Self {
        Self {
            id: row.id,
            account: AccountDTO {
                id: row.account_id,
                login: row.account_login,
                created_at: row.account_created_at,
                is_alive: row.account_is_alive,
            },
            balance: units_from_decimal(row.balance),
            created_at: row.created_at,
            is_alive: row.is_alive,
        }
    }
}

impl From<(Customer, Account)> for CustomerDTO {
    fn from(value: (Customer, Account)) -> Self {
        let (customer, account) = value;
        Self {
            id: customer.id,
            account: AccountDTO::from(account),
            balance: units_from_decimal(customer.balance),
            created_at: customer.created_at,
            is_alive: customer.is_alive,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CreateCustomerDTO {
    pub account_id: i32,
    pub balance: i64,
}

/// The id comes from the path; an `id` in the body is ignored
#[derive(Deserialize, Debug, Clone)]
pub struct UpdateCustomerDTO {
    pub balance: i64,
    pub is_alive: bool,
}
