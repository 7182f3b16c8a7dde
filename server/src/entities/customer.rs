//! Customer entity - An account holding a store balance

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Bare `customers` row, as returned by INSERT/UPDATE ... RETURNING
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Customer {
    pub id: i32,
    pub account_id: i32,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

/// `customers` joined with the owning `accounts` row
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CustomerAccountRow {
    pub id: i32,
    pub account_id: i32,
    pub account_login: String,
    pub account_created_at: DateTime<Utc>,
    pub account_is_alive: bool,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

#[derive(Debug, Clone)]
pub struct CreateCustomerParams {
    pub account_id: i32,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateCustomerParams {
    pub id: i32,
    pub balance: Decimal,
    pub is_alive: bool,
}
