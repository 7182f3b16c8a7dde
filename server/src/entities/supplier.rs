//! Supplier entity - An account that delivers goods

use chrono::{DateTime, Utc};

/// Bare `suppliers` row, as returned by INSERT/UPDATE ... RETURNING
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Supplier {
    pub id: i32,
    pub account_id: i32,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

/// `suppliers` joined with the owning `accounts` row.
///
/// Shared by the single read, the full listing and the suppliers-of-a-good
/// join, which all select the same columns.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct SupplierAccountRow {
    pub id: i32,
    pub account_id: i32,
    pub account_login: String,
    pub account_created_at: DateTime<Utc>,
    pub account_is_alive: bool,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

#[derive(Debug, Clone)]
pub struct CreateSupplierParams {
    pub account_id: i32,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateSupplierParams {
    pub id: i32,
    pub is_alive: bool,
}
