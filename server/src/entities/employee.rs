//! Employee entity - An account working under a role
//!
//! Reads come back in two shapes: `GetEmployeeRow` from the single-row SELECT
//! and `ListEmployeesRow` from the listing. They carry the same columns under
//! the same names but stay distinct types, one per statement. `EmployeeRow`
//! folds them back together so the DTO conversion is written once.

use chrono::{DateTime, Utc};

/// Bare `employees` row, as returned by INSERT/UPDATE ... RETURNING
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Employee {
    pub id: i32,
    pub account_id: i32,
    pub role_id: i32,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct GetEmployeeRow {
    pub id: i32,
    pub account_id: i32,
    pub account_login: String,
    pub account_created_at: DateTime<Utc>,
    pub account_is_alive: bool,
    pub role_id: i32,
    pub role_name: String,
    pub role_created_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ListEmployeesRow {
    pub id: i32,
    pub account_id: i32,
    pub account_login: String,
    pub account_created_at: DateTime<Utc>,
    pub account_is_alive: bool,
    pub role_id: i32,
    pub role_name: String,
    pub role_created_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

/// Either employee read shape
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeRow {
    Single(GetEmployeeRow),
    Listed(ListEmployeesRow),
}

impl From<GetEmployeeRow> for EmployeeRow {
    fn from(row: GetEmployeeRow) -> Self {
        Self::Single(row)
    }
}

impl From<ListEmployeesRow> for EmployeeRow {
    fn from(row: ListEmployeesRow) -> Self {
        Self::Listed(row)
    }
}

#[derive(Debug, Clone)]
pub struct CreateEmployeeParams {
    pub account_id: i32,
    pub role_id: i32,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateEmployeeParams {
    pub id: i32,
    pub account_id: i32,
    pub role_id: i32,
    pub is_alive: bool,
}
