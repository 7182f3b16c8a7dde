//! Employee DTOs

use super::{AccountDTO, RoleDTO};
use crate::entities::{EmployeeRow, GetEmployeeRow, ListEmployeesRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeDTO {
    pub id: i32,
    pub account: AccountDTO,
    pub role: RoleDTO,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

/// Columns common to both employee read shapes
struct JoinedEmployee {
    id: i32,
    account: AccountDTO,
    role: RoleDTO,
    created_at: DateTime<Utc>,
    is_alive: bool,
}

impl From<GetEmployeeRow> for JoinedEmployee {
    fn from(r: GetEmployeeRow) -> Self {
        Self {
            id: r.id,
            account: AccountDTO {
                id: r.account_id,
                login: r.account_login,
                created_at: r.account_created_at,
                is_alive: r.account_is_alive,
            },
            role: RoleDTO {
                id: r.role_id,
                name: r.role_name,
                created_at: r.role_created_at,
            },
            created_at: r.created_at,
            is_alive: r.is_alive,
        }
    }
}

impl From<ListEmployeesRow> for JoinedEmployee {
    fn from(r: ListEmployeesRow) -> Self {
        Self {
            id: r.id,
            account: AccountDTO {
                id: r.account_id,
                login: r.account_login,
                created_at: r.account_created_at,
                is_alive: r.account_is_alive,
            },
            role: RoleDTO {
                id: r.role_id,
                name: r.role_name,
                created_at: r.role_created_at,
            },
            created_at: r.created_at,
            is_alive: r.is_alive,
        }
    }
}

impl From<EmployeeRow> for EmployeeDTO {
    fn from(row: EmployeeRow) -> Self {
        let joined = match row {
            EmployeeRow::Single(r) => JoinedEmployee::from(r),
            EmployeeRow::Listed(r) => JoinedEmployee::from(r),
        };
        Self {
            id: joined.id,
            account: joined.account,
            role: joined.role,
            created_at: joined.created_at,
            is_alive: joined.is_alive,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CreateEmployeeDTO {
    pub account_id: i32,
    pub role_id: i32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UpdateEmployeeDTO {
    pub account_id: i32,
    pub role_id: i32,
    pub is_alive: bool,
}
