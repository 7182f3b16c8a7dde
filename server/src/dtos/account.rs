//! Account DTOs

use crate::entities::Account;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public view of an account: the password never leaves the server
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountDTO {
    pub id: i32,
    pub login: String,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

impl From<Account> for AccountDTO {
    fn from(value: Account) -> Self {
        Self {
            id: value.id,
            login: value.login,
            created_at: value.created_at,
            is_alive: value.is_alive,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CreateAccountDTO {
    pub login: String,
    pub password: String,
}

/// Full replace of the mutable fields; `password` may be omitted to keep the
/// current one
#[derive(Deserialize, Debug, Clone)]
pub struct UpdateAccountDTO {
    pub login: String,
    #[serde(default)]
    pub password: Option<String>,
    pub is_alive: bool,
}
