//! Account entity - Login credentials shared by employees, customers and suppliers

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Account {
    pub id: i32,
    pub login: String,
    /// bcrypt hash, never the plain password
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

#[derive(Debug, Clone)]
pub struct CreateAccountParams {
    pub login: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub is_alive: bool,
}

/// `password: None` keeps the stored hash.
#[derive(Debug, Clone)]
pub struct UpdateAccountParams {
    pub id: i32,
    pub login: String,
    pub password: Option<String>,
    pub is_alive: bool,
}
