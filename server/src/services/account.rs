//! Account service
//!
//! Passwords are hashed with bcrypt here, before they reach the executor.
//! The hash never leaves this layer: `AccountDTO` has no password field.

use super::error::{EntityKind, OrNotFound, ServiceError};
use crate::dtos::{AccountDTO, CreateAccountDTO, UpdateAccountDTO};
use crate::entities::{CreateAccountParams, UpdateAccountParams};
use crate::repositories::AccountQueries;
use bcrypt::hash;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct AccountService {
    queries: Arc<dyn AccountQueries>,
    hash_cost: u32,
}

impl AccountService {
    /// `hash_cost` is the bcrypt work factor (`bcrypt::DEFAULT_COST` in production)
    pub fn new(queries: Arc<dyn AccountQueries>, hash_cost: u32) -> Self {
        Self { queries, hash_cost }
    }

    /// bcrypt is CPU-bound, so it runs on the blocking pool
    async fn hash_password(&self, password: String) -> Result<String, ServiceError> {
        let cost = self.hash_cost;
        let hashed = tokio::task::spawn_blocking(move || hash(password, cost)).await??;
        Ok(hashed)
    }

    #[instrument(skip(self, body), fields(login = %body.login))]
    pub async fn create(&self, body: CreateAccountDTO) -> Result<AccountDTO, ServiceError> {
        debug!("Hashing password for new account");
        let params = CreateAccountParams {
            password: self.hash_password(body.password).await?,
            login: body.login,
            created_at: Utc::now(),
            is_alive: true,
        };
        let account = self.queries.create_account(&params).await?;
        info!(account_id = account.id, "Account created");
        Ok(AccountDTO::from(account))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<AccountDTO, ServiceError> {
        let account = self
            .queries
            .get_account(id)
            .await
            .or_not_found(EntityKind::Account)?;
        Ok(AccountDTO::from(account))
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<AccountDTO>, ServiceError> {
        let accounts = self.queries.list_accounts().await?;
        debug!("Listed {} accounts", accounts.len());
        Ok(accounts.into_iter().map(AccountDTO::from).collect())
    }

    #[instrument(skip(self, body))]
    pub async fn update(&self, id: i32, body: UpdateAccountDTO) -> Result<AccountDTO, ServiceError> {
        let password = match body.password {
            Some(plain) => Some(self.hash_password(plain).await?),
            None => None,
        };
        let params = UpdateAccountParams {
            id,
            login: body.login,
            password,
            is_alive: body.is_alive,
        };
        let account = self
            .queries
            .update_account(&params)
            .await
            .or_not_found(EntityKind::Account)?;
        info!("Account updated");
        Ok(AccountDTO::from(account))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.queries
            .delete_account(id)
            .await
            .or_not_found(EntityKind::Account)?;
        info!("Account deleted");
        Ok(())
    }
}
