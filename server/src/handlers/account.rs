//! Account handlers - `/accounts`
//!
//! POST answers 200 rather than 201, and a missing account is a 404.

use crate::core::{AppError, AppState, IdPath, JsonBody};
use crate::dtos::{AccountDTO, CreateAccountDTO, UpdateAccountDTO};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{debug, instrument};

#[instrument(skip(state))]
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountDTO>>, AppError> {
    debug!("Listing accounts");
    Ok(Json(state.account.list().await?))
}

#[instrument(skip(state))]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<AccountDTO>, AppError> {
    Ok(Json(state.account.get(id).await?))
}

#[instrument(skip(state, body), fields(login = %body.login))]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateAccountDTO>,
) -> Result<Json<AccountDTO>, AppError> {
    Ok(Json(state.account.create(body).await?))
}

#[instrument(skip(state, body))]
pub async fn update_account(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    JsonBody(body): JsonBody<UpdateAccountDTO>,
) -> Result<Json<AccountDTO>, AppError> {
    Ok(Json(state.account.update(id, body).await?))
}

#[instrument(skip(state))]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.account.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
