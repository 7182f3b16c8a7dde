//! Store handlers - `/stores`

use crate::core::{AppError, AppState, IdPath, JsonBody};
use crate::dtos::{CreateStoreDTO, StoreDTO, UpdateStoreDTO};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip(state))]
pub async fn list_stores(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StoreDTO>>, AppError> {
    Ok(Json(state.store.list().await?))
}

#[instrument(skip(state))]
pub async fn get_store(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<StoreDTO>, AppError> {
    Ok(Json(state.store.get(id).await?))
}

#[instrument(skip(state, body))]
pub async fn create_store(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateStoreDTO>,
) -> Result<(StatusCode, Json<StoreDTO>), AppError> {
    let store = state.store.create(body).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

#[instrument(skip(state, body))]
pub async fn update_store(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    JsonBody(body): JsonBody<UpdateStoreDTO>,
) -> Result<Json<StoreDTO>, AppError> {
    Ok(Json(state.store.update(id, body).await?))
}

#[instrument(skip(state))]
pub async fn delete_store(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
