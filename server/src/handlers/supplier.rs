//! Supplier handlers - `/suppliers`

use crate::core::{AppError, AppState, IdPath, JsonBody};
use crate::dtos::{CreateSupplierDTO, SupplierDTO, UpdateSupplierDTO};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip(state))]
pub async fn list_suppliers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SupplierDTO>>, AppError> {
    Ok(Json(state.supplier.list().await?))
}

#[instrument(skip(state))]
pub async fn get_supplier(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<SupplierDTO>, AppError> {
    Ok(Json(state.supplier.get(id).await?))
}

#[instrument(skip(state, body), fields(account_id = %body.account_id))]
pub async fn create_supplier(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateSupplierDTO>,
) -> Result<(StatusCode, Json<SupplierDTO>), AppError> {
    let supplier = state.supplier.create(body).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

#[instrument(skip(state, body))]
pub async fn update_supplier(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    JsonBody(body): JsonBody<UpdateSupplierDTO>,
) -> Result<Json<SupplierDTO>, AppError> {
    Ok(Json(state.supplier.update(id, body).await?))
}

#[instrument(skip(state))]
pub async fn delete_supplier(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.supplier.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
