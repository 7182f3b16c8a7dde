//! Role handlers - `/roles`

use crate::core::{AppError, AppState, IdPath, JsonBody};
use crate::dtos::{CreateRoleDTO, RoleDTO, UpdateRoleDTO};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip(state))]
pub async fn list_roles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RoleDTO>>, AppError> {
    Ok(Json(state.role.list().await?))
}

#[instrument(skip(state))]
pub async fn get_role(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<RoleDTO>, AppError> {
    Ok(Json(state.role.get(id).await?))
}

#[instrument(skip(state, body), fields(name = %body.name))]
pub async fn create_role(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateRoleDTO>,
) -> Result<(StatusCode, Json<RoleDTO>), AppError> {
    let role = state.role.create(body).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

#[instrument(skip(state, body))]
pub async fn update_role(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    JsonBody(body): JsonBody<UpdateRoleDTO>,
) -> Result<Json<RoleDTO>, AppError> {
    Ok(Json(state.role.update(id, body).await?))
}

#[instrument(skip(state))]
pub async fn delete_role(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.role.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
