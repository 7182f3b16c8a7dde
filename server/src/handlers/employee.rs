//! Employee handlers - `/employees`

use crate::core::{AppError, AppState, IdPath, JsonBody};
use crate::dtos::{CreateEmployeeDTO, EmployeeDTO, UpdateEmployeeDTO};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip(state))]
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EmployeeDTO>>, AppError> {
    Ok(Json(state.employee.list().await?))
}

#[instrument(skip(state))]
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<EmployeeDTO>, AppError> {
    Ok(Json(state.employee.get(id).await?))
}

#[instrument(skip(state, body), fields(account_id = %body.account_id, role_id = %body.role_id))]
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateEmployeeDTO>,
) -> Result<Json<EmployeeDTO>, AppError> {
    Ok(Json(state.employee.create(body).await?))
}

#[instrument(skip(state, body))]
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    JsonBody(body): JsonBody<UpdateEmployeeDTO>,
) -> Result<Json<EmployeeDTO>, AppError> {
    Ok(Json(state.employee.update(id, body).await?))
}

#[instrument(skip(state))]
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.employee.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
