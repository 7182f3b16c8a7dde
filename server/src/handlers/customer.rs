//! Customer handlers - `/customers`

use crate::core::{AppError, AppState, IdPath, JsonBody};
use crate::dtos::{CreateCustomerDTO, CustomerDTO, UpdateCustomerDTO};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{info, instrument};

#[instrument(skip(state))]
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CustomerDTO>>, AppError> {
    let customers = state.customer.list().await?;
    info!("Found {} customers", customers.len());
    Ok(Json(customers))
}

#[instrument(skip(state))]
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<CustomerDTO>, AppError> {
    Ok(Json(state.customer.get(id).await?))
}

#[instrument(skip(state, body), fields(account_id = %body.account_id))]
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateCustomerDTO>,
) -> Result<(StatusCode, Json<CustomerDTO>), AppError> {
    let customer = state.customer.create(body).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

#[instrument(skip(state, body))]
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
    JsonBody(body): JsonBody<UpdateCustomerDTO>,
) -> Result<Json<CustomerDTO>, AppError> {
    Ok(Json(state.customer.update(id, body).await?))
}

#[instrument(skip(state))]
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.customer.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
