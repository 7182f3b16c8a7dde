//! Goods handlers - `/goods`
//!
//! Update is `PUT /` with the id carried in the body.

use crate::core::{AppError, AppState, IdPath, JsonBody};
use crate::dtos::{CreateGoodDTO, GoodDTO, UpdateGoodDTO};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{info, instrument};

#[instrument(skip(state))]
pub async fn list_goods(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GoodDTO>>, AppError> {
    let goods = state.good.list().await?;
    info!("Found {} goods", goods.len());
    Ok(Json(goods))
}

#[instrument(skip(state))]
pub async fn get_good(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<Json<GoodDTO>, AppError> {
    Ok(Json(state.good.get(id).await?))
}

#[instrument(skip(state, body), fields(article = %body.article))]
pub async fn create_good(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateGoodDTO>,
) -> Result<(StatusCode, Json<GoodDTO>), AppError> {
    let good = state.good.create(body).await?;
    Ok((StatusCode::CREATED, Json(good)))
}

#[instrument(skip(state, body), fields(id = %body.id))]
pub async fn update_good(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<UpdateGoodDTO>,
) -> Result<Json<GoodDTO>, AppError> {
    Ok(Json(state.good.update(body).await?))
}

#[instrument(skip(state))]
pub async fn delete_good(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.good.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
