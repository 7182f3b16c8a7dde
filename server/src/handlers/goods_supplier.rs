//! Goods/supplier link handlers - `/goods-supplier` and `/goods-suppliers`

use crate::core::{AppError, AppState, IdPath, JsonBody};
use crate::dtos::{CreateGoodsSupplierDTO, GoodDTO, SupplierDTO};
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::{info, instrument};

/// Answers 201 with an empty body; the stored link is not echoed back
#[instrument(skip(state, body), fields(product_id = %body.product_id, supplier_id = %body.supplier_id))]
pub async fn create_goods_supplier(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateGoodsSupplierDTO>,
) -> Result<StatusCode, AppError> {
    let link = state.goods_supplier.create(body).await?;
    info!(link_id = link.id, "Link stored");
    Ok(StatusCode::CREATED)
}

#[instrument(skip(state))]
pub async fn list_goods_by_supplier(
    State(state): State<Arc<AppState>>,
    IdPath(supplier_id): IdPath<i32>,
) -> Result<Json<Vec<GoodDTO>>, AppError> {
    Ok(Json(
        state.goods_supplier.list_goods_by_supplier(supplier_id).await?,
    ))
}

#[instrument(skip(state))]
pub async fn list_suppliers_by_good(
    State(state): State<Arc<AppState>>,
    IdPath(good_id): IdPath<i32>,
) -> Result<Json<Vec<SupplierDTO>>, AppError> {
    Ok(Json(
        state.goods_supplier.list_suppliers_by_good(good_id).await?,
    ))
}

#[instrument(skip(state))]
pub async fn delete_goods_supplier(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath<i32>,
) -> Result<StatusCode, AppError> {
    state.goods_supplier.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
