//! Handlers module - HTTP endpoints, one sub-module per resource
//!
//! Handlers only decode the request, call the entity service on `AppState`
//! and pick the success status. Every failure goes out through `AppError`.

pub mod account;
pub mod customer;
pub mod employee;
pub mod good;
pub mod goods_supplier;
pub mod role;
pub mod store;
pub mod supplier;

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Appliance store API is running!")
}
