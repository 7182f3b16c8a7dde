//! Appliance store server library - exposes the router and its building blocks for the binary and the tests

pub mod core;
pub mod dtos;
pub mod entities;
pub mod handlers;
pub mod repositories;
pub mod services;

pub use crate::core::{AppError, AppState, config};
pub use handlers::root;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// Builds the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/accounts", configure_account_routes())
        .nest("/employees", configure_employee_routes())
        .nest("/roles", configure_role_routes())
        .nest("/customers", configure_customer_routes())
        .nest("/goods", configure_good_routes())
        .nest("/stores", configure_store_routes())
        .nest("/suppliers", configure_supplier_routes())
        .nest("/goods-supplier", configure_goods_supplier_routes())
        .nest("/goods-suppliers", configure_goods_supplier_routes())
        .layer(CatchPanicLayer::new())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

fn configure_account_routes() -> Router<Arc<AppState>> {
    use handlers::account::*;
    Router::new()
        .route("/", get(list_accounts).post(create_account))
        .route(
            "/{id}",
            get(get_account).put(update_account).delete(delete_account),
        )
}

fn configure_employee_routes() -> Router<Arc<AppState>> {
    use handlers::employee::*;
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

fn configure_role_routes() -> Router<Arc<AppState>> {
    use handlers::role::*;
    Router::new()
        .route("/", get(list_roles).post(create_role))
        .route("/{id}", get(get_role).put(update_role).delete(delete_role))
}

fn configure_customer_routes() -> Router<Arc<AppState>> {
    use handlers::customer::*;
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route(
            "/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

/// Goods are updated through `PUT /`, the id travels in the body
fn configure_good_routes() -> Router<Arc<AppState>> {
    use handlers::good::*;
    Router::new()
        .route("/", get(list_goods).post(create_good).put(update_good))
        .route("/{id}", get(get_good).delete(delete_good))
}

fn configure_store_routes() -> Router<Arc<AppState>> {
    use handlers::store::*;
    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route(
            "/{id}",
            get(get_store).put(update_store).delete(delete_store),
        )
}

fn configure_supplier_routes() -> Router<Arc<AppState>> {
    use handlers::supplier::*;
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route(
            "/{id}",
            get(get_supplier).put(update_supplier).delete(delete_supplier),
        )
}

fn configure_goods_supplier_routes() -> Router<Arc<AppState>> {
    use axum::routing::delete;
    use handlers::goods_supplier::*;
    Router::new()
        .route("/", post(create_goods_supplier))
        .route("/by_supplier_id/{id}", get(list_goods_by_supplier))
        .route("/by_good_id/{id}", get(list_suppliers_by_good))
        .route("/{id}", delete(delete_goods_supplier))
}
