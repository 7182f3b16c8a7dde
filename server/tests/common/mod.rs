#![allow(dead_code)]

use appliance_store::core::AppState;
use appliance_store::repositories::{MemoryQueries, PgQueries};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

/// Lowest work factor bcrypt accepts, keeps account tests fast
pub const TEST_HASH_COST: u32 = 4;

/// Creates an AppState backed by a fresh in-memory executor
pub fn create_test_state() -> Arc<AppState> {
    Arc::new(AppState::new(
        Arc::new(MemoryQueries::new()),
        TEST_HASH_COST,
    ))
}

/// Creates an AppState over the Postgres executor
///
/// # Arguments
/// * `pool` - Pool handed out by `#[sqlx::test]`, migrations already applied
pub fn create_pg_test_state(pool: PgPool) -> Arc<AppState> {
    Arc::new(AppState::new(
        Arc::new(PgQueries::new(pool)),
        TEST_HASH_COST,
    ))
}

/// Creates a TestServer around the full application router
///
/// # Arguments
/// * `state` - AppState to serve
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = appliance_store::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Fresh server over an empty store
pub fn empty_server() -> TestServer {
    create_test_server(create_test_state())
}

/// Registers an account and returns its id
pub async fn seed_account(server: &TestServer, login: &str) -> i64 {
    let response = server
        .post("/accounts")
        .json(&json!({ "login": login, "password": "password123" }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["id"]
        .as_i64()
        .expect("account id")
}

/// Registers a supplier on a new account and returns the supplier id
pub async fn seed_supplier(server: &TestServer, login: &str) -> i64 {
    let account_id = seed_account(server, login).await;
    let response = server
        .post("/suppliers")
        .json(&json!({ "account_id": account_id }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"]
        .as_i64()
        .expect("supplier id")
}

/// Creates a good and returns its id
pub async fn seed_good(server: &TestServer, article: &str, price: i64) -> i64 {
    let response = server
        .post("/goods")
        .json(&json!({
            "article": article,
            "price": price,
            "name": format!("Good {article}"),
            "quantity": 10
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().expect("good id")
}
