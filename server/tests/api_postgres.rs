//! Integration tests against Postgres
//!
//! Same router as the other suites, but over `PgQueries`. `#[sqlx::test]`
//! creates an isolated database per test, applies `migrations/` and drops it
//! afterwards, so `DATABASE_URL` must point at a server the tests can create
//! databases on.

mod common;

#[cfg(test)]
mod postgres_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};
    use sqlx::PgPool;

    // ============================================================
    // Accounts
    // ============================================================

    #[sqlx::test(migrations = "./migrations")]
    async fn test_account_round_trip(pool: PgPool) -> sqlx::Result<()> {
        let server = create_test_server(create_pg_test_state(pool));

        let created = server
            .post("/accounts")
            .json(&json!({ "login": "bob", "password": "x" }))
            .await;
        created.assert_status_ok();
        let created = created.json::<Value>();
        assert!(created.get("password").is_none());

        let fetched = server.get(&format!("/accounts/{}", created["id"])).await;
        fetched.assert_status_ok();
        assert_eq!(fetched.json::<Value>(), created);
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_account_update_without_password_keeps_hash(
        pool: PgPool,
    ) -> sqlx::Result<()> {
        let server = create_test_server(create_pg_test_state(pool.clone()));
        let id = seed_account(&server, "carol").await;

        let before: String = sqlx::query_scalar("SELECT password FROM accounts WHERE id = $1")
            .bind(id as i32)
            .fetch_one(&pool)
            .await?;

        let response = server
            .put(&format!("/accounts/{id}"))
            .json(&json!({ "login": "carol2", "is_alive": false }))
            .await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["is_alive"], false);

        let after: String = sqlx::query_scalar("SELECT password FROM accounts WHERE id = $1")
            .bind(id as i32)
            .fetch_one(&pool)
            .await?;
        assert_eq!(before, after);
        assert!(bcrypt::verify("password123", &after).unwrap_or(false));

        let response = server
            .put(&format!("/accounts/{id}"))
            .json(&json!({ "login": "carol2", "password": "changed", "is_alive": true }))
            .await;
        response.assert_status_ok();
        let rotated: String = sqlx::query_scalar("SELECT password FROM accounts WHERE id = $1")
            .bind(id as i32)
            .fetch_one(&pool)
            .await?;
        assert!(bcrypt::verify("changed", &rotated).unwrap_or(false));
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_account_delete_then_get(pool: PgPool) -> sqlx::Result<()> {
        let server = create_test_server(create_pg_test_state(pool));
        let id = seed_account(&server, "temp").await;

        server
            .delete(&format!("/accounts/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .get(&format!("/accounts/{id}"))
            .await
            .assert_status_not_found();
        server
            .delete(&format!("/accounts/{id}"))
            .await
            .assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_referenced_account_delete_is_server_error(pool: PgPool) -> sqlx::Result<()> {
        let server = create_test_server(create_pg_test_state(pool));
        seed_supplier(&server, "vendor").await;

        server
            .delete("/accounts/1")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        Ok(())
    }

    // ============================================================
    // Goods, stores, customers, employees
    // ============================================================

    #[sqlx::test(migrations = "./migrations")]
    async fn test_good_numeric_price(pool: PgPool) -> sqlx::Result<()> {
        let server = create_test_server(create_pg_test_state(pool.clone()));
        let id = seed_good(&server, "WM-7", 49900).await;

        let fetched = server.get(&format!("/goods/{id}")).await;
        fetched.assert_status_ok();
        assert_eq!(fetched.json::<Value>()["price"], 49900);

        // fractional NUMERIC written outside the API is truncated on read
        sqlx::query("UPDATE goods SET price = 10.75 WHERE id = $1")
            .bind(id as i32)
            .execute(&pool)
            .await?;
        let fetched = server.get(&format!("/goods/{id}")).await;
        assert_eq!(fetched.json::<Value>()["price"], 10);

        server
            .get("/goods/999")
            .await
            .assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_store_lifecycle(pool: PgPool) -> sqlx::Result<()> {
        let server = create_test_server(create_pg_test_state(pool));
        server.get("/stores").await.assert_status_not_found();

        let created = server
            .post("/stores")
            .json(&json!({ "address": "12 Elm Street" }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let created = created.json::<Value>();
        assert_eq!(created["created_at"], created["updated_at"]);

        let updated = server
            .put(&format!("/stores/{}", created["id"]))
            .json(&json!({ "address": "14 Elm Street", "is_alive": false }))
            .await;
        updated.assert_status_ok();
        assert_eq!(updated.json::<Value>()["address"], "14 Elm Street");

        server
            .delete(&format!("/stores/{}", created["id"]))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .get(&format!("/stores/{}", created["id"]))
            .await
            .assert_status_not_found();
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_customer_joined_read(pool: PgPool) -> sqlx::Result<()> {
        let server = create_test_server(create_pg_test_state(pool));
        let account_id = seed_account(&server, "gina").await;

        let created = server
            .post("/customers")
            .json(&json!({ "account_id": account_id, "balance": 1500 }))
            .await;
        created.assert_status(StatusCode::CREATED);
        let created = created.json::<Value>();

        let fetched = server.get(&format!("/customers/{}", created["id"])).await;
        fetched.assert_status_ok();
        assert_eq!(fetched.json::<Value>(), created);
        assert_eq!(server.get("/customers").await.json::<Value>(), json!([created]));
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_employee_joined_reads(pool: PgPool) -> sqlx::Result<()> {
        let server = create_test_server(create_pg_test_state(pool));
        let account_id = seed_account(&server, "erin").await;
        let role = server
            .post("/roles")
            .json(&json!({ "name": "cashier" }))
            .await
            .json::<Value>();

        let created = server
            .post("/employees")
            .json(&json!({ "account_id": account_id, "role_id": role["id"] }))
            .await;
        created.assert_status_ok();
        let created = created.json::<Value>();
        assert_eq!(created["role"], role);
        assert_eq!(created["account"]["login"], "erin");

        let fetched = server.get(&format!("/employees/{}", created["id"])).await;
        assert_eq!(fetched.json::<Value>(), created);
        assert_eq!(server.get("/employees").await.json::<Value>(), json!([created]));
        Ok(())
    }

    // ============================================================
    // Goods/supplier links
    // ============================================================

    #[sqlx::test(migrations = "./migrations")]
    async fn test_link_joins_both_directions(pool: PgPool) -> sqlx::Result<()> {
        let server = create_test_server(create_pg_test_state(pool));
        let good_id = seed_good(&server, "FR-1", 45000).await;
        let supplier_id = seed_supplier(&server, "fridges").await;

        let goods = server
            .get(&format!("/goods-supplier/by_supplier_id/{supplier_id}"))
            .await;
        goods.assert_status_ok();
        assert_eq!(goods.json::<Value>(), json!([]));

        let response = server
            .post("/goods-supplier")
            .json(&json!({ "product_id": good_id, "supplier_id": supplier_id }))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert!(response.text().is_empty());

        let goods = server
            .get(&format!("/goods-supplier/by_supplier_id/{supplier_id}"))
            .await
            .json::<Value>();
        assert_eq!(goods[0]["id"], good_id);
        assert_eq!(goods[0]["price"], 45000);

        let suppliers = server
            .get(&format!("/goods-suppliers/by_good_id/{good_id}"))
            .await
            .json::<Value>();
        assert_eq!(suppliers[0]["id"], supplier_id);
        assert_eq!(suppliers[0]["account"]["login"], "fridges");

        server
            .delete("/goods-supplier/1")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .delete("/goods-supplier/1")
            .await
            .assert_status_bad_request();
        Ok(())
    }
}
