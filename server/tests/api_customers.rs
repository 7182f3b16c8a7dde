//! Integration tests for the customer endpoints

mod common;

#[cfg(test)]
mod customer_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_create_customer() {
        let server = empty_server();
        let account_id = seed_account(&server, "gina").await;

        let response = server
            .post("/customers")
            .json(&json!({ "account_id": account_id, "balance": 1500 }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body = response.json::<Value>();
        assert_eq!(body["balance"], 1500);
        assert_eq!(body["account"]["login"], "gina");
        assert!(body["account"].get("password").is_none());

        let fetched = server.get(&format!("/customers/{}", body["id"])).await;
        assert_eq!(fetched.json::<Value>(), body);
    }

    #[tokio::test]
    async fn test_update_customer_balance() {
        let server = empty_server();
        let account_id = seed_account(&server, "hank").await;
        server
            .post("/customers")
            .json(&json!({ "account_id": account_id, "balance": 0 }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .put("/customers/1")
            .json(&json!({ "balance": 250, "is_alive": true }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["balance"], 250);
    }

    #[tokio::test]
    async fn test_missing_customer_is_bad_request() {
        let server = empty_server();

        let response = server.get("/customers/1").await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "Customer not found");
    }

    #[tokio::test]
    async fn test_customer_list_and_delete() {
        let server = empty_server();
        assert_eq!(server.get("/customers").await.json::<Value>(), json!([]));

        let account_id = seed_account(&server, "ivy").await;
        server
            .post("/customers")
            .json(&json!({ "account_id": account_id, "balance": 10 }))
            .await
            .assert_status(StatusCode::CREATED);
        assert_eq!(
            server.get("/customers").await.json::<Value>()[0]["balance"],
            10
        );

        server
            .delete("/customers/1")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server.get("/customers/1").await.assert_status_bad_request();
    }
}
