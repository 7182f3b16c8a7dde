//! Integration tests for the role endpoints

mod common;

#[cfg(test)]
mod role_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_create_and_get_role() {
        let server = empty_server();

        let response = server
            .post("/roles")
            .json(&json!({ "name": "cashier" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created = response.json::<Value>();
        assert_eq!(created["name"], "cashier");

        let fetched = server.get(&format!("/roles/{}", created["id"])).await;
        fetched.assert_status_ok();
        assert_eq!(fetched.json::<Value>(), created);
    }

    #[tokio::test]
    async fn test_rename_role() {
        let server = empty_server();
        server
            .post("/roles")
            .json(&json!({ "name": "clerk" }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .put("/roles/1")
            .json(&json!({ "id": 99, "name": "head clerk" }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["id"], 1, "the path id wins over the body");
        assert_eq!(body["name"], "head clerk");
    }

    #[tokio::test]
    async fn test_missing_role_is_bad_request() {
        let server = empty_server();

        let response = server.get("/roles/3").await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "Role not found");
    }

    #[tokio::test]
    async fn test_delete_role() {
        let server = empty_server();
        server
            .post("/roles")
            .json(&json!({ "name": "intern" }))
            .await
            .assert_status(StatusCode::CREATED);

        server
            .delete("/roles/1")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        assert_eq!(server.get("/roles").await.json::<Value>(), json!([]));
    }
}
