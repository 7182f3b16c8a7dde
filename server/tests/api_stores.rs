//! Integration tests for the store endpoints
//!
//! Stores answer a missing row, and an empty listing, with 404.

mod common;

#[cfg(test)]
mod store_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_empty_store_list_is_not_found() {
        let server = empty_server();

        let response = server.get("/stores").await;

        response.assert_status_not_found();
        assert_eq!(response.text(), "Store not found");
    }

    #[tokio::test]
    async fn test_store_lifecycle() {
        let server = empty_server();

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
        let updated = updated.json::<Value>();
        assert_eq!(updated["address"], "14 Elm Street");
        assert_eq!(updated["created_at"], created["created_at"]);

        let listed = server.get("/stores").await;
        listed.assert_status_ok();
        assert_eq!(listed.json::<Value>(), json!([updated]));

        server
            .delete(&format!("/stores/{}", created["id"]))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server
            .get(&format!("/stores/{}", created["id"]))
            .await
            .assert_status_not_found();
    }
}
