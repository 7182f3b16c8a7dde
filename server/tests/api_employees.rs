//! Integration tests for the employee endpoints

mod common;

#[cfg(test)]
mod employee_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    async fn seed_role(server: &TestServer, name: &str) -> i64 {
        let response = server.post("/roles").json(&json!({ "name": name })).await;
        response.assert_status(StatusCode::CREATED);
        response.json::<Value>()["id"].as_i64().expect("role id")
    }

    #[tokio::test]
    async fn test_create_employee_embeds_account_and_role() {
        let server = empty_server();
        let account_id = seed_account(&server, "erin").await;
        let role_id = seed_role(&server, "cashier").await;

        let response = server
            .post("/employees")
            .json(&json!({ "account_id": account_id, "role_id": role_id }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["account"]["id"], account_id);
        assert_eq!(body["account"]["login"], "erin");
        assert_eq!(body["role"]["name"], "cashier");
        assert_eq!(body["is_alive"], true);

        let fetched = server.get(&format!("/employees/{}", body["id"])).await;
        fetched.assert_status_ok();
        assert_eq!(fetched.json::<Value>(), body);

        let listed = server.get("/employees").await.json::<Value>();
        assert_eq!(listed, json!([body]));
    }

    #[tokio::test]
    async fn test_update_employee_role() {
        let server = empty_server();
        let account_id = seed_account(&server, "frank").await;
        let cashier = seed_role(&server, "cashier").await;
        let manager = seed_role(&server, "manager").await;
        server
            .post("/employees")
            .json(&json!({ "account_id": account_id, "role_id": cashier }))
            .await
            .assert_status_ok();

        let response = server
            .put("/employees/1")
            .json(&json!({ "account_id": account_id, "role_id": manager, "is_alive": false }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["role"]["id"], manager);
        assert_eq!(body["is_alive"], false);
    }

    #[tokio::test]
    async fn test_missing_employee_is_bad_request() {
        let server = empty_server();

        let response = server.delete("/employees/8").await;

        response.assert_status_bad_request();
        assert_eq!(response.text(), "Employee not found");
    }

    #[tokio::test]
    async fn test_list_employees_empty() {
        let server = empty_server();

        let response = server.get("/employees").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!([]));
    }
}
