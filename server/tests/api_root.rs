//! Integration tests for the health endpoint and the shared middleware

mod common;

#[cfg(test)]
mod root_tests {
    use super::common::*;

    #[tokio::test]
    async fn test_root_answers() {
        let server = empty_server();

        let response = server.get("/").await;

        response.assert_status_ok();
        assert!(!response.text().is_empty());
    }

    #[tokio::test]
    async fn test_request_id_is_returned() {
        let server = empty_server();

        let response = server.get("/accounts").await;

        response.assert_status_ok();
        assert!(response.headers().get("x-request-id").is_some());
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let server = empty_server();

        server.get("/warehouses").await.assert_status_not_found();
    }
}
