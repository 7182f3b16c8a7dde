//! Integration tests for the goods/supplier link endpoints
//!
//! - POST /goods-supplier
//! - GET /goods-supplier/by_supplier_id/{id}
//! - GET /goods-supplier/by_good_id/{id}
//! - DELETE /goods-supplier/{id}

mod common;

#[cfg(test)]
mod goods_supplier_tests {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_link_good_to_supplier() {
        let server = empty_server();
        let good_id = seed_good(&server, "FR-1", 45000).await;
        seed_supplier(&server, "first").await;
        let supplier_id = seed_supplier(&server, "second").await;
        assert_eq!((good_id, supplier_id), (1, 2));

        let response = server
            .post("/goods-supplier")
            .json(&json!({ "product_id": 1, "supplier_id": 2 }))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert!(response.text().is_empty());

        let goods = server.get("/goods-supplier/by_supplier_id/2").await;
        goods.assert_status_ok();
        let goods = goods.json::<Value>();
        assert_eq!(goods.as_array().map(Vec::len), Some(1));
        assert_eq!(goods[0]["id"], 1);
        assert_eq!(goods[0]["price"], 45000);
    }

    #[tokio::test]
    async fn test_suppliers_of_a_good() {
        let server = empty_server();
        let good_id = seed_good(&server, "OV-3", 12000).await;
        let supplier_id = seed_supplier(&server, "ovens-inc").await;

        server
            .post("/goods-suppliers")
            .json(&json!({ "product_id": good_id, "supplier_id": supplier_id }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .get(&format!("/goods-suppliers/by_good_id/{good_id}"))
            .await;
        response.assert_status_ok();
        let suppliers = response.json::<Value>();
        assert_eq!(suppliers[0]["id"], supplier_id);
        assert_eq!(suppliers[0]["account"]["login"], "ovens-inc");
    }

    #[tokio::test]
    async fn test_both_prefixes_share_the_same_links() {
        let server = empty_server();
        let good_id = seed_good(&server, "DW-9", 30000).await;
        let supplier_id = seed_supplier(&server, "dish").await;

        server
            .post("/goods-supplier")
            .json(&json!({ "product_id": good_id, "supplier_id": supplier_id }))
            .await
            .assert_status(StatusCode::CREATED);

        server
            .get(&format!("/goods-suppliers/by_supplier_id/{supplier_id}"))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_unlinked_lookups_are_empty() {
        let server = empty_server();
        let good_id = seed_good(&server, "IR-5", 2500).await;
        let supplier_id = seed_supplier(&server, "lonely").await;

        let goods = server
            .get(&format!("/goods-supplier/by_supplier_id/{supplier_id}"))
            .await;
        goods.assert_status_ok();
        assert_eq!(goods.json::<Value>(), json!([]));

        let suppliers = server
            .get(&format!("/goods-supplier/by_good_id/{good_id}"))
            .await;
        suppliers.assert_status_ok();
        assert_eq!(suppliers.json::<Value>(), json!([]));
    }

    #[tokio::test]
    async fn test_link_to_missing_good_fails() {
        let server = empty_server();
        let supplier_id = seed_supplier(&server, "vendor").await;

        let response = server
            .post("/goods-supplier")
            .json(&json!({ "product_id": 77, "supplier_id": supplier_id }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_delete_link() {
        let server = empty_server();
        let good_id = seed_good(&server, "AC-1", 60000).await;
        let supplier_id = seed_supplier(&server, "cool").await;
        server
            .post("/goods-supplier")
            .json(&json!({ "product_id": good_id, "supplier_id": supplier_id }))
            .await
            .assert_status(StatusCode::CREATED);

        server
            .delete("/goods-supplier/1")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        let suppliers = server
            .get(&format!("/goods-supplier/by_good_id/{good_id}"))
            .await;
        suppliers.assert_status_ok();
        assert_eq!(suppliers.json::<Value>(), json!([]));
        server
            .delete("/goods-supplier/1")
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_link_with_bad_id_path() {
        let server = empty_server();

        server
            .get("/goods-supplier/by_supplier_id/two")
            .await
            .assert_status_bad_request();
    }
}
