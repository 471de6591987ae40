mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use product_service::domain::errors::ProductError;
use product_service::infrastructure::persistence::{
    InMemoryProductRepository, RecordedCall, SpyProductRepository,
};
use product_service::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

fn toy_body(code: &str) -> Value {
    json!({
        "code": code,
        "description": "Description",
        "priceInCents": 2500,
        "reference": "XZsdf5tY-AA",
        "title": "Toy"
    })
}

// ─── POST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_product_success() {
    let server = common::make_server(common::create_seeded_state(&[]));

    let response = server.post("/api/v1/products").json(&toy_body("XXCC")).await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["reference"], "XZsdf5tY-AA");
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_product_missing_code() {
    let server = common::make_server(common::create_seeded_state(&[]));

    let response = server
        .post("/api/v1/products")
        .json(&json!({
            "description": "Description",
            "priceInCents": 2500,
            "reference": "XZsdf5tY-AA",
            "title": "Toy"
        }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "message": "code is invalid" }));
}

#[tokio::test]
async fn test_create_product_validation_order() {
    let server = common::make_server(common::create_seeded_state(&[]));

    let response = server.post("/api/v1/products").json(&json!({})).await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "message": "code is invalid" }));

    let response = server
        .post("/api/v1/products")
        .json(&json!({
            "code": "A-1",
            "description": "d",
            "reference": "r",
            "title": "t"
        }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "message": "price is invalid" }));
}

#[tokio::test]
async fn test_create_product_malformed_json() {
    let server = common::make_server(common::create_seeded_state(&[]));

    let response = server
        .post("/api/v1/products")
        .bytes(Bytes::from_static(b"{\"code\": \"XXCC\","))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert!(!json["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_product_duplicate_code() {
    let server = common::make_server(common::create_seeded_state(&["XXCC"]));

    let response = server.post("/api/v1/products").json(&toy_body("xxcc")).await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&json!({
        "message": "a product with this code already exists"
    }));
}

#[tokio::test]
async fn test_create_product_storage_error_is_hidden() {
    let spy = SpyProductRepository::new()
        .failing_with(ProductError::Storage("relation \"products\" does not exist".to_string()));
    let server = common::make_server(common::create_test_state(Arc::new(spy)));

    let response = server.post("/api/v1/products").json(&toy_body("XXCC")).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "internal server error" }));
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_seeded_product() {
    let server = common::make_server(common::create_seeded_state(&["XSZ-000741"]));

    let response = server.get("/api/v1/products/XSZ-000741").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["code"], "XSZ-000741");
    assert_eq!(json["title"], "Toy");
    assert_eq!(json["priceInCents"], 2500);
    assert!(json["updatedAt"].is_string());
}

#[tokio::test]
async fn test_get_product_ignores_case() {
    let server = common::make_server(common::create_seeded_state(&["XSZ-000741"]));

    let response = server.get("/api/v1/products/xsz-000741").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["code"], "XSZ-000741");
}

#[tokio::test]
async fn test_get_product_not_found() {
    let server = common::make_server(common::create_seeded_state(&[]));

    let response = server.get("/api/v1/products/NOPE").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "message": "product doesn't exist" }));
}

#[tokio::test]
async fn test_get_product_undecodable_code() {
    let server = common::make_server(common::create_seeded_state(&[]));

    let response = server.get("/api/v1/products/%FF").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/json"
    );
    let json = response.json::<Value>();
    assert!(!json["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let server = common::make_server(common::create_seeded_state(&[]));

    let created = server
        .post("/api/v1/products")
        .json(&json!({
            "code": "RT-1",
            "description": "Wooden train",
            "priceInCents": 4999,
            "reference": "REF-RT-1",
            "title": "Train"
        }))
        .await
        .json::<Value>();

    let first = server.get("/api/v1/products/RT-1").await.json::<Value>();
    let second = server.get("/api/v1/products/RT-1").await.json::<Value>();

    assert_eq!(first["id"], created["id"]);
    assert_eq!(first["title"], "Train");
    assert_eq!(first["description"], "Wooden train");
    assert_eq!(first["reference"], "REF-RT-1");
    assert_eq!(first["priceInCents"], 4999);
    assert_eq!(first, second);
}

// ─── PATCH ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_product_success() {
    let server = common::make_server(common::create_seeded_state(&["UPD-1"]));
    let before = server.get("/api/v1/products/UPD-1").await.json::<Value>();

    let response = server
        .patch("/api/v1/products")
        .json(&json!({
            "code": "upd-1",
            "description": "Bigger",
            "priceInCents": 9900,
            "reference": "NEW-REF",
            "title": "Big toy"
        }))
        .await;

    response.assert_status_ok();
    assert!(response.text().is_empty());

    let after = server.get("/api/v1/products/UPD-1").await.json::<Value>();
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["code"], "UPD-1");
    assert_eq!(after["title"], "Big toy");
    assert_eq!(after["description"], "Bigger");
    assert_eq!(after["reference"], "NEW-REF");
    assert_eq!(after["priceInCents"], 9900);
}

#[tokio::test]
async fn test_update_product_not_found() {
    let server = common::make_server(common::create_seeded_state(&[]));

    let response = server.patch("/api/v1/products").json(&toy_body("NOPE")).await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_product_invalid() {
    let spy = Arc::new(SpyProductRepository::new());
    let server = common::make_server(common::create_test_state(spy.clone()));

    let response = server
        .patch("/api/v1/products")
        .json(&json!({
            "code": "UPD-1",
            "description": "d",
            "priceInCents": 1,
            "reference": "r"
        }))
        .await;

    response.assert_status_bad_request();
    response.assert_json(&json!({ "message": "title is required" }));
    assert!(spy.calls().is_empty());
}

#[tokio::test]
async fn test_update_product_malformed_json() {
    let spy = Arc::new(SpyProductRepository::new());
    let server = common::make_server(common::create_test_state(spy.clone()));

    let response = server
        .patch("/api/v1/products")
        .bytes(Bytes::from_static(b"{\"code\": \"UPD-1\","))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert!(!json["message"].as_str().unwrap().is_empty());
    assert!(spy.calls().is_empty());
}

#[tokio::test]
async fn test_update_product_is_single_write() {
    let spy = Arc::new(SpyProductRepository::new());
    let server = common::make_server(common::create_test_state(spy.clone()));

    server
        .patch("/api/v1/products")
        .json(&toy_body("UPD-1"))
        .await
        .assert_status_ok();

    let calls = spy.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(&calls[0], RecordedCall::Update(changes) if changes.code == "UPD-1"));
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_product_success() {
    let server = common::make_server(common::create_seeded_state(&["DEL-1"]));

    let response = server.delete("/api/v1/products/DEL-1").await;

    response.assert_status_ok();
    assert!(response.text().is_empty());

    server
        .get("/api/v1/products/DEL-1")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_product_not_found() {
    let server = common::make_server(common::create_seeded_state(&[]));

    let response = server.delete("/api/v1/products/NOPE").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "message": "product doesn't exist" }));
}

#[tokio::test]
async fn test_delete_product_undecodable_code() {
    let spy = Arc::new(SpyProductRepository::new());
    let server = common::make_server(common::create_test_state(spy.clone()));

    let response = server.delete("/api/v1/products/%FF").await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert!(!json["message"].as_str().unwrap().is_empty());
    assert!(spy.calls().is_empty());
}

// ─── Deadlines and shutdown ──────────────────────────────────────────────────

#[tokio::test]
async fn test_slow_backend_times_out() {
    let state = AppState::new(
        Arc::new(common::StalledRepository),
        Duration::from_millis(50),
    );
    let server = common::make_server(state);

    let response = server.get("/api/v1/products/SLOW").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "operation timed out" }));
}

#[tokio::test]
async fn test_shutdown_cancels_requests() {
    let repository = Arc::new(InMemoryProductRepository::new());
    let state = common::create_test_state(repository.clone());
    state.shutdown.cancel();
    let server = common::make_server(state);

    let response = server.post("/api/v1/products").json(&toy_body("XXCC")).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "message": "operation was cancelled" }));
    assert!(repository.is_empty().await);
}
