//! Integration tests for the receipt processor HTTP API
//!
//! These tests drive the router end to end: submit a receipt, then query its
//! points.

use axum::http::StatusCode;
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use receipt_processor::{
    api::server::create_router,
    config::{Config, ServerConfig},
    InMemoryReceiptStore, ReceiptRepository,
};
use tower::ServiceExt;

/// Create a test configuration
fn create_test_config() -> Arc<Config> {
    Arc::new(Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            log_level: "debug".to_string(),
            environment: "test".to_string(),
            request_timeout_secs: 30,
            max_body_bytes: 4096,
        },
    })
}

fn create_test_app() -> (Router, InMemoryReceiptStore) {
    let store = InMemoryReceiptStore::new();
    let app = create_router(create_test_config(), Arc::new(store.clone()));
    (app, store)
}

fn target_receipt() -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
            { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
            { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
            { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
            { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
        ],
        "total": "35.35"
    })
}

fn corner_market_receipt() -> Value {
    json!({
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    })
}

async fn send(app: Router, request: axum::http::Request<axum::body::Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn submit(app: Router, body: &Value) -> (StatusCode, Value) {
    send(
        app,
        axum::http::Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn points(app: Router, id: &str) -> (StatusCode, Value) {
    send(
        app,
        axum::http::Request::builder()
            .uri(format!("/receipts/{}/points", id))
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_submit_returns_id() {
    let (app, store) = create_test_app();

    let (status, json) = submit(app, &target_receipt()).await;

    assert_eq!(status, StatusCode::OK);
    let id = json["id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
    assert!(store.get(id).await.is_ok());
}

#[tokio::test]
async fn test_target_receipt_scores_28() {
    let (app, _) = create_test_app();

    let (_, json) = submit(app.clone(), &target_receipt()).await;
    let (status, json) = points(app, json["id"].as_str().unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "points": 28 }));
}

#[tokio::test]
async fn test_corner_market_receipt_scores_109() {
    let (app, _) = create_test_app();

    let (_, json) = submit(app.clone(), &corner_market_receipt()).await;
    let (status, json) = points(app, json["id"].as_str().unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["points"], 109);
}

#[tokio::test]
async fn test_points_are_stable_across_queries() {
    let (app, _) = create_test_app();

    let (_, json) = submit(app.clone(), &target_receipt()).await;
    let id = json["id"].as_str().unwrap().to_string();

    let (_, first) = points(app.clone(), &id).await;
    let (_, second) = points(app, &id).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_same_receipt_gets_distinct_ids() {
    let (app, store) = create_test_app();

    let (_, first) = submit(app.clone(), &target_receipt()).await;
    let (_, second) = submit(app, &target_receipt()).await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_unknown_id_returns_404() {
    let (app, _) = create_test_app();

    let (status, json) = points(app, &uuid::Uuid::new_v4().to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["message"], "No receipt found for that ID");
    assert_eq!(json["error"]["type"], "not_found");
}

#[tokio::test]
async fn test_invalid_receipt_is_rejected_and_not_stored() {
    let (app, store) = create_test_app();
    let mut receipt = target_receipt();
    receipt["items"] = json!([]);

    let (status, json) = submit(app, &receipt).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["type"], "validation_error");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("At least one item required"));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_non_positive_prices_are_rejected() {
    for price in ["0.00", "-1.00"] {
        let (app, _) = create_test_app();
        let mut receipt = corner_market_receipt();
        receipt["items"][0]["price"] = json!(price);

        let (status, _) = submit(app, &receipt).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "price {price} should be rejected");
    }

    let (app, _) = create_test_app();
    let mut receipt = corner_market_receipt();
    receipt["items"][0]["price"] = json!("0.01");
    let (status, _) = submit(app, &receipt).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_largest_price_is_scored() {
    let (app, _) = create_test_app();
    let mut receipt = corner_market_receipt();
    receipt["items"][0] = json!({ "shortDescription": "Tea", "price": "92233720368547758.07" });

    let (status, json) = submit(app.clone(), &receipt).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = points(app, json["id"].as_str().unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["points"], 109 + 18_446_744_073_709_552u64);
}

#[tokio::test]
async fn test_malformed_date_is_rejected() {
    let (app, _) = create_test_app();
    let mut receipt = target_receipt();
    receipt["purchaseDate"] = json!("2022-13-40");

    let (status, json) = submit(app, &receipt).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Invalid date format"));
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let (app, _) = create_test_app();
    let mut receipt = target_receipt();
    receipt.as_object_mut().unwrap().remove("total");

    let (status, json) = submit(app, &receipt).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["type"], "malformed_body");
}

#[tokio::test]
async fn test_non_json_body_is_rejected() {
    let (app, _) = create_test_app();

    let (status, json) = send(
        app,
        axum::http::Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["status"], 400);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let (app, store) = create_test_app();
    let items: Vec<Value> = (0..200)
        .map(|_| json!({ "shortDescription": "Gatorade", "price": "2.25" }))
        .collect();
    let mut receipt = corner_market_receipt();
    receipt["items"] = Value::Array(items);

    let (status, json) = submit(app, &receipt).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["error"]["type"], "payload_too_large");
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method("OPTIONS")
                .uri("/receipts/process")
                .header("Origin", "http://example.com")
                .header("Access-Control-Request-Method", "POST")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("access-control-allow-origin"));
    assert!(response.headers().contains_key("access-control-allow-methods"));
}

#[tokio::test]
async fn test_unknown_endpoint_returns_404() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .uri("/receipts")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_config_validation() {
    let mut config = (*create_test_config()).clone();

    // Port 0 is fine for in-process tests but not for a real server
    assert!(config.validate().is_err());

    config.server.port = 8000;
    assert!(config.validate().is_ok());

    config.server.max_body_bytes = 0;
    assert!(config.validate().is_err());
}
