//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use kv_gateway::{api::create_router, AppState};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::in_memory())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send_json(app: &Router, method: &str, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == GET /api/v1/:key ==

#[tokio::test]
async fn test_add_then_get() {
    let app = create_test_app();

    let (status, json) =
        send_json(&app, "POST", "/api/v1/add-key", r#"{"key":"a","value":"1"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"code": 200, "data": {"key": "a", "value": "1"}}));

    let (status, json) = get(&app, "/api/v1/a").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"value": "1"}));
}

#[tokio::test]
async fn test_get_never_written() {
    let app = create_test_app();

    let (status, json) = get(&app, "/api/v1/nonexistent_key").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        json!({"code": 404, "message": "The key nonexistent_key was not found maybe it has expired."})
    );
}

#[tokio::test]
async fn test_expired_key_not_found() {
    let app = create_test_app();

    let (status, json) = send_json(
        &app,
        "POST",
        "/api/v1/add-key",
        r#"{"key":"a","value":"1","expiresIn":1}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["expiresIn"], 1);

    let (status, _) = get(&app, "/api/v1/a").await;
    assert_eq!(status, StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    let (status, json) = get(&app, "/api/v1/a").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        json!({"code": 404, "message": "The key a was not found maybe it has expired."})
    );
}

// == POST /api/v1/add-key ==

#[tokio::test]
async fn test_add_key_overwrites() {
    let app = create_test_app();

    send_json(&app, "POST", "/api/v1/add-key", r#"{"key":"a","value":"1"}"#).await;
    send_json(&app, "POST", "/api/v1/add-key", r#"{"key":"a","value":"2"}"#).await;

    let (_, json) = get(&app, "/api/v1/a").await;
    assert_eq!(json["value"], "2");
}

#[tokio::test]
async fn test_add_key_not_json() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/add-key")
                .header("content-type", "text/plain")
                .body(Body::from("key=a&value=1"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, json!({"code": 500, "message": "Only json data is required."}));
}

#[tokio::test]
async fn test_add_key_wrong_shape() {
    let app = create_test_app();

    let (status, json) = send_json(&app, "POST", "/api/v1/add-key", r#"{"key":"a"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 400);
    assert!(json["message"].as_str().unwrap().contains("value"));
}

#[tokio::test]
async fn test_add_key_empty_key() {
    let app = create_test_app();

    let (status, json) =
        send_json(&app, "POST", "/api/v1/add-key", r#"{"key":"","value":"1"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Key cannot be empty");
}

// == PUT|PATCH /api/v1/update ==

#[tokio::test]
async fn test_update_absent_key() {
    let app = create_test_app();

    let (status, json) =
        send_json(&app, "PUT", "/api/v1/update", r#"{"key":"ghost","value":"1"}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], 404);

    let (status, _) = get(&app, "/api/v1/ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_put_and_patch() {
    let app = create_test_app();
    send_json(&app, "POST", "/api/v1/add-key", r#"{"key":"a","value":"1"}"#).await;

    let (status, json) =
        send_json(&app, "PUT", "/api/v1/update", r#"{"key":"a","value":"2"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"code": 200, "data": {"key": "a", "value": "2"}}));

    let (status, _) = send_json(
        &app,
        "PATCH",
        "/api/v1/update",
        r#"{"key":"a","value":"3","expiresIn":60}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = get(&app, "/api/v1/a").await;
    assert_eq!(json["value"], "3");
}

#[tokio::test]
async fn test_update_malformed_body() {
    let app = create_test_app();

    let (status, json) = send_json(&app, "PUT", "/api/v1/update", r#"{"invalid json"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"code": 500, "message": "Only json data is required."}));
}

// == DELETE /api/v1/delete ==

#[tokio::test]
async fn test_delete_present_key() {
    let app = create_test_app();
    send_json(&app, "POST", "/api/v1/add-key", r#"{"key":"a","value":"1"}"#).await;

    let (status, json) = send_json(&app, "DELETE", "/api/v1/delete", r#"{"key":"a"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"a": "deleted"}));

    let (status, _) = get(&app, "/api/v1/a").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_absent_key_repeatedly() {
    let app = create_test_app();

    for _ in 0..3 {
        let (status, json) =
            send_json(&app, "DELETE", "/api/v1/delete", r#"{"key":"ghost"}"#).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            json["message"],
            "The key ghost was not found maybe it has expired."
        );
    }
}

// == Method Mismatch ==

#[tokio::test]
async fn test_method_mismatch_body() {
    let app = create_test_app();

    let (status, json) = send_json(&app, "POST", "/api/v1/update", r#"{}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"code": 400, "message": "Only PUT or PATCH Methods"}));
}

// == Metadata & Health ==

#[tokio::test]
async fn test_meta_endpoint() {
    let app = create_test_app();

    let (status, json) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["language"], "rust");
    assert!(json.get("programmer").is_some());
    assert!(json.get("description").is_some());
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
