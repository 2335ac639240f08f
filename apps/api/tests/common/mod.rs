//! Shared harness for the integration tests.
//!
//! Each test builds the full router over a fresh in-memory database
//! and drives it in-process with `tower::ServiceExt::oneshot`; no
//! sockets are bound.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use crb_api::{http, AppState};
use crb_db::{Database, DbConfig};

pub async fn test_app() -> Router {
    let db = Database::new(DbConfig::in_memory())
        .await
        .expect("in-memory database");
    http::router(AppState::new(db))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestResponse {
    /// Value of the `X-Error-Code` header, if present.
    pub fn error_code(&self) -> Option<&str> {
        self.headers
            .get("x-error-code")
            .and_then(|v| v.to_str().ok())
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    TestResponse {
        status,
        headers,
        json,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, "POST", uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, "PUT", uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, "PATCH", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, "DELETE", uri, None).await
}

/// Creates a category through the API and returns its id.
pub async fn create_category(app: &Router, name: &str) -> String {
    let response = post(app, "/v1/category", json!({ "name": name })).await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.json);
    response.json["result"]["id"]
        .as_str()
        .expect("category id")
        .to_string()
}

/// Creates a tag through the API and returns its id.
pub async fn create_tag(app: &Router, name: &str) -> String {
    let response = post(app, "/v1/tag", json!({ "name": name })).await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.json);
    response.json["result"]["id"]
        .as_str()
        .expect("tag id")
        .to_string()
}

/// Creates an item in the given category and returns its id.
pub async fn create_item(app: &Router, name: &str, category_id: &str) -> String {
    let response = post(
        app,
        "/v1/item",
        json!({ "name": name, "category_id": category_id }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.json);
    response.json["result"]["id"]
        .as_str()
        .expect("item id")
        .to_string()
}

/// Asserts the standard error envelope shape.
pub fn assert_error_envelope(
    response: &TestResponse,
    status: StatusCode,
    exc: &str,
    error_code: &str,
    url: &str,
) {
    assert_eq!(response.status, status, "{:?}", response.json);
    assert_eq!(response.json["exc"], exc);
    assert_eq!(response.json["error_code"], error_code);
    assert_eq!(response.json["url"], url);
    assert_eq!(response.error_code(), Some(error_code));
}
