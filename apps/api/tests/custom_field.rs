//! Custom field endpoint integration tests.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::*;

async fn create_custom_field(app: &axum::Router, name: &str) -> String {
    let response = post(app, "/v1/custom_field", json!({ "name": name })).await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.json);
    response.json["result"]["id"]
        .as_str()
        .expect("custom field id")
        .to_string()
}

#[tokio::test]
async fn create_accepts_underscored_lowercase_name() {
    let app = test_app().await;

    let response = post(
        &app,
        "/v1/custom_field",
        json!({ "name": "serial_number", "description": "Manufacturer serial" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json["result"]["name"], "serial_number");
    assert_eq!(response.json["result"]["is_active"], true);
}

#[tokio::test]
async fn create_rejects_invalid_name_format() {
    let app = test_app().await;

    for name in ["serial-number", "Serial_Number", "double__underscore", "_leading"] {
        let response = post(&app, "/v1/custom_field", json!({ "name": name })).await;
        assert_eq!(
            response.status,
            StatusCode::UNPROCESSABLE_ENTITY,
            "name {name:?} should be rejected"
        );
        assert_eq!(response.json["exc"], "InvalidCustomFieldName");
        assert_eq!(response.json["error_code"], "008");
    }
}

#[tokio::test]
async fn create_rejects_overlong_name() {
    let app = test_app().await;
    let name = "a".repeat(31);

    let response = post(&app, "/v1/custom_field", json!({ "name": name })).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json["error_code"], "008");
    assert!(response.json["detail"]
        .as_str()
        .unwrap()
        .contains("max length of 30 characters"));
}

#[tokio::test]
async fn create_rejects_duplicate_name() {
    let app = test_app().await;
    create_custom_field(&app, "serial_number").await;

    let response = post(&app, "/v1/custom_field", json!({ "name": "serial_number" })).await;
    assert_error_envelope(
        &response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "CustomFieldNameAlreadyExists",
        "006",
        "/v1/custom_field",
    );
}

#[tokio::test]
async fn list_returns_seeded_custom_fields() {
    let app = test_app().await;
    for i in 0..6 {
        create_custom_field(&app, &format!("field_{i}")).await;
    }

    let response = get(&app, "/v1/custom_field").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["total"], 6);
    assert_eq!(response.json["result"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn read_unknown_id_is_not_found() {
    let app = test_app().await;
    let missing = Uuid::now_v7();

    let response = get(&app, &format!("/v1/custom_field/{missing}")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json["detail"], "Custom field not found.");
}

#[tokio::test]
async fn update_keeping_own_name_is_not_a_conflict() {
    let app = test_app().await;
    let id = create_custom_field(&app, "serial_number").await;

    let response = put(
        &app,
        &format!("/v1/custom_field/{id}"),
        json!({ "name": "serial_number", "description": "Unchanged name", "is_active": false }),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.json);
    assert_eq!(response.json["result"]["is_active"], false);
}

#[tokio::test]
async fn patch_changes_only_present_fields() {
    let app = test_app().await;
    let id = create_custom_field(&app, "serial_number").await;

    let response = patch(
        &app,
        &format!("/v1/custom_field/{id}"),
        json!({ "description": "Patched" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["result"]["name"], "serial_number");
    assert_eq!(response.json["result"]["description"], "Patched");
}

#[tokio::test]
async fn deactivated_custom_field_is_hidden_from_list_but_fetchable() {
    let app = test_app().await;
    create_custom_field(&app, "serial_number").await;
    let id = create_custom_field(&app, "legacy_code").await;

    let response = patch(
        &app,
        &format!("/v1/custom_field/{id}"),
        json!({ "is_active": false }),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let listing = get(&app, "/v1/custom_field").await;
    assert_eq!(listing.json["total"], 1);
    for field in listing.json["result"].as_array().unwrap() {
        assert_ne!(field["id"], id.as_str());
    }

    let lookup = get(&app, &format!("/v1/custom_field/{id}")).await;
    assert_eq!(lookup.status, StatusCode::OK);
    assert_eq!(lookup.json["result"]["is_active"], false);
}

#[tokio::test]
async fn delete_returns_acknowledgment_and_removes() {
    let app = test_app().await;
    let id = create_custom_field(&app, "serial_number").await;

    let response = delete(&app, &format!("/v1/custom_field/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["resource"], "custom_field");

    let lookup = get(&app, &format!("/v1/custom_field/{id}")).await;
    assert_eq!(lookup.status, StatusCode::NOT_FOUND);
}
