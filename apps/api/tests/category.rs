//! Category endpoint integration tests.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::*;

#[tokio::test]
async fn list_is_empty_on_fresh_database() {
    let app = test_app().await;

    let response = get(&app, "/v1/category").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["result"], json!([]));
    assert_eq!(response.json["total"], 0);
    assert_eq!(response.json["page"], 1);
    assert_eq!(response.json["page_size"], 10);
}

#[tokio::test]
async fn list_returns_seeded_categories() {
    let app = test_app().await;
    for i in 0..6 {
        create_category(&app, &format!("Category {i}")).await;
    }

    let response = get(&app, "/v1/category").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["total"], 6);
    assert_eq!(response.json["result"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn list_paginates_newest_first() {
    let app = test_app().await;
    for i in 0..25 {
        create_category(&app, &format!("Category {i:02}")).await;
    }

    // Last page holds the remainder.
    let response = get(&app, "/v1/category?page=2&page_size=20").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["total"], 25);
    assert_eq!(response.json["page"], 2);
    assert_eq!(response.json["result"].as_array().unwrap().len(), 5);

    // Canonical order is id-descending.
    let first_page = get(&app, "/v1/category?page=1&page_size=10").await;
    let ids: Vec<&str> = first_page.json["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn list_clamps_out_of_range_pagination() {
    let app = test_app().await;
    create_category(&app, "Only").await;

    let response = get(&app, "/v1/category?page=0&page_size=500").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["page"], 1);
    assert_eq!(response.json["page_size"], 100);
    assert_eq!(response.json["total"], 1);
}

#[tokio::test]
async fn list_rejects_non_numeric_pagination_with_envelope() {
    let app = test_app().await;

    let response = get(&app, "/v1/category?page=abc").await;
    assert_error_envelope(
        &response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "ValidationFailed",
        "010",
        "/v1/category",
    );
}

#[tokio::test]
async fn create_returns_generated_fields() {
    let app = test_app().await;

    let response = post(
        &app,
        "/v1/category",
        json!({ "name": "Electronics", "description": "Gadgets" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let result = &response.json["result"];
    assert_eq!(result["name"], "Electronics");
    assert_eq!(result["description"], "Gadgets");
    assert_eq!(result["is_active"], true);
    assert!(Uuid::parse_str(result["id"].as_str().unwrap()).is_ok());
    assert!(result["created_at"].is_string());
    assert!(result["updated_at"].is_string());
}

#[tokio::test]
async fn create_rejects_duplicate_name() {
    let app = test_app().await;
    create_category(&app, "Electronics").await;

    let response = post(&app, "/v1/category", json!({ "name": "Electronics" })).await;
    assert_error_envelope(
        &response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "CategoryNameAlreadyExists",
        "003",
        "/v1/category",
    );
    assert_eq!(response.json["detail"], "Category name already exists.");
}

#[tokio::test]
async fn create_rejects_blank_name() {
    let app = test_app().await;

    let response = post(&app, "/v1/category", json!({ "name": "   " })).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json["exc"], "ValidationFailed");
    assert_eq!(response.json["error_code"], "010");
}

#[tokio::test]
async fn read_rejects_malformed_id() {
    let app = test_app().await;

    let response = get(&app, "/v1/category/not-a-uuid").await;
    assert_error_envelope(
        &response,
        StatusCode::BAD_REQUEST,
        "InvalidId",
        "002",
        "/v1/category/not-a-uuid",
    );
    assert_eq!(
        response.json["detail"],
        "Invalid id. Received: not-a-uuid. Expected: A valid UUID."
    );
}

#[tokio::test]
async fn read_unknown_id_is_not_found() {
    let app = test_app().await;
    let missing = Uuid::now_v7();

    let response = get(&app, &format!("/v1/category/{missing}")).await;
    assert_error_envelope(
        &response,
        StatusCode::NOT_FOUND,
        "ResourceNotFound",
        "001",
        &format!("/v1/category/{missing}"),
    );
    assert_eq!(response.json["detail"], "Category not found.");
}

#[tokio::test]
async fn read_round_trips_created_category() {
    let app = test_app().await;
    let id = create_category(&app, "Electronics").await;

    let response = get(&app, &format!("/v1/category/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["result"]["id"], id.as_str());
    assert_eq!(response.json["result"]["name"], "Electronics");
}

#[tokio::test]
async fn update_replaces_all_fields() {
    let app = test_app().await;
    let id = create_category(&app, "Electronics").await;

    let response = put(
        &app,
        &format!("/v1/category/{id}"),
        json!({ "name": "Hardware", "description": "Renamed", "is_active": false }),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let result = &response.json["result"];
    assert_eq!(result["name"], "Hardware");
    assert_eq!(result["description"], "Renamed");
    assert_eq!(result["is_active"], false);

    // Updates move updated_at past created_at.
    let created_at: chrono::DateTime<chrono::Utc> =
        result["created_at"].as_str().unwrap().parse().unwrap();
    let updated_at: chrono::DateTime<chrono::Utc> =
        result["updated_at"].as_str().unwrap().parse().unwrap();
    assert!(updated_at > created_at);
}

#[tokio::test]
async fn update_keeping_own_name_is_not_a_conflict() {
    let app = test_app().await;
    let id = create_category(&app, "Electronics").await;

    let response = put(
        &app,
        &format!("/v1/category/{id}"),
        json!({ "name": "Electronics", "description": "Same name", "is_active": true }),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.json);
    assert_eq!(response.json["result"]["description"], "Same name");
}

#[tokio::test]
async fn update_rejects_name_of_another_category() {
    let app = test_app().await;
    create_category(&app, "Electronics").await;
    let id = create_category(&app, "Hardware").await;

    let response = put(
        &app,
        &format!("/v1/category/{id}"),
        json!({ "name": "Electronics", "description": null, "is_active": true }),
    )
    .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json["error_code"], "003");
}

#[tokio::test]
async fn patch_changes_only_present_fields() {
    let app = test_app().await;
    let id = create_category(&app, "Electronics").await;

    let response = patch(
        &app,
        &format!("/v1/category/{id}"),
        json!({ "description": "Patched" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["result"]["name"], "Electronics");
    assert_eq!(response.json["result"]["description"], "Patched");
    assert_eq!(response.json["result"]["is_active"], true);
}

#[tokio::test]
async fn deactivated_category_is_hidden_from_list_but_fetchable() {
    let app = test_app().await;
    create_category(&app, "Electronics").await;
    let id = create_category(&app, "Discontinued").await;

    let response = patch(
        &app,
        &format!("/v1/category/{id}"),
        json!({ "is_active": false }),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    // Gone from the default listing, total included.
    let listing = get(&app, "/v1/category").await;
    assert_eq!(listing.json["total"], 1);
    for category in listing.json["result"].as_array().unwrap() {
        assert_ne!(category["id"], id.as_str());
    }

    // Direct lookup still works.
    let lookup = get(&app, &format!("/v1/category/{id}")).await;
    assert_eq!(lookup.status, StatusCode::OK);
    assert_eq!(lookup.json["result"]["is_active"], false);
}

#[tokio::test]
async fn delete_returns_acknowledgment_and_removes() {
    let app = test_app().await;
    let id = create_category(&app, "Electronics").await;

    let response = delete(&app, &format!("/v1/category/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["message"], "Resource deleted successfully.");
    assert_eq!(response.json["id"], id.as_str());
    assert_eq!(response.json["resource"], "category");

    let lookup = get(&app, &format!("/v1/category/{id}")).await;
    assert_eq!(lookup.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_refused_while_items_reference_the_category() {
    let app = test_app().await;
    let category_id = create_category(&app, "Electronics").await;
    create_item(&app, "Keyboard", &category_id).await;

    let response = delete(&app, &format!("/v1/category/{category_id}")).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.json["exc"], "CategoryHasItems");
    assert_eq!(response.json["error_code"], "009");

    // Still present.
    let lookup = get(&app, &format!("/v1/category/{category_id}")).await;
    assert_eq!(lookup.status, StatusCode::OK);
}
