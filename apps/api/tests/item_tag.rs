//! Item-tag association integration tests.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::*;

async fn setup_item_and_tag(app: &axum::Router) -> (String, String) {
    let category_id = create_category(app, "Electronics").await;
    let item_id = create_item(app, "Keyboard", &category_id).await;
    let tag_id = create_tag(app, "fragile").await;
    (item_id, tag_id)
}

#[tokio::test]
async fn add_links_tag_to_item() {
    let app = test_app().await;
    let (item_id, tag_id) = setup_item_and_tag(&app).await;

    let response = post(&app, &format!("/v1/item/{item_id}/tag/{tag_id}"), json!({})).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json["message"], "Tag added to item successfully.");
    assert_eq!(response.json["item_id"], item_id.as_str());
    assert_eq!(response.json["tag_id"], tag_id.as_str());
}

#[tokio::test]
async fn add_rejects_existing_association() {
    let app = test_app().await;
    let (item_id, tag_id) = setup_item_and_tag(&app).await;

    let uri = format!("/v1/item/{item_id}/tag/{tag_id}");
    post(&app, &uri, json!({})).await;

    let response = post(&app, &uri, json!({})).await;
    assert_error_envelope(
        &response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "TagAlreadyAssociatedWithItem",
        "041",
        &uri,
    );
}

#[tokio::test]
async fn add_rejects_unknown_item_or_tag() {
    let app = test_app().await;
    let (item_id, tag_id) = setup_item_and_tag(&app).await;
    let missing = Uuid::now_v7();

    let response = post(&app, &format!("/v1/item/{missing}/tag/{tag_id}"), json!({})).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json["detail"], "Item not found.");

    let response = post(&app, &format!("/v1/item/{item_id}/tag/{missing}"), json!({})).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json["detail"], "Tag not found.");
}

#[tokio::test]
async fn list_returns_linked_tags() {
    let app = test_app().await;
    let category_id = create_category(&app, "Electronics").await;
    let item_id = create_item(&app, "Keyboard", &category_id).await;
    let fragile = create_tag(&app, "fragile").await;
    let heavy = create_tag(&app, "heavy").await;
    create_tag(&app, "unlinked").await;

    post(&app, &format!("/v1/item/{item_id}/tag/{fragile}"), json!({})).await;
    post(&app, &format!("/v1/item/{item_id}/tag/{heavy}"), json!({})).await;

    let response = get(&app, &format!("/v1/item/{item_id}/tag")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["total"], 2);

    let names: Vec<&str> = response.json["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"fragile"));
    assert!(names.contains(&"heavy"));
}

#[tokio::test]
async fn list_is_empty_without_associations() {
    let app = test_app().await;
    let category_id = create_category(&app, "Electronics").await;
    let item_id = create_item(&app, "Keyboard", &category_id).await;

    let response = get(&app, &format!("/v1/item/{item_id}/tag")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["total"], 0);
    assert_eq!(response.json["result"], json!([]));
}

#[tokio::test]
async fn delete_unlinks_tag() {
    let app = test_app().await;
    let (item_id, tag_id) = setup_item_and_tag(&app).await;
    let uri = format!("/v1/item/{item_id}/tag/{tag_id}");
    post(&app, &uri, json!({})).await;

    let response = delete(&app, &uri).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["message"], "Tag removed from item successfully.");

    let tags = get(&app, &format!("/v1/item/{item_id}/tag")).await;
    assert_eq!(tags.json["total"], 0);

    // The tag itself survives.
    let tag = get(&app, &format!("/v1/tag/{tag_id}")).await;
    assert_eq!(tag.status, StatusCode::OK);
}

#[tokio::test]
async fn delete_rejects_absent_association() {
    let app = test_app().await;
    let (item_id, tag_id) = setup_item_and_tag(&app).await;
    let uri = format!("/v1/item/{item_id}/tag/{tag_id}");

    let response = delete(&app, &uri).await;
    assert_error_envelope(
        &response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "TagNotAssociatedWithItem",
        "040",
        &uri,
    );
}

#[tokio::test]
async fn deleting_tag_cascades_association() {
    let app = test_app().await;
    let (item_id, tag_id) = setup_item_and_tag(&app).await;
    post(&app, &format!("/v1/item/{item_id}/tag/{tag_id}"), json!({})).await;

    let response = delete(&app, &format!("/v1/tag/{tag_id}")).await;
    assert_eq!(response.status, StatusCode::OK);

    let tags = get(&app, &format!("/v1/item/{item_id}/tag")).await;
    assert_eq!(tags.status, StatusCode::OK);
    assert_eq!(tags.json["total"], 0);
}

#[tokio::test]
async fn deleting_item_cascades_association() {
    let app = test_app().await;
    let (item_id, tag_id) = setup_item_and_tag(&app).await;
    post(&app, &format!("/v1/item/{item_id}/tag/{tag_id}"), json!({})).await;

    let response = delete(&app, &format!("/v1/item/{item_id}")).await;
    assert_eq!(response.status, StatusCode::OK);

    // Listing items by the tag finds nothing.
    let items = get(&app, &format!("/v1/item/tag/{tag_id}")).await;
    assert_eq!(items.json["total"], 0);
}
