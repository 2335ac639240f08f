//! Item endpoints, including tag association and the category/tag
//! scoped listings.
//!
//! Route layout under `/v1/item`:
//! ```text
//! GET    /                       list items
//! POST   /                       create item
//! GET    /category/{category_id} list items in a category
//! GET    /tag/{tag_id}           list items carrying a tag
//! GET    /{item_id}              fetch item
//! PUT    /{item_id}              replace item
//! PATCH  /{item_id}              partial update
//! DELETE /{item_id}              delete item
//! GET    /{item_id}/tag          list item's tags
//! POST   /{item_id}/tag/{tag_id} link tag
//! DELETE /{item_id}/tag/{tag_id} unlink tag
//! ```
//! The static `/category` and `/tag` prefixes take priority over the
//! `/{item_id}` capture, so the scoped listings never collide with
//! single-item lookups.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;

use crb_core::{ItemCreateRequest, ItemPatchRequest, ItemUpdateRequest};

use crate::http::error::{ApiError, PageQuery};
use crate::services::{item, item_tag};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(read_items).post(create_item))
        .route("/category/{category_id}", get(read_items_by_category))
        .route("/tag/{tag_id}", get(read_items_by_tag))
        .route(
            "/{item_id}",
            get(read_item).put(update_item).patch(patch_item).delete(delete_item),
        )
        .route("/{item_id}/tag", get(read_item_tags))
        .route(
            "/{item_id}/tag/{tag_id}",
            post(add_tag_to_item).delete(delete_tag_from_item),
        )
}

async fn read_items(
    State(state): State<AppState>,
    PageQuery(pagination): PageQuery,
) -> Result<impl IntoResponse, ApiError> {
    let response = item::read_items(&state.db, pagination).await?;
    Ok(Json(response))
}

async fn read_items_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    PageQuery(pagination): PageQuery,
) -> Result<impl IntoResponse, ApiError> {
    let response = item::read_items_by_category(&state.db, &category_id, pagination).await?;
    Ok(Json(response))
}

async fn read_items_by_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
    PageQuery(pagination): PageQuery,
) -> Result<impl IntoResponse, ApiError> {
    let response = item::read_items_by_tag(&state.db, &tag_id, pagination).await?;
    Ok(Json(response))
}

async fn read_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let response = item::read_item(&state.db, &item_id).await?;
    Ok(Json(response))
}

async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<ItemCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = item::create_item(&state.db, body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(body): Json<ItemUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = item::update_item(&state.db, &item_id, body).await?;
    Ok(Json(response))
}

async fn patch_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(body): Json<ItemPatchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = item::patch_item(&state.db, &item_id, body).await?;
    Ok(Json(response))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let response = item::delete_item(&state.db, &item_id).await?;
    Ok(Json(response))
}

async fn read_item_tags(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let response = item_tag::read_item_tags(&state.db, &item_id).await?;
    Ok(Json(response))
}

async fn add_tag_to_item(
    State(state): State<AppState>,
    Path((item_id, tag_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let response = item_tag::add_tag_to_item(&state.db, &item_id, &tag_id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn delete_tag_from_item(
    State(state): State<AppState>,
    Path((item_id, tag_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let response = item_tag::delete_tag_from_item(&state.db, &item_id, &tag_id).await?;
    Ok(Json(response))
}
