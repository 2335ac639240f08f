//! Tag endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;

use crb_core::{
    NamedResourceCreateRequest, NamedResourcePatchRequest, NamedResourceUpdateRequest,
};

use crate::http::error::{ApiError, PageQuery};
use crate::services::tag;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(read_tags).post(create_tag))
        .route(
            "/{tag_id}",
            get(read_tag).put(update_tag).patch(patch_tag).delete(delete_tag),
        )
}

async fn read_tags(
    State(state): State<AppState>,
    PageQuery(pagination): PageQuery,
) -> Result<impl IntoResponse, ApiError> {
    let response = tag::read_tags(&state.db, pagination).await?;
    Ok(Json(response))
}

async fn read_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let response = tag::read_tag(&state.db, &tag_id).await?;
    Ok(Json(response))
}

async fn create_tag(
    State(state): State<AppState>,
    Json(body): Json<NamedResourceCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = tag::create_tag(&state.db, body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
    Json(body): Json<NamedResourceUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = tag::update_tag(&state.db, &tag_id, body).await?;
    Ok(Json(response))
}

async fn patch_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
    Json(body): Json<NamedResourcePatchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = tag::patch_tag(&state.db, &tag_id, body).await?;
    Ok(Json(response))
}

async fn delete_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let response = tag::delete_tag(&state.db, &tag_id).await?;
    Ok(Json(response))
}
