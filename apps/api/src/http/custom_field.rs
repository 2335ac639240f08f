//! Custom field endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;

use crb_core::{
    NamedResourceCreateRequest, NamedResourcePatchRequest, NamedResourceUpdateRequest,
};

use crate::http::error::{ApiError, PageQuery};
use crate::services::custom_field;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(read_custom_fields).post(create_custom_field))
        .route(
            "/{custom_field_id}",
            get(read_custom_field)
                .put(update_custom_field)
                .patch(patch_custom_field)
                .delete(delete_custom_field),
        )
}

async fn read_custom_fields(
    State(state): State<AppState>,
    PageQuery(pagination): PageQuery,
) -> Result<impl IntoResponse, ApiError> {
    let response = custom_field::read_custom_fields(&state.db, pagination).await?;
    Ok(Json(response))
}

async fn read_custom_field(
    State(state): State<AppState>,
    Path(custom_field_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let response = custom_field::read_custom_field(&state.db, &custom_field_id).await?;
    Ok(Json(response))
}

async fn create_custom_field(
    State(state): State<AppState>,
    Json(body): Json<NamedResourceCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = custom_field::create_custom_field(&state.db, body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_custom_field(
    State(state): State<AppState>,
    Path(custom_field_id): Path<String>,
    Json(body): Json<NamedResourceUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = custom_field::update_custom_field(&state.db, &custom_field_id, body).await?;
    Ok(Json(response))
}

async fn patch_custom_field(
    State(state): State<AppState>,
    Path(custom_field_id): Path<String>,
    Json(body): Json<NamedResourcePatchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = custom_field::patch_custom_field(&state.db, &custom_field_id, body).await?;
    Ok(Json(response))
}

async fn delete_custom_field(
    State(state): State<AppState>,
    Path(custom_field_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let response = custom_field::delete_custom_field(&state.db, &custom_field_id).await?;
    Ok(Json(response))
}
