//! Category endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;

use crb_core::{
    NamedResourceCreateRequest, NamedResourcePatchRequest, NamedResourceUpdateRequest,
};

use crate::http::error::{ApiError, PageQuery};
use crate::services::category;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(read_categories).post(create_category))
        .route(
            "/{category_id}",
            get(read_category)
                .put(update_category)
                .patch(patch_category)
                .delete(delete_category),
        )
}

async fn read_categories(
    State(state): State<AppState>,
    PageQuery(pagination): PageQuery,
) -> Result<impl IntoResponse, ApiError> {
    let response = category::read_categories(&state.db, pagination).await?;
    Ok(Json(response))
}

async fn read_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let response = category::read_category(&state.db, &category_id).await?;
    Ok(Json(response))
}

async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<NamedResourceCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = category::create_category(&state.db, body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Json(body): Json<NamedResourceUpdateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = category::update_category(&state.db, &category_id, body).await?;
    Ok(Json(response))
}

async fn patch_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
    Json(body): Json<NamedResourcePatchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = category::patch_category(&state.db, &category_id, body).await?;
    Ok(Json(response))
}

async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let response = category::delete_category(&state.db, &category_id).await?;
    Ok(Json(response))
}
