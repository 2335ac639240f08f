//! # HTTP Surface
//!
//! Router assembly for the inventory API.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         Router Layout                            │
//! │                                                                  │
//! │  /                  GET  api info                                │
//! │  /health            GET  liveness + database ping                │
//! │  /v1                GET  v1 info                                 │
//! │  /v1/category/...        category CRUD                           │
//! │  /v1/tag/...             tag CRUD                                │
//! │  /v1/custom_field/...    custom field CRUD                       │
//! │  /v1/item/...            item CRUD + tag association + listings  │
//! │                                                                  │
//! │  attach_error_context wraps everything: it finalizes error       │
//! │  envelopes with the request path and the X-Error-Code header.    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

pub mod category;
pub mod custom_field;
pub mod error;
pub mod item;
pub mod tag;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::{middleware, Router};
use serde_json::json;

use crate::state::AppState;

pub const API_NAME: &str = "CRB Inventory API";
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const API_VERSION_V1: &str = "1.0.0";

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let v1 = Router::new()
        .route("/", get(v1_root))
        .nest("/category", category::router())
        .nest("/tag", tag::router())
        .nest("/custom_field", custom_field::router())
        .nest("/item", item::router());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/v1", v1)
        .layer(middleware::from_fn(error::attach_error_context))
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "api_name": API_NAME,
        "version": API_VERSION,
    }))
}

async fn v1_root() -> impl IntoResponse {
    Json(json!({
        "api_name": API_NAME,
        "version": API_VERSION_V1,
    }))
}

/// Liveness endpoint: verifies the database answers a trivial query
/// and reports migration state.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    if !state.db.health_check().await {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        );
    }

    match state.db.migration_status().await {
        Ok((embedded, applied)) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "migrations": { "embedded": embedded, "applied": applied },
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        ),
    }
}
