//! # HTTP Error Mapping
//!
//! Translates `DomainError` into the wire contract: a JSON envelope
//! with `exc`, `error_code`, `detail`, and the request `url`, plus an
//! `X-Error-Code` response header.
//!
//! The envelope needs the request path, which `IntoResponse` never
//! sees. `ApiError::into_response` therefore stashes a partially-built
//! envelope in the response extensions, and the `attach_error_context`
//! middleware finishes it once the path is known.

use axum::body::Body;
use axum::extract::{FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::http::{header::HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use crb_core::{DomainError, Pagination};

/// Header carrying the stable error code alongside the body envelope.
pub static X_ERROR_CODE: HeaderName = HeaderName::from_static("x-error-code");

/// Wire-format error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub exc: String,
    pub error_code: String,
    pub detail: String,
    pub url: String,
}

/// Transport-level wrapper around a domain error.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let DomainError::Internal(detail) = &self.0 {
            error!(%detail, "unhandled internal error");
        }

        let envelope = ErrorEnvelope {
            exc: self.0.kind().to_string(),
            error_code: self.0.error_code().to_string(),
            detail: self.0.to_string(),
            // Filled in by attach_error_context, which knows the path.
            url: String::new(),
        };

        let mut response = self.status_code().into_response();
        response.extensions_mut().insert(envelope);
        response
    }
}

/// Pagination query extractor whose rejection wears the error envelope.
///
/// The plain `Query<Pagination>` extractor rejects non-numeric values
/// with a bare text response; this wrapper maps that rejection into
/// `ValidationFailed` so every error leaves through the same envelope.
pub struct PageQuery(pub Pagination);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pagination) = Query::<Pagination>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError(DomainError::ValidationFailed {
                    field: "query".to_string(),
                    reason: rejection.body_text(),
                })
            })?;

        Ok(PageQuery(pagination))
    }
}

/// Middleware that finalizes error responses: fills the `url` field,
/// serializes the envelope body, and sets `X-Error-Code`.
pub async fn attach_error_context(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;

    let Some(mut envelope) = response.extensions_mut().remove::<ErrorEnvelope>() else {
        return response;
    };
    envelope.url = path;

    if let Ok(code) = HeaderValue::from_str(&envelope.error_code) {
        response.headers_mut().insert(X_ERROR_CODE.clone(), code);
    }
    response.headers_mut().insert(
        axum::http::header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    // Stale length from the pre-envelope body must not win.
    response
        .headers_mut()
        .remove(axum::http::header::CONTENT_LENGTH);

    let body = serde_json::to_vec(&envelope).unwrap_or_default();
    *response.body_mut() = Body::from(body);
    response
}
