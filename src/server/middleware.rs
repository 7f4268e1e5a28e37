//! Request and response middleware for the REST exposure

use crate::config::CacheConfig;
use crate::core::error::ApiError;
use crate::core::negotiation::negotiate;
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT, CACHE_CONTROL, HeaderValue};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Answer 406 before routing when no representation matches `Accept`
pub async fn reject_unacceptable(request: Request, next: Next) -> Response {
    if let Err(e) = negotiate(request.headers().get(ACCEPT)) {
        return ApiError::from(e).into_response();
    }
    next.run(request).await
}

/// Mark successful reads as cacheable
///
/// Only `GET`/`HEAD` responses with a success status get a `Cache-Control`
/// header, and only when the handler did not set one itself.
pub async fn cache_headers(
    State(cache): State<CacheConfig>,
    request: Request,
    next: Next,
) -> Response {
    let cacheable = matches!(*request.method(), Method::GET | Method::HEAD);
    let mut response = next.run(request).await;

    if cacheable
        && response.status().is_success()
        && !response.headers().contains_key(CACHE_CONTROL)
    {
        match HeaderValue::from_str(&cache.cache_control()) {
            Ok(value) => {
                response.headers_mut().insert(CACHE_CONTROL, value);
            }
            Err(e) => tracing::warn!(error = %e, "invalid cache-control value"),
        }
    }

    response
}
