//! Content negotiation on the `Accept` header
//!
//! Two representations exist: plain JSON and the HATEOAS vendor type, which
//! adds navigation links to author resources. Any other requested media type
//! is answered with 406.

use crate::core::error::{ApiError, RequestError};
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Vendor media type asking for links in the response body
pub const HATEOAS_MEDIA_TYPE: &str = "application/vnd.courselibrary.hateoas+json";

pub const JSON_MEDIA_TYPE: &str = "application/json";

/// The representation chosen for a response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaType {
    #[default]
    Json,
    Hateoas,
}

impl MediaType {
    /// Value of the `Content-Type` header for this representation
    pub fn content_type(&self) -> &'static str {
        match self {
            MediaType::Json => JSON_MEDIA_TYPE,
            MediaType::Hateoas => HATEOAS_MEDIA_TYPE,
        }
    }

    pub fn includes_links(&self) -> bool {
        matches!(self, MediaType::Hateoas)
    }

    /// Serialize `body` as this representation
    pub fn respond<T: Serialize>(&self, status: StatusCode, body: &T) -> Result<Response, ApiError> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| ApiError::Internal(format!("Failed to serialize response: {}", e)))?;
        Ok((status, [(CONTENT_TYPE, self.content_type())], bytes).into_response())
    }

    fn from_essence(essence: &str) -> Option<Self> {
        match essence {
            "*/*" | "application/*" | JSON_MEDIA_TYPE => Some(MediaType::Json),
            HATEOAS_MEDIA_TYPE => Some(MediaType::Hateoas),
            _ => None,
        }
    }
}

/// Pick the representation for an `Accept` header
///
/// A missing or blank header means JSON. Media ranges are weighed by their
/// `q` parameter (ties go to the first listed); `q=0` excludes a range.
pub fn negotiate(accept: Option<&HeaderValue>) -> Result<MediaType, RequestError> {
    let Some(accept) = accept else {
        return Ok(MediaType::Json);
    };

    let value = accept.to_str().map_err(|_| RequestError::NotAcceptable {
        accept: String::from_utf8_lossy(accept.as_bytes()).into_owned(),
    })?;
    if value.trim().is_empty() {
        return Ok(MediaType::Json);
    }

    let mut best: Option<(f32, MediaType)> = None;
    for range in value.split(',') {
        let mut parts = range.split(';');
        let essence = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
        let quality = parts
            .filter_map(|param| param.trim().strip_prefix("q="))
            .find_map(|q| q.trim().parse::<f32>().ok())
            .unwrap_or(1.0);

        if quality <= 0.0 {
            continue;
        }
        let Some(media_type) = MediaType::from_essence(&essence) else {
            continue;
        };
        if best.is_none_or(|(best_quality, _)| quality > best_quality) {
            best = Some((quality, media_type));
        }
    }

    best.map(|(_, media_type)| media_type)
        .ok_or_else(|| RequestError::NotAcceptable {
            accept: value.to_string(),
        })
}

impl<S> FromRequestParts<S> for MediaType
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(negotiate(parts.headers.get(ACCEPT))?)
    }
}
