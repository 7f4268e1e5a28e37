//! HTTP handlers for creating and fetching several authors at once

use crate::core::error::{ApiError, ApiResult, RequestError, ResourceError};
use crate::core::hypermedia::{BaseUrl, with_location};
use crate::core::negotiation::MediaType;
use crate::core::validation::ValidatedJson;
use crate::entities::author::{AuthorCollectionForCreation, AuthorDto};
use crate::server::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

fn id_list_regex() -> Option<&'static Regex> {
    static ID_LIST_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    ID_LIST_REGEX
        .get_or_init(|| Regex::new(r"^\s*(?:\(([^()]*)\)|([^()]*))\s*$").ok())
        .as_ref()
}

/// Parse `(id1,id2,...)`; the parentheses are optional
pub fn parse_id_list(value: &str) -> ApiResult<Vec<Uuid>> {
    let regex = id_list_regex()
        .ok_or_else(|| ApiError::Internal("Invalid identifier list pattern".to_string()))?;
    let invalid = || RequestError::InvalidIdList {
        value: value.to_string(),
    };

    let captures = regex.captures(value).ok_or_else(invalid)?;
    let inner = captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())
        .unwrap_or_default();

    if inner.trim().is_empty() {
        return Err(invalid().into());
    }

    inner
        .split(',')
        .map(|id| Uuid::parse_str(id.trim()).map_err(|_| ApiError::from(invalid())))
        .collect()
}

/// POST /api/authorcollections
pub async fn create_author_collection(
    State(state): State<AppState>,
    media_type: MediaType,
    base: BaseUrl,
    ValidatedJson(payload): ValidatedJson<AuthorCollectionForCreation>,
) -> ApiResult<Response> {
    let mut created = Vec::with_capacity(payload.authors.len());
    for author in payload.authors {
        let (author, courses) = author.into_entities();
        let author = state.repository.add_author(author, courses).await?;
        created.push(AuthorDto::from(&author));
    }

    let ids: Vec<Uuid> = created.iter().map(|author| author.id).collect();
    tracing::info!(count = ids.len(), "created author collection");

    let response = media_type.respond(StatusCode::CREATED, &created)?;
    with_location(response, &base.author_collection(&ids))
}

/// GET /api/authorcollections/({ids})
pub async fn get_author_collection(
    State(state): State<AppState>,
    media_type: MediaType,
    Path(ids): Path<String>,
) -> ApiResult<Response> {
    let ids = parse_id_list(&ids)?;

    let authors = state.repository.get_authors_by_ids(&ids).await?;
    if authors.len() != ids.len() {
        let missing = ids
            .iter()
            .filter(|id| !authors.iter().any(|author| &author.id == *id))
            .copied()
            .collect();
        return Err(ResourceError::CollectionIncomplete {
            resource_type: "author".to_string(),
            missing,
        }
        .into());
    }

    let authors: Vec<AuthorDto> = authors.iter().map(AuthorDto::from).collect();
    media_type.respond(StatusCode::OK, &authors)
}
