//! HTTP handlers for the authors resource

use super::dto::{AuthorDto, AuthorForCreationDto};
use super::model::Author;
use crate::core::error::{ApiError, ApiResult, ResourceError};
use crate::core::hypermedia::{
    BaseUrl, LinkedCollection, ResourceUriType, WithLinks, author_links, authors_links,
    authors_resource_uri, with_location,
};
use crate::core::negotiation::MediaType;
use crate::core::query::{
    AuthorsQuery, AuthorsResourceParameters, PaginationMetadata, ResourceQuery, ShapingParameters,
    parse_id,
};
use crate::core::shaping::{check_fields, shape_all, shape_data};
use crate::core::validation::ValidatedJson;
use crate::server::state::AppState;
use axum::extract::{Path, State};
use axum::http::header::{ALLOW, HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Header carrying the paging metadata of the authors collection
pub const PAGINATION_HEADER: HeaderName = HeaderName::from_static("x-pagination");

/// Methods supported on `/api/authors`
pub const AUTHORS_ALLOW: &str = "GET,OPTIONS,POST";

/// GET /api/authors
pub async fn list_authors(
    State(state): State<AppState>,
    media_type: MediaType,
    base: BaseUrl,
    ResourceQuery(params): ResourceQuery<AuthorsResourceParameters>,
) -> ApiResult<Response> {
    let sort = state
        .property_mappings
        .resolve_sort::<AuthorDto, Author>(Some(&params.order_by))?;
    check_fields::<AuthorDto>(params.fields())?;

    let (default_page_size, max_page_size) = state.page_limits();
    let page_size = params.page_size(default_page_size, max_page_size);
    let query = AuthorsQuery {
        main_category: params.main_category().map(str::to_string),
        search_query: params.search_query().map(str::to_string),
        page_number: params.page_number(),
        page_size,
        sort,
    };

    let page = state.repository.get_authors(&query).await?;
    tracing::debug!(
        total = page.total_count,
        page = page.current_page,
        "listed authors"
    );

    let mut metadata = PaginationMetadata::from_page(&page);
    if !media_type.includes_links() {
        let previous = page.has_previous().then(|| {
            authors_resource_uri(&base, &params, page_size, ResourceUriType::PreviousPage)
        });
        let next = page
            .has_next()
            .then(|| authors_resource_uri(&base, &params, page_size, ResourceUriType::NextPage));
        metadata = metadata.with_links(previous, next);
    }

    let authors: Vec<AuthorDto> = page.items.iter().map(AuthorDto::from).collect();
    let shaped = shape_all(&authors, params.fields())?;

    let mut response = if media_type.includes_links() {
        let value: Vec<_> = shaped
            .into_iter()
            .zip(&authors)
            .map(|(resource, author)| WithLinks {
                resource,
                links: author_links(&base, author.id, params.fields()),
            })
            .collect();
        let body = LinkedCollection {
            value,
            links: authors_links(
                &base,
                &params,
                page_size,
                page.has_previous(),
                page.has_next(),
            ),
        };
        media_type.respond(StatusCode::OK, &body)?
    } else {
        media_type.respond(StatusCode::OK, &shaped)?
    };

    let metadata = serde_json::to_string(&metadata)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize paging metadata: {}", e)))?;
    let metadata = HeaderValue::from_str(&metadata)
        .map_err(|e| ApiError::Internal(format!("Invalid paging metadata header: {}", e)))?;
    response.headers_mut().insert(PAGINATION_HEADER, metadata);

    Ok(response)
}

/// GET /api/authors/{author_id}
pub async fn get_author(
    State(state): State<AppState>,
    media_type: MediaType,
    base: BaseUrl,
    Path(author_id): Path<String>,
    ResourceQuery(params): ResourceQuery<ShapingParameters>,
) -> ApiResult<Response> {
    let author_id = parse_id(&author_id)?;
    check_fields::<AuthorDto>(params.fields())?;

    let author = state
        .repository
        .get_author(&author_id)
        .await?
        .ok_or_else(|| ResourceError::author(author_id))?;

    let shaped = shape_data(&AuthorDto::from(&author), params.fields())?;
    if media_type.includes_links() {
        let body = WithLinks {
            resource: shaped,
            links: author_links(&base, author.id, params.fields()),
        };
        media_type.respond(StatusCode::OK, &body)
    } else {
        media_type.respond(StatusCode::OK, &shaped)
    }
}

/// POST /api/authors
pub async fn create_author(
    State(state): State<AppState>,
    media_type: MediaType,
    base: BaseUrl,
    ValidatedJson(payload): ValidatedJson<AuthorForCreationDto>,
) -> ApiResult<Response> {
    let (author, courses) = payload.into_entities();
    let course_count = courses.len();
    let author = state.repository.add_author(author, courses).await?;
    tracing::info!(author_id = %author.id, courses = course_count, "created author");

    let dto = AuthorDto::from(&author);
    let response = if media_type.includes_links() {
        let body = WithLinks {
            resource: shape_data(&dto, None)?,
            links: author_links(&base, dto.id, None),
        };
        media_type.respond(StatusCode::CREATED, &body)?
    } else {
        media_type.respond(StatusCode::CREATED, &dto)?
    };

    with_location(response, &base.author(dto.id))
}

/// OPTIONS /api/authors
pub async fn authors_options() -> impl IntoResponse {
    (StatusCode::OK, [(ALLOW, AUTHORS_ALLOW)])
}

/// DELETE /api/authors/{author_id}
///
/// Also removes the author's courses.
pub async fn delete_author(
    State(state): State<AppState>,
    Path(author_id): Path<String>,
) -> ApiResult<StatusCode> {
    let author_id = parse_id(&author_id)?;

    if !state.repository.delete_author(&author_id).await? {
        return Err(ResourceError::author(author_id).into());
    }

    tracing::info!(author_id = %author_id, "deleted author");
    Ok(StatusCode::NO_CONTENT)
}
