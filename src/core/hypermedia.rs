//! Hypermedia links and resource URIs
//!
//! Used for the `Location` header of created resources, the page links of the
//! `X-Pagination` header and the `links` of HATEOAS representations.

use crate::core::error::ApiError;
use crate::core::query::AuthorsResourceParameters;
use axum::extract::FromRequestParts;
use axum::http::HeaderValue;
use axum::http::header::{HOST, LOCATION};
use axum::http::request::Parts;
use axum::response::Response;
use serde::Serialize;
use std::convert::Infallible;
use url::form_urlencoded;
use uuid::Uuid;

/// Route prefix of the authors resource
pub const AUTHORS_PATH: &str = "/api/authors";

/// Route prefix of the author collections resource
pub const AUTHOR_COLLECTIONS_PATH: &str = "/api/authorcollections";

/// A navigation link in a HATEOAS representation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkDto {
    pub href: String,
    pub rel: String,
    pub method: String,
}

impl LinkDto {
    pub fn new(href: impl Into<String>, rel: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            method: method.into(),
        }
    }
}

/// A single resource with its links appended
#[derive(Debug, Clone, Serialize)]
pub struct WithLinks<T> {
    #[serde(flatten)]
    pub resource: T,
    pub links: Vec<LinkDto>,
}

/// A collection wrapped with collection-level links
#[derive(Debug, Clone, Serialize)]
pub struct LinkedCollection<T> {
    pub value: Vec<T>,
    pub links: Vec<LinkDto>,
}

/// Which page a collection URI points to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceUriType {
    PreviousPage,
    NextPage,
    Current,
}

/// Scheme and authority used to make links absolute
///
/// Taken from the request's `Host` header; empty when there is none, which
/// leaves links relative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into().trim_end_matches('/').to_string())
    }

    /// Join an absolute path onto the base
    pub fn link(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    pub fn author(&self, author_id: Uuid) -> String {
        self.link(&format!("{}/{}", AUTHORS_PATH, author_id))
    }

    pub fn course(&self, author_id: Uuid, course_id: Uuid) -> String {
        self.link(&format!("{}/{}/courses/{}", AUTHORS_PATH, author_id, course_id))
    }

    pub fn author_collection(&self, ids: &[Uuid]) -> String {
        let ids = ids.iter().map(Uuid::to_string).collect::<Vec<_>>().join(",");
        self.link(&format!("{}/({})", AUTHOR_COLLECTIONS_PATH, ids))
    }
}

impl<S> FromRequestParts<S> for BaseUrl
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let host = parts
            .headers
            .get(HOST)
            .and_then(|host| host.to_str().ok())
            .or_else(|| parts.uri.authority().map(|authority| authority.as_str()));
        Ok(host
            .map(|host| BaseUrl::new(format!("http://{}", host)))
            .unwrap_or_default())
    }
}

/// Point the `Location` header of a created response at `href`
pub fn with_location(mut response: Response, href: &str) -> Result<Response, ApiError> {
    let value = HeaderValue::from_str(href)
        .map_err(|e| ApiError::Internal(format!("Invalid location '{}': {}", href, e)))?;
    response.headers_mut().insert(LOCATION, value);
    Ok(response)
}

/// URI of a page of the authors collection, keeping every other parameter
pub fn authors_resource_uri(
    base: &BaseUrl,
    params: &AuthorsResourceParameters,
    page_size: usize,
    kind: ResourceUriType,
) -> String {
    let page_number = match kind {
        ResourceUriType::PreviousPage => params.page_number().saturating_sub(1).max(1),
        ResourceUriType::NextPage => params.page_number().saturating_add(1),
        ResourceUriType::Current => params.page_number(),
    };

    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(main_category) = &params.main_category {
        query.append_pair("mainCategory", main_category);
    }
    if let Some(search_query) = &params.search_query {
        query.append_pair("searchQuery", search_query);
    }
    query
        .append_pair("pageNumber", &page_number.to_string())
        .append_pair("pageSize", &page_size.to_string())
        .append_pair("orderBy", &params.order_by);
    if let Some(fields) = &params.fields {
        query.append_pair("fields", fields);
    }

    base.link(&format!("{}?{}", AUTHORS_PATH, query.finish()))
}

/// Links of a single author
///
/// The `self` link keeps the requested field list.
pub fn author_links(base: &BaseUrl, author_id: Uuid, fields: Option<&str>) -> Vec<LinkDto> {
    let author = base.author(author_id);
    let self_href = match fields {
        Some(fields) => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("fields", fields)
                .finish();
            format!("{}?{}", author, query)
        }
        None => author.clone(),
    };

    vec![
        LinkDto::new(self_href, "self", "GET"),
        LinkDto::new(author.clone(), "delete_author", "DELETE"),
        LinkDto::new(
            format!("{}/courses", author),
            "create_course_for_author",
            "POST",
        ),
        LinkDto::new(format!("{}/courses", author), "courses", "GET"),
    ]
}

/// Links of a page of the authors collection
pub fn authors_links(
    base: &BaseUrl,
    params: &AuthorsResourceParameters,
    page_size: usize,
    has_previous: bool,
    has_next: bool,
) -> Vec<LinkDto> {
    let mut links = vec![LinkDto::new(
        authors_resource_uri(base, params, page_size, ResourceUriType::Current),
        "self",
        "GET",
    )];

    if has_next {
        links.push(LinkDto::new(
            authors_resource_uri(base, params, page_size, ResourceUriType::NextPage),
            "nextPage",
            "GET",
        ));
    }

    if has_previous {
        links.push(LinkDto::new(
            authors_resource_uri(base, params, page_size, ResourceUriType::PreviousPage),
            "previousPage",
            "GET",
        ));
    }

    links
}
