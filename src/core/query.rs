//! Query parameters and pagination utilities

use crate::core::error::{ApiError, RequestError};
use crate::core::mapping::SortField;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query string extractor that rejects with [`ApiError`]
///
/// Wraps `axum::extract::Query` so malformed query strings become a 400 with
/// the API's JSON error body.
#[derive(Debug, Clone)]
pub struct ResourceQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ResourceQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::try_from_uri(&parts.uri).map_err(|e| {
            RequestError::InvalidQuery {
                message: e.body_text(),
            }
        })?;
        Ok(ResourceQuery(value))
    }
}

/// Query parameters of the authors collection
///
/// # Example
/// ```text
/// GET /api/authors?mainCategory=Rum&searchQuery=nan&orderBy=age desc&pageNumber=2&pageSize=5&fields=id,name
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorsResourceParameters {
    /// Exact match on the main category (case-insensitive)
    pub main_category: Option<String>,

    /// Substring match on category and names (case-insensitive)
    pub search_query: Option<String>,

    /// Page number (starts at 1)
    pub page_number: usize,

    /// Requested page size, capped by configuration
    pub page_size: Option<usize>,

    /// Sort clauses, e.g. `name` or `age desc, name`
    pub order_by: String,

    /// Fields to include in the response
    pub fields: Option<String>,
}

pub const DEFAULT_ORDER_BY: &str = "name";

impl Default for AuthorsResourceParameters {
    fn default() -> Self {
        Self {
            main_category: None,
            search_query: None,
            page_number: 1,
            page_size: None,
            order_by: DEFAULT_ORDER_BY.to_string(),
            fields: None,
        }
    }
}

impl AuthorsResourceParameters {
    /// Get page number, ensuring minimum of 1
    pub fn page_number(&self) -> usize {
        self.page_number.max(1)
    }

    /// Get page size, falling back to `default` and never exceeding `max`
    pub fn page_size(&self, default: usize, max: usize) -> usize {
        self.page_size.unwrap_or(default).clamp(1, max.max(1))
    }

    /// Blank filters count as absent
    pub fn main_category(&self) -> Option<&str> {
        non_blank(self.main_category.as_deref())
    }

    pub fn search_query(&self) -> Option<&str> {
        non_blank(self.search_query.as_deref())
    }

    pub fn fields(&self) -> Option<&str> {
        non_blank(self.fields.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Query parameters of single-resource reads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShapingParameters {
    pub fields: Option<String>,
}

impl ShapingParameters {
    pub fn fields(&self) -> Option<&str> {
        non_blank(self.fields.as_deref())
    }
}

/// Parse an identifier taken from the request path
pub fn parse_id(value: &str) -> Result<Uuid, RequestError> {
    Uuid::parse_str(value.trim()).map_err(|_| RequestError::InvalidId {
        id: value.to_string(),
    })
}

/// A fully resolved authors query handed to the repository
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorsQuery {
    pub main_category: Option<String>,
    pub search_query: Option<String>,
    pub page_number: usize,
    pub page_size: usize,
    pub sort: Vec<SortField>,
}

impl Default for AuthorsQuery {
    fn default() -> Self {
        Self {
            main_category: None,
            search_query: None,
            page_number: 1,
            page_size: 10,
            sort: Vec::new(),
        }
    }
}

impl AuthorsQuery {
    /// Number of records to skip before the requested page
    ///
    /// Saturates instead of overflowing for huge page numbers.
    pub fn offset(&self) -> usize {
        self.page_number
            .max(1)
            .saturating_sub(1)
            .saturating_mul(self.page_size)
    }
}

/// One page of a larger result set
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_count: usize,
}

impl<T> PagedList<T> {
    /// Wrap an already fetched page
    pub fn new(items: Vec<T>, total_count: usize, page_number: usize, page_size: usize) -> Self {
        // Ensure page size is at least 1 to avoid division by zero
        let page_size = page_size.max(1);
        Self {
            items,
            current_page: page_number.max(1),
            total_pages: total_count.div_ceil(page_size),
            page_size,
            total_count,
        }
    }

    /// Cut one page out of a complete, already ordered result set
    pub fn create(source: Vec<T>, page_number: usize, page_size: usize) -> Self {
        let page_number = page_number.max(1);
        let page_size = page_size.max(1);
        let total_count = source.len();
        let items = source
            .into_iter()
            .skip((page_number - 1).saturating_mul(page_size))
            .take(page_size)
            .collect();
        Self::new(items, total_count, page_number, page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            page_size: self.page_size,
            total_count: self.total_count,
        }
    }
}

/// Paging metadata sent in the `X-Pagination` header
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub total_count: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub previous_page_link: Option<String>,
    pub next_page_link: Option<String>,
}

impl PaginationMetadata {
    pub fn from_page<T>(page: &PagedList<T>) -> Self {
        Self {
            total_count: page.total_count,
            page_size: page.page_size,
            current_page: page.current_page,
            total_pages: page.total_pages,
            previous_page_link: None,
            next_page_link: None,
        }
    }

    pub fn with_links(mut self, previous: Option<String>, next: Option<String>) -> Self {
        self.previous_page_link = previous;
        self.next_page_link = next;
        self
    }
}
