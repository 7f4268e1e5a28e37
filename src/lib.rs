//! # Course Library
//!
//! A REST API for authors and their courses, built on axum.
//!
//! ## Features
//!
//! - **Field shaping**: `?fields=id,name` returns only the requested fields
//! - **Sort mapping**: client sort keys such as `age desc` resolve to storage
//!   fields through a registered property mapping
//! - **Paging**: page metadata and page links in the `X-Pagination` header
//! - **Content negotiation**: plain JSON or a HATEOAS vendor type with links
//! - **Validation**: request bodies are checked with `validator` and rejected
//!   with 422
//! - **Storage**: in-memory by default, PostgreSQL behind the `postgres` feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use course_library::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_repository(InMemoryCourseLibrary::seeded()?)
//!     .register_module(CourseLibraryModule)
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ApiError, ApiResult},
        field::FieldValue,
        mapping::{PropertyMapping, PropertyMappingService, PropertyMappingValue, SortField},
        module::Module,
        negotiation::MediaType,
        query::{AuthorsQuery, AuthorsResourceParameters, PagedList},
        service::CourseLibraryRepository,
        shaping::{ShapedRecord, Shapeable, shape_all, shape_data, type_has_properties},
    };

    // === Macros ===
    pub use crate::impl_shapeable;

    // === Resources ===
    pub use crate::entities::CourseLibraryModule;
    pub use crate::entities::author::{Author, AuthorDto};
    pub use crate::entities::course::{Course, CourseDto};

    // === Storage ===
    pub use crate::storage::InMemoryCourseLibrary;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresCourseLibrary;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
