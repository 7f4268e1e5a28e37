//! Core module containing the shaping, mapping and HTTP building blocks

pub mod error;
pub mod field;
pub mod hypermedia;
pub mod mapping;
pub mod module;
pub mod negotiation;
pub mod query;
pub mod service;
pub mod shaping;
pub mod validation;

pub use error::{ApiError, ApiResult};
pub use field::FieldValue;
pub use mapping::{PropertyMapping, PropertyMappingService, PropertyMappingValue, SortField};
pub use module::Module;
pub use negotiation::MediaType;
pub use query::{
    AuthorsQuery, AuthorsResourceParameters, PagedList, PaginationMetadata, ResourceQuery,
    ShapingParameters,
};
pub use service::CourseLibraryRepository;
pub use shaping::{ShapedRecord, Shapeable, shape_all, shape_data, type_has_properties};
