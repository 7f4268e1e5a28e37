//! Typed error handling for the course library API
//!
//! Every handler returns [`ApiError`], which knows its HTTP status, its
//! machine-readable code and how to render itself as a JSON body.
//!
//! # Error Categories
//!
//! - [`ResourceError`]: a requested author or course does not exist
//! - [`ValidationError`]: client input was rejected (sort keys, field lists, bodies)
//! - [`RequestError`]: malformed identifiers or unsupported media types
//! - [`StorageError`]: the backing store failed
//! - [`ConfigError`]: configuration could not be loaded or is incomplete
//!
//! # Example
//!
//! ```rust,ignore
//! async fn get_author(id: Uuid) -> Result<Author, ApiError> {
//!     repository.get_author(&id).await?.ok_or(ApiError::Resource(ResourceError::NotFound {
//!         resource_type: "author".to_string(),
//!         id,
//!     }))
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Message returned in place of the real cause for server-side faults
pub const UNEXPECTED_FAULT_MESSAGE: &str = "An unexpected fault happened. Try again later.";

/// The main error type of the API
#[derive(Debug)]
pub enum ApiError {
    /// Missing authors or courses
    Resource(ResourceError),

    /// Rejected client input
    Validation(ValidationError),

    /// Malformed requests
    Request(RequestError),

    /// Storage backend errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Resource(e) => write!(f, "{}", e),
            ApiError::Validation(e) => write!(f, "{}", e),
            ApiError::Request(e) => write!(f, "{}", e),
            ApiError::Storage(e) => write!(f, "{}", e),
            ApiError::Config(e) => write!(f, "{}", e),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Resource(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            ApiError::Request(e) => Some(e),
            ApiError::Storage(e) => Some(e),
            ApiError::Config(e) => Some(e),
            ApiError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Resource(e) => e.status_code(),
            ApiError::Validation(e) => e.status_code(),
            ApiError::Request(e) => e.status_code(),
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Resource(e) => e.error_code(),
            ApiError::Validation(e) => e.error_code(),
            ApiError::Request(e) => e.error_code(),
            ApiError::Storage(_) => "STORAGE_ERROR",
            ApiError::Config(_) => "CONFIG_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the error is a client input failure rather than a server fault
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Convert to an error response
    ///
    /// Server faults never leak their cause to the client.
    pub fn to_response(&self) -> ErrorResponse {
        if self.status_code().is_server_error() {
            return ErrorResponse {
                code: self.error_code().to_string(),
                message: UNEXPECTED_FAULT_MESSAGE.to_string(),
                details: None,
            };
        }

        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::Resource(
                ResourceError::NotFound { resource_type, id }
                | ResourceError::Conflict { resource_type, id },
            ) => {
                Some(serde_json::json!({
                    "resource_type": resource_type,
                    "id": id.to_string()
                }))
            }
            ApiError::Resource(ResourceError::CollectionIncomplete {
                resource_type,
                missing,
            }) => Some(serde_json::json!({
                "resource_type": resource_type,
                "missing": missing.iter().map(Uuid::to_string).collect::<Vec<_>>()
            })),
            ApiError::Validation(ValidationError::UnmappedSortField { field }) => {
                Some(serde_json::json!({ "parameter": "orderBy", "field": field }))
            }
            ApiError::Validation(ValidationError::UnknownField { field }) => {
                Some(serde_json::json!({ "parameter": "fields", "field": field }))
            }
            ApiError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Resource Errors
// =============================================================================

/// Errors raised when a requested resource does not exist
#[derive(Debug)]
pub enum ResourceError {
    /// A single resource was not found
    NotFound { resource_type: String, id: Uuid },

    /// Some members of a requested collection were not found
    CollectionIncomplete {
        resource_type: String,
        missing: Vec<Uuid>,
    },

    /// The identifier is already taken by a resource of another owner
    Conflict { resource_type: String, id: Uuid },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::NotFound { resource_type, id } => {
                write!(f, "{} with id '{}' not found", resource_type, id)
            }
            ResourceError::CollectionIncomplete {
                resource_type,
                missing,
            } => {
                write!(
                    f,
                    "{} {} of the requested {} collection could not be found",
                    missing.len(),
                    if missing.len() == 1 { "member" } else { "members" },
                    resource_type
                )
            }
            ResourceError::Conflict { resource_type, id } => {
                write!(f, "{} with id '{}' already exists elsewhere", resource_type, id)
            }
        }
    }
}

impl std::error::Error for ResourceError {}

impl ResourceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResourceError::Conflict { .. } => StatusCode::CONFLICT,
            _ => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ResourceError::NotFound { .. } => "RESOURCE_NOT_FOUND",
            ResourceError::CollectionIncomplete { .. } => "COLLECTION_INCOMPLETE",
            ResourceError::Conflict { .. } => "RESOURCE_CONFLICT",
        }
    }

    /// Shorthand for a missing author
    pub fn author(id: Uuid) -> Self {
        ResourceError::NotFound {
            resource_type: "author".to_string(),
            id,
        }
    }

    /// Shorthand for a missing course
    pub fn course(id: Uuid) -> Self {
        ResourceError::NotFound {
            resource_type: "course".to_string(),
            id,
        }
    }
}

impl From<ResourceError> for ApiError {
    fn from(err: ResourceError) -> Self {
        ApiError::Resource(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to client input validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A sort key has no registered property mapping
    UnmappedSortField { field: String },

    /// A requested output field does not exist on the target type
    UnknownField { field: String },

    /// Body validation failed for one or more fields
    FieldErrors(Vec<FieldValidationError>),

    /// Invalid JSON format
    InvalidJson { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnmappedSortField { field } => {
                write!(f, "Cannot sort by '{}': no property mapping exists", field)
            }
            ValidationError::UnknownField { field } => {
                write!(f, "Unknown field '{}'", field)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::UnmappedSortField { .. } => StatusCode::BAD_REQUEST,
            ValidationError::UnknownField { .. } => StatusCode::BAD_REQUEST,
            ValidationError::FieldErrors(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ValidationError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::UnmappedSortField { .. } => "UNMAPPED_SORT_FIELD",
            ValidationError::UnknownField { .. } => "UNKNOWN_FIELD",
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to the shape of the HTTP request itself
#[derive(Debug)]
pub enum RequestError {
    /// Identifier in the path is not a UUID
    InvalidId { id: String },

    /// Identifier list in the path is malformed
    InvalidIdList { value: String },

    /// Query string could not be parsed
    InvalidQuery { message: String },

    /// None of the media types in the Accept header can be produced
    NotAcceptable { accept: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidId { id } => {
                write!(f, "Invalid identifier format: '{}'", id)
            }
            RequestError::InvalidIdList { value } => {
                write!(f, "Invalid identifier list: '{}'", value)
            }
            RequestError::InvalidQuery { message } => {
                write!(f, "Invalid query string: {}", message)
            }
            RequestError::NotAcceptable { accept } => {
                write!(f, "Cannot produce a response matching Accept: {}", accept)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidIdList { .. } => StatusCode::BAD_REQUEST,
            RequestError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
            RequestError::NotAcceptable { .. } => StatusCode::NOT_ACCEPTABLE,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidId { .. } => "INVALID_ID",
            RequestError::InvalidIdList { .. } => "INVALID_ID_LIST",
            RequestError::InvalidQuery { .. } => "INVALID_QUERY",
            RequestError::NotAcceptable { .. } => "NOT_ACCEPTABLE",
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        ApiError::Request(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug)]
pub enum StorageError {
    /// Connection error
    ConnectionError { backend: String, message: String },

    /// Query execution error
    QueryError { backend: String, message: String },

    /// Backend not compiled in or not configured
    Unavailable { backend: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionError { backend, message } => {
                write!(f, "Failed to connect to {}: {}", backend, message)
            }
            StorageError::QueryError { backend, message } => {
                write!(f, "{} query error: {}", backend, message)
            }
            StorageError::Unavailable { backend } => {
                write!(f, "Storage backend '{}' is unavailable", backend)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    FileNotFound { path: String },

    /// IO error while reading configuration
    IoError { message: String },

    /// No property mapping was registered for a type pair
    MissingPropertyMapping {
        source: &'static str,
        destination: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::FileNotFound { path } => {
                write!(f, "Configuration file not found: {}", path)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            ConfigError::MissingPropertyMapping {
                source,
                destination,
            } => {
                write!(
                    f,
                    "Cannot find property mapping instance for <{}, {}>",
                    source, destination
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for ApiError {
    fn from(err: serde_yaml::Error) -> Self {
        ApiError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

/// Repository failures arrive as `anyhow::Error`
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StorageError>() {
            Ok(storage) => ApiError::Storage(storage),
            Err(err) => ApiError::Internal(format!("{:#}", err)),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Tests
// =============================================================================
