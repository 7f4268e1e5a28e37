//! Axum extractor for validated request bodies
//!
//! `ValidatedJson<T>` deserializes the body and runs `T`'s `validator` rules
//! before the handler sees it.

use crate::core::error::{ApiError, FieldValidationError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

/// Key under which `validator` files struct-level (schema) errors
const SCHEMA_KEY: &str = "__all__";

/// Axum extractor that deserializes and validates a JSON body
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_course(
///     ValidatedJson(course): ValidatedJson<CourseForCreationDto>,
/// ) -> ApiResult<Response> {
///     // course passed every rule declared on the DTO
/// }
/// ```
///
/// Malformed JSON is rejected with 400, rule violations with 422.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|e| {
            ValidationError::InvalidJson {
                message: e.body_text(),
            }
        })?;

        payload
            .validate()
            .map_err(|errors| ValidationError::FieldErrors(flatten_errors(&errors)))?;

        Ok(ValidatedJson(payload))
    }
}

/// Flatten nested `validator` errors into one list keyed by JSON path
///
/// Paths use the wire (camelCase) field names, e.g. `courses[1].title`.
/// Struct-level errors are keyed by the path of the struct itself, or
/// `body` at the top level. The result is sorted by path.
pub fn flatten_errors(errors: &ValidationErrors) -> Vec<FieldValidationError> {
    let mut flat = Vec::new();
    collect_errors(errors, "", &mut flat);
    flat.sort_by(|a, b| a.field.cmp(&b.field));
    flat
}

fn collect_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldValidationError>) {
    for (field, kind) in errors.errors() {
        let field: &str = field.as_ref();
        let path = if field == SCHEMA_KEY {
            if prefix.is_empty() {
                "body".to_string()
            } else {
                prefix.to_string()
            }
        } else {
            join_path(prefix, &camel_case(field))
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| FieldValidationError {
                    field: path.clone(),
                    message: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| default_message(&error.code)),
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_errors(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_errors(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn default_message(code: &str) -> String {
    match code {
        "required" => "This field is required.".to_string(),
        "length" => "The value has an invalid length.".to_string(),
        other => format!("Validation failed: {}", other),
    }
}
