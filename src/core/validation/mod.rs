//! Request body validation
//!
//! DTOs declare their rules with `#[derive(validator::Validate)]`; the
//! [`ValidatedJson`] extractor enforces them and reports every violation in
//! one 422 response.

pub mod extractor;

pub use extractor::{ValidatedJson, flatten_errors};
