//! Property mapping between client-facing DTO fields and storage fields
//!
//! A [`PropertyMapping`] tells which storage fields back each sortable DTO
//! field. Mappings are registered per `(source, destination)` type pair in a
//! [`PropertyMappingService`] while the server is built and are read-only from
//! then on.
//!
//! ```rust,ignore
//! let mut service = PropertyMappingService::new();
//! service.register::<AuthorDto, Author>(
//!     PropertyMapping::new()
//!         .with("id", PropertyMappingValue::new(["id"]))
//!         .with("age", PropertyMappingValue::new(["date_of_birth"]).reverted())
//!         .with("name", PropertyMappingValue::new(["first_name", "last_name"])),
//! );
//!
//! // "age desc, name" -> date_of_birth ASC, first_name ASC, last_name ASC
//! let sort = service.resolve_sort::<AuthorDto, Author>(Some("age desc, name"))?;
//! ```

use crate::core::error::{ApiError, ConfigError, ValidationError};
use crate::core::shaping::Shapeable;
use indexmap::IndexMap;
use std::any::{TypeId, type_name};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Storage fields backing one DTO field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMappingValue {
    /// Storage fields, in the order they are sorted on
    pub destination_properties: Vec<&'static str>,

    /// Flip the requested direction (e.g. `age` sorts on date of birth)
    pub revert: bool,
}

impl PropertyMappingValue {
    pub fn new(destination_properties: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            destination_properties: destination_properties.into_iter().collect(),
            revert: false,
        }
    }

    pub fn reverted(mut self) -> Self {
        self.revert = true;
        self
    }
}

/// A single storage-level sort instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortField {
    pub field: &'static str,
    pub descending: bool,
}

impl SortField {
    pub fn asc(field: &'static str) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    pub fn desc(field: &'static str) -> Self {
        Self {
            field,
            descending: true,
        }
    }
}

/// The mapping table of one `(source, destination)` type pair
#[derive(Debug, Clone, Default)]
pub struct PropertyMapping {
    entries: IndexMap<&'static str, PropertyMappingValue>,
}

impl PropertyMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry (builder style)
    pub fn with(mut self, name: &'static str, value: PropertyMappingValue) -> Self {
        self.entries.insert(name, value);
        self
    }

    /// Look up an entry by DTO field name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&PropertyMappingValue> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Registered DTO field names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Translate an `orderBy` string into storage sort fields
    ///
    /// Clauses are comma-separated, each a field name optionally followed by
    /// `asc` or `desc`. An empty string yields no sort fields. Empty clauses,
    /// unknown names and unrecognised direction tokens are rejected.
    pub fn resolve(&self, order_by: Option<&str>) -> Result<Vec<SortField>, ValidationError> {
        let order_by = match order_by {
            Some(value) if !value.trim().is_empty() => value,
            _ => return Ok(Vec::new()),
        };

        let mut sort = Vec::new();
        for clause in order_by.split(',') {
            let unmapped = || ValidationError::UnmappedSortField {
                field: clause.trim().to_string(),
            };

            let (name, descending) = parse_clause(clause).ok_or_else(unmapped)?;
            let value = self.get(name).ok_or_else(unmapped)?;

            let descending = descending != value.revert;
            sort.extend(
                value
                    .destination_properties
                    .iter()
                    .map(|&field| SortField { field, descending }),
            );
        }
        Ok(sort)
    }
}

/// Split a sort clause into its field name and direction
fn parse_clause(clause: &str) -> Option<(&str, bool)> {
    let mut tokens = clause.split_whitespace();
    let name = tokens.next()?;
    let descending = match tokens.next() {
        None => false,
        Some(token) if token.eq_ignore_ascii_case("asc") => false,
        Some(token) if token.eq_ignore_ascii_case("desc") => true,
        Some(_) => return None,
    };
    if tokens.next().is_some() {
        return None;
    }
    Some((name, descending))
}

/// Registry of property mappings keyed by `(source, destination)` type pair
#[derive(Debug, Default)]
pub struct PropertyMappingService {
    mappings: HashMap<(TypeId, TypeId), PropertyMapping>,
}

impl PropertyMappingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the mapping from `S` to `D`
    pub fn register<S: 'static, D: 'static>(&mut self, mapping: PropertyMapping) {
        tracing::debug!(
            source = type_name::<S>(),
            destination = type_name::<D>(),
            entries = mapping.entries.len(),
            "registered property mapping"
        );
        self.mappings
            .insert((TypeId::of::<S>(), TypeId::of::<D>()), mapping);
    }

    /// Get the mapping from `S` to `D`
    pub fn get_property_mapping<S: 'static, D: 'static>(
        &self,
    ) -> Result<&PropertyMapping, ConfigError> {
        self.mappings
            .get(&(TypeId::of::<S>(), TypeId::of::<D>()))
            .ok_or(ConfigError::MissingPropertyMapping {
                source: type_name::<S>(),
                destination: type_name::<D>(),
            })
    }

    /// Whether every clause of `order_by` maps from `S` to `D`
    ///
    /// True for a missing or blank `order_by`. False when no mapping is
    /// registered for the pair.
    pub fn valid_mapping_exists_for<S: 'static, D: 'static>(&self, order_by: Option<&str>) -> bool {
        if order_by.is_none_or(|value| value.trim().is_empty()) {
            return true;
        }
        self.get_property_mapping::<S, D>()
            .is_ok_and(|mapping| mapping.resolve(order_by).is_ok())
    }

    /// Resolve `order_by` into storage sort fields for `D`
    pub fn resolve_sort<S: 'static, D: 'static>(
        &self,
        order_by: Option<&str>,
    ) -> Result<Vec<SortField>, ApiError> {
        let mapping = self.get_property_mapping::<S, D>()?;
        Ok(mapping.resolve(order_by)?)
    }
}

/// Sort records in memory by resolved storage fields
///
/// The sort is stable; fields `T` does not declare compare equal.
pub fn apply_sort<T: Shapeable>(records: &mut [T], sort: &[SortField]) {
    if sort.is_empty() {
        return;
    }

    let keys: Vec<_> = sort
        .iter()
        .filter_map(|sort_field| T::field(sort_field.field).map(|field| (field, sort_field.descending)))
        .collect();

    records.sort_by(|a, b| {
        keys.iter().fold(Ordering::Equal, |ordering, (field, descending)| {
            ordering.then_with(|| {
                let ordering = (field.get)(a).compare(&(field.get)(b));
                if *descending { ordering.reverse() } else { ordering }
            })
        })
    });
}
