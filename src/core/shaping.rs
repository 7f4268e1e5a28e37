//! Data shaping: projecting records onto a client-selected subset of fields
//!
//! Types opt in by implementing [`Shapeable`], which exposes a static table of
//! named accessors (usually generated by [`impl_shapeable!`](crate::impl_shapeable)).
//! Field names are matched case-insensitively; the shaped output always uses
//! the declared spelling.
//!
//! ```rust,ignore
//! // GET /api/authors?fields=name,id
//! check_fields::<AuthorDto>(params.fields.as_deref())?;
//! let body = shape_all(&dtos, params.fields.as_deref())?;
//! ```

use crate::core::error::ValidationError;
use crate::core::field::FieldValue;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A named accessor for one field of `T`
pub struct FieldDescriptor<T> {
    /// Declared field name, as it appears on the wire
    pub name: &'static str,

    /// Reads the field's current value
    pub get: fn(&T) -> FieldValue,
}

impl<T> FieldDescriptor<T> {
    /// Whether this descriptor answers to `name` (case-insensitive)
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Trait for types whose fields can be selected by name at runtime
pub trait Shapeable: Sized + 'static {
    /// All declared fields, in declaration order
    fn fields() -> &'static [FieldDescriptor<Self>];

    /// Find a field by name (case-insensitive)
    fn field(name: &str) -> Option<&'static FieldDescriptor<Self>> {
        Self::fields().iter().find(|field| field.matches(name))
    }

    /// Read a field by name (case-insensitive)
    fn field_value(&self, name: &str) -> Option<FieldValue> {
        Self::field(name).map(|field| (field.get)(self))
    }
}

/// A record reduced to the requested fields, in output order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapedRecord {
    fields: IndexMap<&'static str, FieldValue>,
}

impl ShapedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &'static str, value: FieldValue) {
        self.fields.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Field names in output order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for ShapedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Split a comma-separated field list into trimmed names
///
/// `None`, an empty string and whitespace all yield no names.
fn requested_fields(fields: Option<&str>) -> Vec<&str> {
    match fields {
        Some(list) if !list.trim().is_empty() => list.split(',').map(str::trim).collect(),
        _ => Vec::new(),
    }
}

/// Resolve a field list against `T`'s declared fields
///
/// Returns the descriptors in requested order, or every declared field when
/// the list is empty.
fn resolve_fields<T: Shapeable>(
    fields: Option<&str>,
) -> Result<Vec<&'static FieldDescriptor<T>>, ValidationError> {
    let requested = requested_fields(fields);
    if requested.is_empty() {
        return Ok(T::fields().iter().collect());
    }

    requested
        .into_iter()
        .map(|name| {
            T::field(name).ok_or_else(|| ValidationError::UnknownField {
                field: name.to_string(),
            })
        })
        .collect()
}

/// Check a field list against `T`, reporting the first unknown name
pub fn check_fields<T: Shapeable>(fields: Option<&str>) -> Result<(), ValidationError> {
    resolve_fields::<T>(fields).map(|_| ())
}

/// Whether every name in `fields` is a declared field of `T`
///
/// Vacuously true for an empty list.
pub fn type_has_properties<T: Shapeable>(fields: Option<&str>) -> bool {
    check_fields::<T>(fields).is_ok()
}

fn project<T: Shapeable>(record: &T, descriptors: &[&'static FieldDescriptor<T>]) -> ShapedRecord {
    let mut shaped = ShapedRecord::new();
    for descriptor in descriptors {
        shaped.insert(descriptor.name, (descriptor.get)(record));
    }
    shaped
}

/// Shape a single record
pub fn shape_data<T: Shapeable>(
    record: &T,
    fields: Option<&str>,
) -> Result<ShapedRecord, ValidationError> {
    let descriptors = resolve_fields::<T>(fields)?;
    Ok(project(record, &descriptors))
}

/// Shape a sequence of records, preserving their order
///
/// The field list is resolved once for the whole sequence.
pub fn shape_all<T: Shapeable>(
    records: &[T],
    fields: Option<&str>,
) -> Result<Vec<ShapedRecord>, ValidationError> {
    let descriptors = resolve_fields::<T>(fields)?;
    Ok(records
        .iter()
        .map(|record| project(record, &descriptors))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Pirate {
        id: i64,
        name: String,
        ship: Option<String>,
    }

    crate::impl_shapeable!(Pirate {
        "Id" => id,
        "Name" => name,
        "Ship" => ship,
    });

    fn pirate() -> Pirate {
        Pirate {
            id: 7,
            name: "Nancy Rye".to_string(),
            ship: None,
        }
    }

    #[test]
    fn test_empty_field_list_keeps_declaration_order() {
        for fields in [None, Some(""), Some("   ")] {
            let shaped = shape_data(&pirate(), fields).unwrap();
            assert_eq!(shaped.keys().collect::<Vec<_>>(), vec!["Id", "Name", "Ship"]);
        }
    }

    #[test]
    fn test_requested_order_wins() {
        let shaped = shape_data(&pirate(), Some("Name,Id")).unwrap();
        assert_eq!(shaped.len(), 2);
        assert_eq!(shaped.keys().collect::<Vec<_>>(), vec!["Name", "Id"]);
        assert_eq!(shaped.get("Name"), Some(&FieldValue::from("Nancy Rye")));
        assert_eq!(shaped.get("Id"), Some(&FieldValue::Integer(7)));
    }

    #[test]
    fn test_matching_is_case_insensitive_and_trimmed() {
        let shaped = shape_data(&pirate(), Some(" nAmE , SHIP ")).unwrap();
        assert_eq!(shaped.keys().collect::<Vec<_>>(), vec!["Name", "Ship"]);
        assert_eq!(shaped.get("Ship"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = shape_data(&pirate(), Some("Name,Parrot")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownField {
                field: "Parrot".to_string()
            }
        );
    }

    #[test]
    fn test_type_has_properties() {
        assert!(type_has_properties::<Pirate>(None));
        assert!(type_has_properties::<Pirate>(Some("")));
        assert!(type_has_properties::<Pirate>(Some("ship,ID")));
        assert!(type_has_properties::<Pirate>(Some("Name, Id, Ship")));
        assert!(!type_has_properties::<Pirate>(Some("Name,Parrot")));
        assert!(!type_has_properties::<Pirate>(Some("Name,")));
    }

    #[test]
    fn test_full_list_equals_no_list() {
        let explicit = shape_data(&pirate(), Some("Id,Name,Ship")).unwrap();
        let implicit = shape_data(&pirate(), None).unwrap();
        assert_eq!(explicit, implicit);
    }

    #[test]
    fn test_shape_all_preserves_record_order() {
        let mut second = pirate();
        second.id = 8;
        second.name = "Arnold Hunter".to_string();

        let shaped = shape_all(&[pirate(), second], Some("name")).unwrap();
        assert_eq!(shaped.len(), 2);
        assert_eq!(shaped[0].get("Name"), Some(&FieldValue::from("Nancy Rye")));
        assert_eq!(shaped[1].get("Name"), Some(&FieldValue::from("Arnold Hunter")));
    }

    #[test]
    fn test_shape_all_rejects_before_projecting() {
        assert!(shape_all::<Pirate>(&[], Some("Parrot")).is_err());
    }

    #[test]
    fn test_serialization_keeps_order() {
        let shaped = shape_data(&pirate(), Some("Ship,Id")).unwrap();
        let json = serde_json::to_string(&shaped).unwrap();
        assert_eq!(json, r#"{"Ship":null,"Id":7}"#);
    }
}
