//! Macros for reducing boilerplate when declaring shapeable types
//!
//! A shapeable type exposes a static accessor table so fields can be selected
//! (and sorted on) by name without runtime reflection.

/// Implement [`Shapeable`](crate::core::shaping::Shapeable) from a field list
///
/// Each entry maps a declared name to a struct field. Names keep the spelling
/// given here; lookups against them are case-insensitive. Field types must
/// convert into [`FieldValue`](crate::core::field::FieldValue).
///
/// # Example
///
/// ```rust,ignore
/// use course_library::prelude::*;
///
/// pub struct AuthorDto {
///     pub id: Uuid,
///     pub name: String,
///     pub age: i32,
///     pub main_category: String,
/// }
///
/// impl_shapeable!(AuthorDto {
///     "id" => id,
///     "name" => name,
///     "age" => age,
///     "mainCategory" => main_category,
/// });
///
/// let shaped = shape_data(&dto, Some("name,id"))?;
/// ```
#[macro_export]
macro_rules! impl_shapeable {
    (
        $type:ident {
            $( $name:literal => $field:ident ),* $(,)?
        }
    ) => {
        impl $crate::core::shaping::Shapeable for $type {
            fn fields() -> &'static [$crate::core::shaping::FieldDescriptor<Self>] {
                const FIELDS: &[$crate::core::shaping::FieldDescriptor<$type>] = &[
                    $(
                        $crate::core::shaping::FieldDescriptor {
                            name: $name,
                            get: {
                                fn get(record: &$type) -> $crate::core::field::FieldValue {
                                    $crate::core::field::FieldValue::from(record.$field.clone())
                                }
                                get
                            },
                        },
                    )*
                ];
                FIELDS
            }
        }
    };
}
