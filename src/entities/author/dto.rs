//! Author wire formats and their conversions

use super::model::Author;
use crate::core::mapping::{PropertyMapping, PropertyMappingValue};
use crate::entities::course::{Course, CourseForCreationDto};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An author as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub main_category: String,
}

crate::impl_shapeable!(AuthorDto {
    "id" => id,
    "name" => name,
    "age" => age,
    "mainCategory" => main_category,
});

impl From<&Author> for AuthorDto {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.name(),
            age: author.age(),
            main_category: author.main_category.clone(),
        }
    }
}

/// Sortable `AuthorDto` fields and the `Author` fields behind them
///
/// `age` sorts on date of birth, so its direction is reverted.
pub fn author_property_mapping() -> PropertyMapping {
    PropertyMapping::new()
        .with("id", PropertyMappingValue::new(["id"]))
        .with("mainCategory", PropertyMappingValue::new(["main_category"]))
        .with(
            "age",
            PropertyMappingValue::new(["date_of_birth"]).reverted(),
        )
        .with(
            "name",
            PropertyMappingValue::new(["first_name", "last_name"]),
        )
}

/// Body of `POST /api/authors`, optionally with the author's first courses
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AuthorForCreationDto {
    #[validate(
        required(message = "You should fill out a first name."),
        length(max = 50, message = "The first name shouldn't have more than 50 characters.")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "You should fill out a last name."),
        length(max = 50, message = "The last name shouldn't have more than 50 characters.")
    )]
    pub last_name: Option<String>,

    #[validate(required(message = "You should fill out a date of birth."))]
    pub date_of_birth: Option<DateTime<FixedOffset>>,

    #[validate(
        required(message = "You should fill out a main category."),
        length(max = 50, message = "The main category shouldn't have more than 50 characters.")
    )]
    pub main_category: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub courses: Vec<CourseForCreationDto>,
}

impl AuthorForCreationDto {
    /// Build the author and its courses; call only after validation
    pub fn into_entities(self) -> (Author, Vec<Course>) {
        let author = Author::new(
            self.first_name.unwrap_or_default(),
            self.last_name.unwrap_or_default(),
            self.date_of_birth.unwrap_or_default(),
            self.main_category.unwrap_or_default(),
        );
        let courses = self
            .courses
            .into_iter()
            .map(|course| course.into_course(author.id))
            .collect();
        (author, courses)
    }
}

/// Body of `POST /api/authorcollections`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(transparent)]
pub struct AuthorCollectionForCreation {
    #[validate(nested)]
    pub authors: Vec<AuthorForCreationDto>,
}
