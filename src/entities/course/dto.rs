//! Course wire formats and their conversions

use super::model::Course;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Message of the struct-level rule; field rules carry theirs in `#[validate]`
pub const TITLE_EQUALS_DESCRIPTION: &str =
    "The provided description should be different from the title.";

/// A course as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub author_id: Uuid,
}

impl From<&Course> for CourseDto {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            description: course.description.clone(),
            author_id: course.author_id,
        }
    }
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            author_id: course.author_id,
        }
    }
}

/// Body of `POST /api/authors/{authorId}/courses`
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "creation_title_differs"))]
pub struct CourseForCreationDto {
    #[validate(
        required(message = "You should fill out a title."),
        length(max = 100, message = "The title shouldn't have more than 100 characters.")
    )]
    pub title: Option<String>,

    #[validate(length(
        max = 1500,
        message = "The description shouldn't have more than 1500 characters."
    ))]
    pub description: Option<String>,
}

impl CourseForCreationDto {
    /// Build the entity for `author_id`; call only after validation
    pub fn into_course(self, author_id: Uuid) -> Course {
        Course::new(author_id, self.title.unwrap_or_default(), self.description)
    }
}

/// Body of `PUT /api/authors/{authorId}/courses/{courseId}`
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "update_title_differs"))]
pub struct CourseForUpdateDto {
    #[validate(
        required(message = "You should fill out a title."),
        length(max = 100, message = "The title shouldn't have more than 100 characters.")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "You should fill out a description."),
        length(
            max = 1500,
            message = "The description shouldn't have more than 1500 characters."
        )
    )]
    pub description: Option<String>,
}

impl CourseForUpdateDto {
    /// Overwrite the editable fields of an existing course
    pub fn apply_to(self, course: &mut Course) {
        course.title = self.title.unwrap_or_default();
        course.description = self.description;
    }

    /// Build a new course with a client-chosen id (upsert)
    pub fn into_course(self, author_id: Uuid, course_id: Uuid) -> Course {
        Course {
            id: course_id,
            title: self.title.unwrap_or_default(),
            description: self.description,
            author_id,
        }
    }
}

fn title_differs_from_description(
    title: Option<&str>,
    description: Option<&str>,
) -> Result<(), validator::ValidationError> {
    if title.is_some() && title == description {
        let mut error = validator::ValidationError::new("title_equals_description");
        error.message = Some(TITLE_EQUALS_DESCRIPTION.into());
        return Err(error);
    }
    Ok(())
}

fn creation_title_differs(course: &CourseForCreationDto) -> Result<(), validator::ValidationError> {
    title_differs_from_description(course.title.as_deref(), course.description.as_deref())
}

fn update_title_differs(course: &CourseForUpdateDto) -> Result<(), validator::ValidationError> {
    title_differs_from_description(course.title.as_deref(), course.description.as_deref())
}
