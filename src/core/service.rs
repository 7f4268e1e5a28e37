//! Repository trait for authors and courses

use crate::core::query::{AuthorsQuery, PagedList};
use crate::entities::author::Author;
use crate::entities::course::Course;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage operations behind the course library API
///
/// Implementations are agnostic to HTTP; they receive already validated
/// input and resolved sort fields (storage names from the `Author` mapping).
#[async_trait]
pub trait CourseLibraryRepository: Send + Sync {
    /// One page of authors after filtering, searching and sorting
    async fn get_authors(&self, query: &AuthorsQuery) -> Result<PagedList<Author>>;

    /// Authors with the given ids, in the order of `ids`; missing ids are skipped
    async fn get_authors_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Author>>;

    /// Get an author by ID
    async fn get_author(&self, id: &Uuid) -> Result<Option<Author>>;

    async fn author_exists(&self, id: &Uuid) -> Result<bool>;

    /// Store an author together with its initial courses
    async fn add_author(&self, author: Author, courses: Vec<Course>) -> Result<Author>;

    /// Delete an author and all of its courses
    ///
    /// Returns `false` when the author did not exist.
    async fn delete_author(&self, id: &Uuid) -> Result<bool>;

    /// All courses of an author, ordered by title
    async fn get_courses(&self, author_id: &Uuid) -> Result<Vec<Course>>;

    async fn get_course(&self, author_id: &Uuid, course_id: &Uuid) -> Result<Option<Course>>;

    /// Whether a course with this id exists under any author
    async fn course_exists(&self, course_id: &Uuid) -> Result<bool>;

    /// Store a course; its `author_id` must reference an existing author
    async fn add_course(&self, course: Course) -> Result<Course>;

    /// Replace the stored course with the same id
    async fn update_course(&self, course: Course) -> Result<Course>;

    /// Returns `false` when the course did not exist for that author
    async fn delete_course(&self, author_id: &Uuid, course_id: &Uuid) -> Result<bool>;
}
