//! In-memory implementation of the course library repository
//!
//! Useful for testing and development, and the default backend of the binary.

use crate::core::mapping::apply_sort;
use crate::core::query::{AuthorsQuery, PagedList};
use crate::core::service::CourseLibraryRepository;
use crate::entities::author::Author;
use crate::entities::course::Course;
use crate::storage::seed;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory repository
///
/// Authors and courses keep insertion order. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryCourseLibrary {
    authors: Arc<RwLock<IndexMap<Uuid, Author>>>,
    courses: Arc<RwLock<IndexMap<Uuid, Course>>>,
}

impl InMemoryCourseLibrary {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the sample authors and courses
    pub fn seeded() -> Result<Self> {
        let library = Self::new();
        library.seed(seed::authors()?, seed::courses())?;
        Ok(library)
    }

    /// Insert authors and courses directly
    pub fn seed(&self, authors: Vec<Author>, courses: Vec<Course>) -> Result<()> {
        let mut stored_authors = self
            .authors
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        let mut stored_courses = self
            .courses
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        for author in authors {
            stored_authors.insert(author.id, author);
        }
        for course in courses {
            stored_courses.insert(course.id, course);
        }

        tracing::debug!(
            authors = stored_authors.len(),
            courses = stored_courses.len(),
            "seeded in-memory course library"
        );
        Ok(())
    }
}

fn matches_query(author: &Author, query: &AuthorsQuery) -> bool {
    let category_matches = query.main_category.as_deref().is_none_or(|category| {
        author
            .main_category
            .trim()
            .eq_ignore_ascii_case(category.trim())
    });

    let search_matches = query.search_query.as_deref().is_none_or(|search| {
        let search = search.trim().to_lowercase();
        [&author.main_category, &author.first_name, &author.last_name]
            .iter()
            .any(|value| value.to_lowercase().contains(&search))
    });

    category_matches && search_matches
}

#[async_trait]
impl CourseLibraryRepository for InMemoryCourseLibrary {
    async fn get_authors(&self, query: &AuthorsQuery) -> Result<PagedList<Author>> {
        let authors = self
            .authors
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut matching: Vec<Author> = authors
            .values()
            .filter(|author| matches_query(author, query))
            .cloned()
            .collect();
        drop(authors);

        apply_sort(&mut matching, &query.sort);
        Ok(PagedList::create(
            matching,
            query.page_number,
            query.page_size,
        ))
    }

    async fn get_authors_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Author>> {
        let authors = self
            .authors
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(ids.iter().filter_map(|id| authors.get(id).cloned()).collect())
    }

    async fn get_author(&self, id: &Uuid) -> Result<Option<Author>> {
        let authors = self
            .authors
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(authors.get(id).cloned())
    }

    async fn author_exists(&self, id: &Uuid) -> Result<bool> {
        let authors = self
            .authors
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(authors.contains_key(id))
    }

    async fn add_author(&self, author: Author, courses: Vec<Course>) -> Result<Author> {
        let mut authors = self
            .authors
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        let mut stored_courses = self
            .courses
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        for course in courses {
            stored_courses.insert(
                course.id,
                Course {
                    author_id: author.id,
                    ..course
                },
            );
        }
        authors.insert(author.id, author.clone());

        Ok(author)
    }

    async fn delete_author(&self, id: &Uuid) -> Result<bool> {
        let mut authors = self
            .authors
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;
        let mut courses = self
            .courses
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if authors.shift_remove(id).is_none() {
            return Ok(false);
        }
        courses.retain(|_, course| &course.author_id != id);

        Ok(true)
    }

    async fn get_courses(&self, author_id: &Uuid) -> Result<Vec<Course>> {
        let courses = self
            .courses
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let mut result: Vec<Course> = courses
            .values()
            .filter(|course| &course.author_id == author_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.title.cmp(&b.title));

        Ok(result)
    }

    async fn get_course(&self, author_id: &Uuid, course_id: &Uuid) -> Result<Option<Course>> {
        let courses = self
            .courses
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(courses
            .get(course_id)
            .filter(|course| &course.author_id == author_id)
            .cloned())
    }

    async fn course_exists(&self, course_id: &Uuid) -> Result<bool> {
        let courses = self
            .courses
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(courses.contains_key(course_id))
    }

    async fn add_course(&self, course: Course) -> Result<Course> {
        // Authors stay locked until the course is stored
        let authors = self
            .authors
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
        let mut courses = self
            .courses
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if !authors.contains_key(&course.author_id) {
            return Err(anyhow!("Author {} does not exist", course.author_id));
        }

        if courses.contains_key(&course.id) {
            return Err(anyhow!("Course {} already exists", course.id));
        }
        courses.insert(course.id, course.clone());

        Ok(course)
    }

    async fn update_course(&self, course: Course) -> Result<Course> {
        let mut courses = self
            .courses
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        match courses.get_mut(&course.id) {
            Some(stored) => {
                *stored = course.clone();
                Ok(course)
            }
            None => Err(anyhow!("Course {} does not exist", course.id)),
        }
    }

    async fn delete_course(&self, author_id: &Uuid, course_id: &Uuid) -> Result<bool> {
        let mut courses = self
            .courses
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let owned = courses
            .get(course_id)
            .is_some_and(|course| &course.author_id == author_id);
        if owned {
            courses.shift_remove(course_id);
        }

        Ok(owned)
    }
}
