//! Course persistence entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A course, always owned by one author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub author_id: Uuid,
}

impl Course {
    /// Create a course with a fresh id
    pub fn new(author_id: Uuid, title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description,
            author_id,
        }
    }
}
