//! Author persistence entity

use chrono::{DateTime, Datelike, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An author as stored by the repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<FixedOffset>,
    pub date_of_death: Option<DateTime<FixedOffset>>,
    pub main_category: String,
}

crate::impl_shapeable!(Author {
    "id" => id,
    "first_name" => first_name,
    "last_name" => last_name,
    "date_of_birth" => date_of_birth,
    "date_of_death" => date_of_death,
    "main_category" => main_category,
});

impl Author {
    /// Create a living author with a fresh id
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: DateTime<FixedOffset>,
        main_category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            date_of_death: None,
            main_category: main_category.into(),
        }
    }

    /// Full name as shown to clients
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years at death, or today for living authors
    pub fn age(&self) -> i32 {
        let end = self
            .date_of_death
            .unwrap_or_else(|| Utc::now().fixed_offset());
        age_between(self.date_of_birth, end)
    }
}

/// Whole years elapsed between two instants, in the birth date's offset
pub fn age_between(born: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> i32 {
    let end = end.with_timezone(born.offset());
    let mut age = end.year() - born.year();
    if (end.month(), end.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    age
}
