//! Sample authors and courses loaded into an empty store

use crate::entities::author::Author;
use crate::entities::course::Course;
use anyhow::{Result, anyhow};
use chrono::{DateTime, FixedOffset, NaiveDate};
use uuid::{Uuid, uuid};

/// Offset the sample dates were recorded in (+01:00)
const SEED_OFFSET_SECONDS: i32 = 3600;

fn date(year: i32, month: u32, day: u32) -> Result<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(SEED_OFFSET_SECONDS)
        .ok_or_else(|| anyhow!("invalid seed offset"))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(|datetime| datetime.and_local_timezone(offset).single())
        .ok_or_else(|| anyhow!("invalid seed date {}-{}-{}", year, month, day))
}

fn author(
    id: Uuid,
    first_name: &str,
    last_name: &str,
    date_of_birth: DateTime<FixedOffset>,
    main_category: &str,
) -> Author {
    Author {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth,
        date_of_death: None,
        main_category: main_category.to_string(),
    }
}

fn course(id: Uuid, author_id: Uuid, title: &str, description: &str) -> Course {
    Course {
        id,
        title: title.to_string(),
        description: Some(description.to_string()),
        author_id,
    }
}

pub const BERRY_ID: Uuid = uuid!("d28888e9-2ba9-473a-a40f-e38cb54f9b35");
pub const NANCY_ID: Uuid = uuid!("da2fd609-d754-4feb-8acd-c4f9ff13ba96");
pub const ELI_ID: Uuid = uuid!("2902b665-1190-4c70-9915-b9c2d7680450");
pub const ARNOLD_ID: Uuid = uuid!("102b566b-ba1f-404c-b2df-e2cde39ade09");
pub const SEABURY_ID: Uuid = uuid!("5b3621c0-7b12-4e80-9c8b-3398cba7ee05");
pub const RUSHFORD_ID: Uuid = uuid!("2aadd2df-7caf-45ab-9355-7f6332985a87");

/// The sample authors, in insertion order
pub fn authors() -> Result<Vec<Author>> {
    Ok(vec![
        author(BERRY_ID, "Berry", "Griffin Beak Eldritch", date(1650, 7, 23)?, "Ships"),
        author(NANCY_ID, "Nancy", "Rye", date(1668, 5, 21)?, "Rum"),
        author(ELI_ID, "Eli", "Ivory Bones Sweet", date(1701, 12, 16)?, "Singing"),
        author(ARNOLD_ID, "Arnold", "Hunter", date(1702, 3, 6)?, "Singing"),
        author(SEABURY_ID, "Seabury", "Toxic Reyes", date(1690, 11, 23)?, "Maps"),
        author(RUSHFORD_ID, "Rushford", "Mour", date(1723, 3, 5)?, "General debauchery"),
    ])
}

/// The sample courses
pub fn courses() -> Vec<Course> {
    vec![
        course(
            uuid!("5b1c2b4d-48c7-402a-80c3-cc796ad49c6b"),
            BERRY_ID,
            "Commandeering a Ship Without Getting Caught",
            "Commandeering a ship in rough waters isn't easy.  Commandeering it without getting caught is even harder.  In this course you'll learn how to sail away and avoid those pesky musketeers.",
        ),
        course(
            uuid!("d8663e5e-7494-4f81-8739-6e0de1bea7ee"),
            BERRY_ID,
            "Overthrowing Mutiny",
            "In this course, the author provides tips to avoid, or, if needed, overthrow pirate mutiny.",
        ),
        course(
            uuid!("d173e20d-159e-4127-9ce9-b0ac2564ad97"),
            NANCY_ID,
            "Avoiding Brawls While Drinking as Much Rum as You Desire",
            "Every good pirate loves rum, but it also has a tendency to get you into trouble.  In this course you'll learn how to avoid that.  This new exclusive edition includes an additional chapter on how to run fast without falling while drunk.",
        ),
        course(
            uuid!("40ff5488-fdab-45b5-bc3a-14302d59869a"),
            ELI_ID,
            "Singalong Pirate Hits",
            "In this course you'll learn how to sing all-time favourite pirate songs without sounding like you actually know the words or how to hold a note.",
        ),
    ]
}
