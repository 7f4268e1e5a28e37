//! Storage implementations for different backends

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod seed;

pub use in_memory::InMemoryCourseLibrary;
#[cfg(feature = "postgres")]
pub use postgres::PostgresCourseLibrary;
