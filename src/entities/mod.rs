//! Resources served by the course library

pub mod macros;

pub mod author;
pub mod author_collection;
pub mod course;
pub mod module;

pub use module::CourseLibraryModule;
