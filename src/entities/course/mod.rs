//! Courses resource, nested under authors

pub mod descriptor;
pub mod dto;
pub mod handlers;
pub mod model;

pub use descriptor::CourseDescriptor;
pub use dto::{CourseDto, CourseForCreationDto, CourseForUpdateDto};
pub use model::Course;
