//! Authors resource

pub mod descriptor;
pub mod dto;
pub mod handlers;
pub mod model;

pub use descriptor::AuthorDescriptor;
pub use dto::{AuthorCollectionForCreation, AuthorDto, AuthorForCreationDto, author_property_mapping};
pub use model::Author;
