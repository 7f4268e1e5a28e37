//! Author collections: several authors created or fetched in one request

pub mod descriptor;
pub mod handlers;

pub use descriptor::AuthorCollectionDescriptor;
