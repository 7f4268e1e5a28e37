//! Module definition for the course library
//!
//! Serves authors, their courses and author collections, and registers the
//! sort mapping the authors collection resolves `orderBy` with.

use crate::core::mapping::PropertyMappingService;
use crate::core::module::Module;
use crate::entities::author::{Author, AuthorDescriptor, AuthorDto, author_property_mapping};
use crate::entities::author_collection::AuthorCollectionDescriptor;
use crate::entities::course::CourseDescriptor;
use crate::server::entity_registry::EntityRegistry;

pub struct CourseLibraryModule;

impl Module for CourseLibraryModule {
    fn name(&self) -> &str {
        "course-library"
    }

    fn entity_types(&self) -> Vec<&str> {
        vec!["author", "course", "author_collection"]
    }

    fn register_entities(&self, registry: &mut EntityRegistry) {
        registry.register(Box::new(AuthorDescriptor));
        registry.register(Box::new(CourseDescriptor));
        registry.register(Box::new(AuthorCollectionDescriptor));
    }

    fn register_property_mappings(&self, mappings: &mut PropertyMappingService) {
        mappings.register::<AuthorDto, Author>(author_property_mapping());
    }
}
