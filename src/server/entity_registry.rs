//! Entity registry collecting the resource routes of every module

use crate::server::state::AppState;
use axum::Router;
use std::collections::HashMap;

/// Trait that describes how to build routes for a resource
///
/// Each descriptor attaches the shared [`AppState`] to its own routes, along
/// with any layer specific to the resource. Path parameters that share a
/// position must share a name across descriptors (`{author_id}` for authors).
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "author")
    fn entity_type(&self) -> &str;

    /// The plural form used in URLs (e.g., "authors")
    fn plural(&self) -> &str;

    /// Build the routes for this resource
    fn build_routes(&self, state: AppState) -> Router;
}

/// Registry for all resources in the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: HashMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// The entity type name will be used as the key.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered resource routes
    pub fn build_routes(&self, state: AppState) -> Router {
        let mut router = Router::new();

        for descriptor in self.descriptors.values() {
            router = router.merge(descriptor.build_routes(state.clone()));
        }

        router
    }

    /// Get all registered entity types
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}
