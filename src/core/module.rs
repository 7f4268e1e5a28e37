//! Module system
//!
//! A module bundles entity descriptors with the property mappings their
//! handlers rely on.

use crate::core::mapping::PropertyMappingService;
use crate::server::entity_registry::EntityRegistry;

/// Trait for an API module
pub trait Module: Send + Sync {
    /// Unique module name
    fn name(&self) -> &str;

    /// Module version
    fn version(&self) -> &str {
        "1.0.0"
    }

    /// List of entity types managed by this module
    fn entity_types(&self) -> Vec<&str>;

    /// Register entities with the entity registry
    ///
    /// Each entity descriptor provides the routes for that entity.
    fn register_entities(&self, registry: &mut EntityRegistry);

    /// Register the sort mappings used by this module's handlers
    ///
    /// Called once while the server is built; the service is read-only
    /// afterwards.
    fn register_property_mappings(&self, _mappings: &mut PropertyMappingService) {}
}
