//! Server host
//!
//! The host holds everything needed to expose the API: configuration, the
//! repository, the frozen property mappings and the registered entities.
//! Exposures such as [`RestExposure`](super::exposure::RestExposure) turn it
//! into a router.

use crate::config::AppConfig;
use crate::core::mapping::PropertyMappingService;
use crate::core::service::CourseLibraryRepository;
use crate::server::entity_registry::EntityRegistry;
use crate::server::state::AppState;
use std::sync::Arc;

/// Host context containing all server state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerBuilder::new()
///     .with_repository(InMemoryCourseLibrary::seeded()?)
///     .register_module(CourseLibraryModule)
///     .build_host()?;
///
/// let app = RestExposure::build_router(Arc::new(host), vec![])?;
/// ```
pub struct ServerHost {
    /// Loaded application configuration
    pub config: Arc<AppConfig>,

    /// Storage for authors and courses
    pub repository: Arc<dyn CourseLibraryRepository>,

    /// Sort mappings registered by the modules, read-only from here on
    pub property_mappings: Arc<PropertyMappingService>,

    /// Entity registry for resource routes
    pub entity_registry: EntityRegistry,
}

impl ServerHost {
    pub fn new(
        config: AppConfig,
        repository: Arc<dyn CourseLibraryRepository>,
        property_mappings: PropertyMappingService,
        entity_registry: EntityRegistry,
    ) -> Self {
        Self {
            config: Arc::new(config),
            repository,
            property_mappings: Arc::new(property_mappings),
            entity_registry,
        }
    }

    /// Get entity types registered in the host
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }

    /// State shared by every handler
    pub fn app_state(&self) -> AppState {
        AppState {
            repository: self.repository.clone(),
            property_mappings: self.property_mappings.clone(),
            config: self.config.clone(),
        }
    }
}
