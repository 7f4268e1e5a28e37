//! Shared state handed to every route

use crate::config::AppConfig;
use crate::core::mapping::PropertyMappingService;
use crate::core::service::CourseLibraryRepository;
use std::sync::Arc;

/// Application state for the axum routers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn CourseLibraryRepository>,
    pub property_mappings: Arc<PropertyMappingService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Default and maximum page size of the authors collection
    pub fn page_limits(&self) -> (usize, usize) {
        (
            self.config.paging.default_page_size,
            self.config.paging.max_page_size,
        )
    }
}
