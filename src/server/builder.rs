//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::AppConfig;
use crate::core::mapping::PropertyMappingService;
use crate::core::module::Module;
use crate::core::service::CourseLibraryRepository;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating HTTP servers with auto-registered routes
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_repository(InMemoryCourseLibrary::seeded()?)
///     .register_module(CourseLibraryModule)
///     .build()?;
/// ```
pub struct ServerBuilder {
    repository: Option<Arc<dyn CourseLibraryRepository>>,
    config: AppConfig,
    entity_registry: EntityRegistry,
    property_mappings: PropertyMappingService,
    modules: Vec<Arc<dyn Module>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            repository: None,
            config: AppConfig::default(),
            entity_registry: EntityRegistry::new(),
            property_mappings: PropertyMappingService::new(),
            modules: Vec::new(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the repository (required)
    pub fn with_repository(mut self, repository: impl CourseLibraryRepository + 'static) -> Self {
        self.repository = Some(Arc::new(repository));
        self
    }

    /// Set an already shared repository
    pub fn with_shared_repository(mut self, repository: Arc<dyn CourseLibraryRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Replace the default configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Add custom routes to the server
    ///
    /// Use this for routes that are not part of a module, such as an
    /// API root document or operational endpoints.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Register a module
    ///
    /// This will:
    /// 1. Register all entities from the module
    /// 2. Register the module's property mappings
    pub fn register_module(mut self, module: impl Module + 'static) -> Self {
        let module = Arc::new(module);

        module.register_entities(&mut self.entity_registry);
        module.register_property_mappings(&mut self.property_mappings);

        tracing::debug!(
            module = module.name(),
            version = module.version(),
            entities = ?module.entity_types(),
            "registered module"
        );
        self.modules.push(module);

        self
    }

    /// Build the host
    ///
    /// The property mappings are frozen here.
    pub fn build_host(mut self) -> Result<ServerHost> {
        let repository = self.repository.take().ok_or_else(|| {
            anyhow::anyhow!("CourseLibraryRepository is required. Call .with_repository()")
        })?;

        tracing::debug!(modules = self.modules.len(), "building server host");
        Ok(ServerHost::new(
            self.config,
            repository,
            self.property_mappings,
            self.entity_registry,
        ))
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_repository(repository)
    ///     .register_module(CourseLibraryModule)
    ///     .serve("127.0.0.1:3000").await?;
    /// ```
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
