//! Course library server
//!
//! Reads its configuration from the file named by `COURSE_LIBRARY_CONFIG`
//! (defaults otherwise) and serves the API until Ctrl+C or SIGTERM.

use anyhow::Result;
use course_library::config::{AppConfig, StorageBackend};
use course_library::core::service::CourseLibraryRepository;
use course_library::entities::CourseLibraryModule;
use course_library::server::ServerBuilder;
use course_library::storage::InMemoryCourseLibrary;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("course_library=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::load()?;
    let repository = build_repository(&config).await?;
    let addr = config.server.address();

    tracing::info!(
        backend = ?config.storage.backend,
        max_page_size = config.paging.max_page_size,
        "starting course library"
    );

    ServerBuilder::new()
        .with_shared_repository(repository)
        .with_config(config)
        .register_module(CourseLibraryModule)
        .serve(&addr)
        .await
}

async fn build_repository(config: &AppConfig) -> Result<Arc<dyn CourseLibraryRepository>> {
    match config.storage.backend {
        StorageBackend::InMemory => {
            let library = if config.storage.seed {
                InMemoryCourseLibrary::seeded()?
            } else {
                InMemoryCourseLibrary::new()
            };
            Ok(Arc::new(library))
        }
        StorageBackend::Postgres => postgres_repository(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn postgres_repository(config: &AppConfig) -> Result<Arc<dyn CourseLibraryRepository>> {
    use course_library::storage::postgres::{PostgresCourseLibrary, migrate};
    use sqlx::postgres::PgPoolOptions;

    let url = config.storage.database_url.as_deref().ok_or_else(|| {
        anyhow::anyhow!("storage.database_url (or DATABASE_URL) is required for postgres")
    })?;

    let pool = PgPoolOptions::new().max_connections(5).connect(url).await?;
    migrate(&pool).await?;

    let library = PostgresCourseLibrary::new(pool);
    if config.storage.seed && library.seed_if_empty().await? {
        tracing::info!("inserted sample authors and courses");
    }
    Ok(Arc::new(library))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_repository(_config: &AppConfig) -> Result<Arc<dyn CourseLibraryRepository>> {
    anyhow::bail!("the postgres backend requires building with `--features postgres`")
}
