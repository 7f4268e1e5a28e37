//! Configuration loading and management
//!
//! Every section has defaults, so an empty YAML document is a valid
//! configuration:
//!
//! ```yaml
//! server:
//!   host: 127.0.0.1
//!   port: 3000
//! paging:
//!   default_page_size: 10
//!   max_page_size: 20
//! cache:
//!   max_age_seconds: 120
//! storage:
//!   backend: in-memory        # or: postgres
//!   database_url: postgres://localhost/course_library
//!   seed: true
//! ```

use crate::core::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "COURSE_LIBRARY_CONFIG";

/// Environment variable used when no database URL is configured
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub paging: PagingConfig,
    pub cache: CacheConfig,
    pub storage: StorageConfig,
}

/// Listening address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port`, as accepted by `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Page size bounds for collection resources
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PagingConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 20,
        }
    }
}

/// Response caching headers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    pub max_age_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_age_seconds: 120,
        }
    }
}

impl CacheConfig {
    /// Value of the `Cache-Control` header for cacheable responses
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.max_age_seconds)
    }
}

/// Which repository implementation backs the API
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    #[default]
    InMemory,
    Postgres,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    /// Connection string for the postgres backend
    pub database_url: Option<String>,

    /// Load the sample authors and courses into an empty store
    pub seed: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::InMemory,
            database_url: None,
            seed: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: e.to_string(),
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file named by `COURSE_LIBRARY_CONFIG`, or the defaults
    ///
    /// `DATABASE_URL` fills in a missing `storage.database_url`.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                tracing::info!(path = %path, "loading configuration");
                Self::from_yaml_file(path)?
            }
            Err(_) => {
                tracing::info!("{} not set, using default configuration", CONFIG_PATH_ENV);
                Self::default()
            }
        };

        if config.storage.database_url.is_none() {
            config.storage.database_url = std::env::var(DATABASE_URL_ENV).ok();
        }

        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paging.max_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "paging.max_page_size".to_string(),
                value: self.paging.max_page_size.to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.paging.default_page_size == 0
            || self.paging.default_page_size > self.paging.max_page_size
        {
            return Err(ConfigError::InvalidValue {
                field: "paging.default_page_size".to_string(),
                value: self.paging.default_page_size.to_string(),
                message: format!("must be between 1 and {}", self.paging.max_page_size),
            });
        }

        if self.storage.backend == StorageBackend::Postgres && self.storage.database_url.is_none()
        {
            tracing::warn!("postgres backend selected without storage.database_url");
        }

        Ok(())
    }

    /// Merge multiple configurations, later ones winning
    ///
    /// A value only overrides the accumulated result when it differs from the
    /// default, so an override file only needs the settings it changes.
    pub fn merge(configs: Vec<AppConfig>) -> Self {
        let defaults = AppConfig::default();
        let mut merged = AppConfig::default();

        for config in configs {
            if config.server.host != defaults.server.host {
                merged.server.host = config.server.host;
            }
            if config.server.port != defaults.server.port {
                merged.server.port = config.server.port;
            }

            if config.paging.default_page_size != defaults.paging.default_page_size {
                merged.paging.default_page_size = config.paging.default_page_size;
            }
            if config.paging.max_page_size != defaults.paging.max_page_size {
                merged.paging.max_page_size = config.paging.max_page_size;
            }

            if config.cache.max_age_seconds != defaults.cache.max_age_seconds {
                merged.cache.max_age_seconds = config.cache.max_age_seconds;
            }

            if config.storage.backend != defaults.storage.backend {
                merged.storage.backend = config.storage.backend;
            }
            if config.storage.database_url.is_some() {
                merged.storage.database_url = config.storage.database_url;
            }
            if config.storage.seed != defaults.storage.seed {
                merged.storage.seed = config.storage.seed;
            }
        }

        merged
    }
}
