//! Integration tests for loading and layering configuration files

use course_library::config::{AppConfig, StorageBackend};
use course_library::core::error::ConfigError;
use std::io::Write;

fn write_config(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_merge_empty_configs() {
    assert_eq!(AppConfig::merge(vec![]), AppConfig::default());
}

#[test]
fn test_merge_override_keeps_base_values() {
    let base = AppConfig::from_yaml_str(
        r#"
server:
  host: 0.0.0.0
  port: 8080
paging:
  default_page_size: 5
  max_page_size: 50
storage:
  backend: postgres
  database_url: postgres://db/library
"#,
    )
    .unwrap();

    let local = AppConfig::from_yaml_str(
        r#"
server:
  port: 9090
cache:
  max_age_seconds: 30
"#,
    )
    .unwrap();

    let merged = AppConfig::merge(vec![base, local]);

    assert_eq!(merged.server.host, "0.0.0.0");
    assert_eq!(merged.server.port, 9090);
    assert_eq!(merged.paging.default_page_size, 5);
    assert_eq!(merged.paging.max_page_size, 50);
    assert_eq!(merged.cache.max_age_seconds, 30);
    assert_eq!(merged.storage.backend, StorageBackend::Postgres);
    assert_eq!(
        merged.storage.database_url.as_deref(),
        Some("postgres://db/library")
    );
}

#[test]
fn test_merge_later_config_wins() {
    let first = AppConfig::from_yaml_str("cache:\n  max_age_seconds: 30\n").unwrap();
    let second = AppConfig::from_yaml_str("cache:\n  max_age_seconds: 600\n").unwrap();

    let merged = AppConfig::merge(vec![first, second]);
    assert_eq!(merged.cache.cache_control(), "public, max-age=600");
}

#[test]
fn test_from_yaml_file() {
    let file = write_config(
        r#"
paging:
  default_page_size: 3
  max_page_size: 6
storage:
  seed: false
"#,
    );

    let config = AppConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.paging.default_page_size, 3);
    assert_eq!(config.paging.max_page_size, 6);
    assert!(!config.storage.seed);
}

#[test]
fn test_from_yaml_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = AppConfig::from_yaml_file(&path).unwrap_err();
    assert!(matches!(
        err.downcast::<ConfigError>().unwrap(),
        ConfigError::FileNotFound { .. }
    ));
}

#[test]
fn test_from_yaml_file_reports_file_on_parse_error() {
    let file = write_config("server: [not, a, map]\n");

    let err = AppConfig::from_yaml_file(file.path()).unwrap_err();
    match err.downcast::<ConfigError>().unwrap() {
        ConfigError::ParseError { file: Some(name), .. } => {
            assert_eq!(name, file.path().display().to_string());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_zero_max_page_size_is_rejected() {
    let err = AppConfig::from_yaml_str("paging:\n  max_page_size: 0\n").unwrap_err();
    assert!(err.to_string().contains("paging.max_page_size"));
}
