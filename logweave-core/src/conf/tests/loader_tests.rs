use crate::conf::{ConfigError, EngineConfig, LogweaveConfig, load_config, load_config_or_default};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_engine_and_sources() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logweave.hcl");
    fs::write(
        &path,
        r#"
engine {
  page_size              = 25
  metric_cap             = 100
  max_concurrent_sources = 3
}

sources {
  include = ["logs/*.log", "more/**/*.json"]
}
"#,
    )
    .unwrap();

    // Act
    let loaded = load_config(&path).unwrap();

    // Assert
    assert_eq!(
        loaded.config,
        LogweaveConfig {
            engine: EngineConfig {
                page_size: 25,
                metric_cap: 100,
                max_concurrent_sources: 3,
            },
            sources: crate::conf::SourcesConfig {
                include: vec!["logs/*.log".into(), "more/**/*.json".into()],
            },
        }
    );
    assert_eq!(loaded.root, dir.path());
    assert_eq!(loaded.origin.as_deref(), Some(path.as_path()));
}

#[test]
fn missing_settings_take_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logweave.hcl");
    fs::write(&path, "engine {\n  page_size = 10\n}\n").unwrap();

    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded.config.engine.page_size, 10);
    assert_eq!(loaded.config.engine.metric_cap, 500);
    assert!(loaded.config.sources.include.is_empty());
}

#[test]
fn zero_settings_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logweave.hcl");

    fs::write(&path, "engine {\n  page_size = 0\n}\n").unwrap();
    assert!(matches!(
        load_config(&path),
        Err(ConfigError::InvalidPageSize { .. })
    ));

    fs::write(&path, "engine {\n  metric_cap = 0\n}\n").unwrap();
    assert!(matches!(
        load_config(&path),
        Err(ConfigError::InvalidMetricCap { .. })
    ));

    fs::write(&path, "engine {\n  max_concurrent_sources = 0\n}\n").unwrap();
    assert!(matches!(
        load_config(&path),
        Err(ConfigError::InvalidConcurrency { .. })
    ));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logweave.hcl");
    fs::write(&path, "engine {\n  page_size = \n").unwrap();

    assert!(matches!(load_config(&path), Err(ConfigError::Parse { .. })));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().unwrap();

    let result = load_config_or_default(Some(&dir.path().join("nope.hcl")));

    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}
