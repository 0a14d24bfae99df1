use crate::conf::{ConfigError, discover, resolve_glob};

use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn patterns(p: &[&str]) -> Vec<String> {
    p.iter().map(|s| s.to_string()).collect()
}

#[test]
fn discover_finds_matching_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("a.log"), "").unwrap();
    fs::write(root.join("b.log"), "").unwrap();
    fs::write(root.join("c.txt"), "").unwrap();

    // Act
    let result = discover(root, &patterns(&["*.log"])).unwrap();

    // Assert
    assert_eq!(result, vec![root.join("a.log"), root.join("b.log")]);
}

#[test]
fn discover_merges_patterns_sorted_without_duplicates() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::write(root.join("z.log"), "").unwrap();
    fs::write(root.join("a.json"), "").unwrap();
    fs::write(root.join("m.log"), "").unwrap();

    // Act
    let result = discover(root, &patterns(&["*.log", "*.json", "m.log"])).unwrap();

    // Assert
    assert_eq!(
        result,
        vec![root.join("a.json"), root.join("m.log"), root.join("z.log")]
    );
}

#[test]
fn discover_supports_recursive_globs() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("nested/inner")).unwrap();
    fs::write(root.join("root.log"), "").unwrap();
    fs::write(root.join("nested/a.log"), "").unwrap();
    fs::write(root.join("nested/inner/b.log"), "").unwrap();

    // Act
    let result = discover(root, &patterns(&["**/*.log"])).unwrap();

    // Assert
    assert_eq!(
        result,
        vec![
            root.join("nested/a.log"),
            root.join("nested/inner/b.log"),
            root.join("root.log"),
        ]
    );
}

#[test]
fn discover_passes_plain_paths_through() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    // Act
    let result = discover(root, &patterns(&["missing.log"])).unwrap();

    // Assert
    assert_eq!(result, vec![root.join("missing.log")]);
}

#[test]
fn discover_filters_out_directories() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("archive.log")).unwrap();

    // Act
    let result = discover(root, &patterns(&["*.log", "archive.log"])).unwrap();

    // Assert
    assert!(result.is_empty());
}

#[test]
fn discover_returns_error_for_invalid_glob() {
    // Arrange
    let dir = tempdir().unwrap();
    let root = dir.path();

    // Act
    let err = discover(root, &patterns(&["["])).unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::Glob { .. }));
}

#[test]
fn resolve_glob_keeps_absolute_patterns() {
    assert_eq!(resolve_glob(Path::new("/srv"), "/var/log/*.log"), "/var/log/*.log");
    assert_eq!(resolve_glob(Path::new("/srv"), "logs/*.log"), "/srv/logs/*.log");
}
