//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;
use tabstrip_common::{ConfigError, Orientation, Variant};

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_tabstrip_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[strip]
orientation = "vertical"
variant = "line"
closable = true
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.strip.orientation, Orientation::Vertical);
    assert_eq!(config.strip.variant, Variant::Line);
    assert!(config.strip.closable);
    // Defaults preserved
    assert_eq!(config.strip.prefix_cls, "zw-tabs");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[strip]
arrow_padding = 900.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.strip.arrow_padding - 900.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tabstrip").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.strip.variant, Variant::Card);
    assert_eq!(config.strip.prefix_cls, "zw-tabs");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;

    let config = load_from_str(&default_config_toml()).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // Not every CI environment has a config dir
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("tabstrip"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn load_from_path_only_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.logging.level, "loud");
}

#[test]
fn parse_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[strip\n").unwrap();

    match load_from_path(&path) {
        Err(ConfigError::ParseError(msg)) => assert!(msg.contains("broken.toml")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[strip]\nclosable = true\n").unwrap();

    create_default_config(&path).unwrap();
    assert!(load_from_path(&path).unwrap().strip.closable);
}
