use super::{Config, ConfigKey};
use crate::core::types::MetadataKind;
use crate::errors::Error;
use std::fs;
use std::path::PathBuf;

fn temp_config_path(name: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("courseplan-config-{name}-{nanos}.json"))
}

#[test]
fn load_or_init_writes_defaults_when_missing() {
    let path = temp_config_path("init");
    assert!(!path.exists());

    let config = Config::load_or_init(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.metadata_kind(), MetadataKind::Url);
    assert_eq!(config.url_placeholder(), "https://example.com/course");
    assert!(config.xpath_placeholder().starts_with("/html/body"));
    assert!(config.file_logging_enabled());
}

#[test]
fn load_from_errors_when_missing_or_invalid() {
    let path = temp_config_path("missing");
    match Config::load_from(&path) {
        Err(Error::Config(msg)) => assert!(msg.contains("not found")),
        other => panic!("expected config error, got {other:?}"),
    }

    fs::write(&path, "not-json").unwrap();
    match Config::load_from(&path) {
        Err(Error::Config(msg)) => assert!(msg.contains("Invalid JSON")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn rows_follow_key_order() {
    let path = temp_config_path("rows");
    let config = Config::load_or_init(&path).unwrap();
    let rows = config.rows();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].0, "METADATA_KIND");
    assert_eq!(rows[1].0, "URL_PLACEHOLDER");
    assert_eq!(rows[2].0, "XPATH_PLACEHOLDER");
    assert_eq!(rows[3].0, "FILE_LOGGING_ENABLED");
}

#[test]
fn set_key_persists_and_stashes_last_change() {
    let path = temp_config_path("set");
    let mut config = Config::load_or_init(&path).unwrap();

    config.set_key(ConfigKey::MetadataKind, "xpath").unwrap();
    assert_eq!(config.metadata_kind(), MetadataKind::Xpath);

    let (key, old, new) = config.take_last_change().expect("change stashed");
    assert_eq!(key, "METADATA_KIND");
    assert_eq!(old, "url");
    assert_eq!(new, "xpath");
    assert!(config.take_last_change().is_none());

    // The change survives a reload.
    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.metadata_kind(), MetadataKind::Xpath);
}

#[test]
fn set_key_rejects_invalid_values_without_mutating() {
    let path = temp_config_path("invalid");
    let mut config = Config::load_or_init(&path).unwrap();

    assert!(config.set_key(ConfigKey::MetadataKind, "csv").is_err());
    assert_eq!(config.metadata_kind(), MetadataKind::Url);

    assert!(config.set_key(ConfigKey::UrlPlaceholder, "not a url").is_err());
    assert_eq!(config.url_placeholder(), "https://example.com/course");

    assert!(config.set_key(ConfigKey::XpathPlaceholder, "   ").is_err());
    assert!(config.xpath_placeholder().starts_with("/html/body"));

    assert!(config.set_key(ConfigKey::FileLoggingEnabled, "maybe").is_err());
    assert!(config.file_logging_enabled());

    // No change was stashed for failed updates.
    assert!(config.take_last_change().is_none());
}

#[test]
fn set_by_index_and_named_set_agree() {
    let path = temp_config_path("by-index");
    let mut config = Config::load_or_init(&path).unwrap();

    config.set_by_index(3, "False").unwrap();
    assert!(!config.file_logging_enabled());

    config.set("FILE_LOGGING_ENABLED", "True").unwrap();
    assert!(config.file_logging_enabled());

    assert!(config.set_by_index(99, "x").is_err());
    match config.set("NOT_A_KEY", "x") {
        Err(Error::Parse(msg)) => assert!(msg.contains("Valid keys")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn placeholder_follows_metadata_kind() {
    let path = temp_config_path("placeholder");
    let mut config = Config::load_or_init(&path).unwrap();

    assert_eq!(config.placeholder(), "https://example.com/course");
    config.set_key(ConfigKey::MetadataKind, "xpath").unwrap();
    assert!(config.placeholder().starts_with("/html/body"));
}
