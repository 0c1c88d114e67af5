//! Tests for the config module

use super::loader::with_overrides;
use super::types::*;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.events.sink, EventSinkKind::Tracing);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[events]
sink = "json"

[logging]
level = "shipyard=debug"
format = "json"
"#;

    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.events.sink, EventSinkKind::Json);
    assert_eq!(config.logging.level, "shipyard=debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_config_partial_toml_keeps_defaults() {
    let config: Config = toml::from_str("[events]\nsink = \"none\"\n").unwrap();
    assert_eq!(config.events.sink, EventSinkKind::None);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shipyard.toml");
    fs::write(
        &path,
        r#"
[events]
snk = "json"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.events.sink, EventSinkKind::Tracing);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "snk");
    assert_eq!(warnings[0].line, Some(3));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("sink"));
}

#[test]
fn test_load_invalid_toml_is_a_validation_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shipyard.toml");
    fs::write(&path, "[events]\nsink = \"carrier-pigeon\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert_eq!(err.kind(), crate::error::ErrorKind::Validation);
}

#[test]
fn test_load_missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, crate::error::ShipyardError::Io(_)));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempdir().unwrap();
    let config = Config::load_or_default(Some(&dir.path().join("missing.toml")));
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn test_env_overrides() {
    let config = with_overrides(
        Config::default(),
        vars(&[
            ("SHIPYARD_EVENTS", "json"),
            ("SHIPYARD_LOG", "warn"),
            ("SHIPYARD_LOG_FORMAT", "JSON"),
        ]),
    );

    assert_eq!(config.events.sink, EventSinkKind::Json);
    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_invalid_env_override_is_ignored() {
    let config = with_overrides(
        Config::default(),
        vars(&[("SHIPYARD_EVENTS", "carrier-pigeon"), ("SHIPYARD_LOG", " ")]),
    );

    assert_eq!(config.events.sink, EventSinkKind::Tracing);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_event_sink_kind_from_str() {
    assert_eq!("JSON".parse::<EventSinkKind>(), Ok(EventSinkKind::Json));
    assert_eq!("off".parse::<EventSinkKind>(), Ok(EventSinkKind::None));
    assert!("stdout".parse::<EventSinkKind>().is_err());
}
