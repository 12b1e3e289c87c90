mod common;

use mvu::config::{Config, ConfigError, LoggingConfig, RuntimeConfig};

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.runtime.max_messages, None);
    assert_eq!(config.logging.filter, "info");
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("mvu/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let (dir, _) = common::temp_config("");
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.runtime, RuntimeConfig::default());
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_empty_file_yields_defaults() {
    let (_dir, path) = common::temp_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.runtime.max_messages, None);
    assert_eq!(config.logging.filter, "info");
}

#[test]
fn test_parses_all_sections() {
    let (_dir, path) = common::temp_config(
        r#"[runtime]
max_messages = 500

[logging]
filter = "mvu=debug"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.runtime.max_messages, Some(500));
    assert_eq!(config.logging.filter, "mvu=debug");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = common::temp_config("[runtime\nmax_messages = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

/// Test validation fails when the message budget is zero.
#[test]
fn test_validation_fails_zero_budget() {
    let (_dir, path) = common::temp_config("[runtime]\nmax_messages = 0\n");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("max_messages"));
        }
        _ => panic!("Expected ValidationError"),
    }
}

#[test]
fn test_validation_fails_blank_filter() {
    let config = Config {
        logging: LoggingConfig {
            filter: "   ".to_string(),
        },
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}
