mod common;

use common::temp_config;
use termfolio::config::{default_phrases, Config, ConfigError, ConfigStore, ThemeMode};

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.site.owner, "Chaveen Dias");
    assert_eq!(config.site.theme, ThemeMode::Dark);
    assert_eq!(config.site.phrases, default_phrases());
    assert_eq!(config.site.phrases.len(), 3);

    assert_eq!(config.typewriter.type_ms, 100);
    assert_eq!(config.typewriter.delete_ms, 50);
    assert_eq!(config.typewriter.hold_ms, 1500);
    assert_eq!(config.typewriter.pause_ms, 200);

    assert_eq!(config.contact.success_reset_ms, 5000);
    assert!(config.contact.endpoint.ends_with("/api/contact"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("termfolio/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[site]
owner = "Grace Hopper"
theme = "light"
phrases = ["Compilers.", "COBOL."]

[typewriter]
hold_ms = 900
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.site.owner, "Grace Hopper");
    assert_eq!(config.site.theme, ThemeMode::Light);
    assert_eq!(config.site.phrases, vec!["Compilers.", "COBOL."]);
    assert_eq!(config.typewriter.hold_ms, 900);
    assert_eq!(config.typewriter.type_ms, 100);
    assert_eq!(config.server, Config::default().server);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[site\nowner = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_unknown_theme_is_parse_error() {
    let (_dir, path) = temp_config("[site]\ntheme = \"sepia\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_empty_phrase_list_fails_validation() {
    let (_dir, path) = temp_config("[site]\nphrases = []\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("At least one typewriter phrase"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_blank_phrase_fails_validation() {
    let mut config = Config::default();
    config.site.phrases = vec!["ok".into(), String::new()];
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => assert!(message.contains("#2")),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_zero_timing_fails_validation() {
    let mut config = Config::default();
    config.typewriter.delete_ms = 0;
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("typewriter.delete_ms"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_zero_request_timeout_fails_validation() {
    let (_dir, path) = temp_config("[contact]\ntimeout_seconds = 0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("contact.timeout_seconds"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_blank_endpoint_and_recipient_fail_validation() {
    let mut config = Config::default();
    config.contact.endpoint = "  ".into();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.server.recipient = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_bad_bind_addr_fails_validation() {
    let mut config = Config::default();
    config.server.bind_addr = "localhost".into();
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("Invalid bind address"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_store_reload_picks_up_changes_and_keeps_old_on_error() {
    let (_dir, path) = temp_config("[site]\nowner = \"First\"\n");
    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());
    assert_eq!(store.get().site.owner, "First");

    std::fs::write(&path, "[site]\nowner = \"Second\"\n").unwrap();
    store.reload().unwrap();
    assert_eq!(store.get().site.owner, "Second");

    std::fs::write(&path, "[typewriter]\ntype_ms = 0\n").unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.get().site.owner, "Second");
}

#[test]
fn test_store_update_applies_override() {
    let store = ConfigStore::new(Config::default(), "/tmp/termfolio-test.toml".into());
    store.update(|c| c.site.theme = ThemeMode::Light);
    assert_eq!(store.get().site.theme, ThemeMode::Light);
    assert_eq!(store.path(), std::path::Path::new("/tmp/termfolio-test.toml"));
}
