mod common;

use common::temp_config;
use hero_slider::config::{Config, ConfigError, DEFAULT_INIT_DELAY_MS};

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.slider.interval_ms, 3500);
    assert_eq!(config.slider.transition_ms, 400);
    assert!(config.slider.pause_on_hover);
    assert!(!config.slider.reduced_motion);
    assert_eq!(config.slider.init_delay_ms, DEFAULT_INIT_DELAY_MS);
    assert_eq!(config.content.items.len(), 3);
    assert!(config.validate().is_ok());
    assert!(config.timing_warning().is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("hero-slider/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config.slider.interval_ms, 3500);
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"
[slider]
interval_ms = 6000
reduced_motion = true

[content]
items = ["First", "Second"]
"#,
    );
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.slider.interval_ms, 6000);
    assert_eq!(config.slider.transition_ms, 400);
    assert!(config.slider.pause_on_hover);
    assert!(config.slider.reduced_motion);
    assert_eq!(config.content.items, vec!["First", "Second"]);
    assert_eq!(config.content.title, "hero");
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = temp_config("");
    let config = Config::load_from(&path).expect("empty config is valid");
    assert_eq!(config.slider.transition_ms, 400);
    assert_eq!(config.content.items.len(), 3);
}

#[test]
fn test_parse_error_names_path() {
    let (_dir, path) = temp_config("[slider\ninterval_ms = ");
    let err = Config::load_from(&path).expect_err("invalid toml");
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = temp_config("[slider]\ninterval_ms = \"fast\"\n");
    let err = Config::load_from(&path).expect_err("wrong type");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_interval_fails_validation() {
    let (_dir, path) = temp_config("[slider]\ninterval_ms = 0\n");
    let err = Config::load_from(&path).expect_err("zero interval");
    match err {
        ConfigError::ValidationError { message } => assert!(message.contains("interval_ms")),
        other => panic!("Expected ValidationError, got {other}"),
    }
}

#[test]
fn test_zero_transition_fails_validation() {
    let mut config = Config::default();
    config.slider.transition_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_short_interval_is_only_a_warning() {
    let mut config = Config::default();
    config.slider.interval_ms = 800;
    assert!(config.validate().is_ok());
    let warning = config.timing_warning().expect("warning");
    assert!(warning.contains("900"));
}

#[test]
fn test_empty_items_are_allowed() {
    let (_dir, path) = temp_config("[content]\nitems = []\n");
    let config = Config::load_from(&path).expect("empty items are valid");
    assert!(config.content.target().items().is_empty());
}

#[test]
fn test_slider_config_conversion() {
    let mut config = Config::default();
    config.slider.pause_on_hover = false;
    config.slider.transition_ms = 250;
    let slider = config.slider.slider_config();
    assert_eq!(slider.interval_ms, 3500);
    assert_eq!(slider.transition_ms, 250);
    assert!(!slider.pause_on_hover);
}
