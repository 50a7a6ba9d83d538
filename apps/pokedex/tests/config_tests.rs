//! Integration tests for client configuration loading.

use pokedex::ClientConfig;
use pokedex_core::PokedexError;
use pokedex_core::primitives::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use std::io::Write;

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(text.as_bytes()).expect("write");
    file
}

#[test]
fn partial_file_keeps_defaults() {
    let config = ClientConfig::from_toml_str("timeout_secs = 3").expect("parse");

    assert_eq!(config.timeout_secs, 3);
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn full_file_is_loaded() {
    let file = write_config(
        r#"
endpoint = "http://localhost:9000/creatures.json"
timeout_secs = 7
user_agent = "test-agent/1.0"
"#,
    );

    let config = ClientConfig::load(Some(file.path())).expect("load");

    assert_eq!(config.endpoint, "http://localhost:9000/creatures.json");
    assert_eq!(config.timeout_secs, 7);
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn unknown_key_rejected() {
    let result = ClientConfig::from_toml_str("endpont = \"http://typo\"");
    assert!(matches!(result, Err(PokedexError::Config(_))));
}

#[test]
fn invalid_scheme_rejected() {
    let result = ClientConfig::from_toml_str("endpoint = \"file:///tmp/data.json\"");
    assert!(matches!(result, Err(PokedexError::Config(_))));
}

#[test]
fn zero_timeout_rejected() {
    let result = ClientConfig::from_toml_str("timeout_secs = 0");
    assert!(matches!(result, Err(PokedexError::Config(_))));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.toml");

    let result = ClientConfig::load(Some(&missing));
    assert!(matches!(result, Err(PokedexError::Config(_))));
}

#[test]
fn overrides_replace_file_values() {
    let config = ClientConfig::default()
        .with_overrides(Some(" https://mirror.example/data.json "), Some("30"))
        .expect("overrides");

    assert_eq!(config.endpoint, "https://mirror.example/data.json");
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn absent_overrides_change_nothing() {
    let config = ClientConfig::default()
        .with_overrides(None, None)
        .expect("overrides");

    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn non_numeric_timeout_override_rejected() {
    let result = ClientConfig::default().with_overrides(None, Some("soon"));
    assert!(matches!(result, Err(PokedexError::Config(_))));
}
