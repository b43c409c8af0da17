//! Tests for lab payload parsing and loading.

use super::*;
use labshell_common::ConfigError;
use std::path::Path;

const SAMPLE: &str = r#"{
  "config": { "defaultTool": "terminal", "expiresAt": "2030-01-01T12:00:00Z" },
  "tools": [
    { "name": "guide", "kind": "instructions", "url": "/instructions/" },
    { "name": "terminal", "url": "/terminal/" },
    { "name": "editor", "kind": "ide", "url": "https://ide.example.com" }
  ]
}"#;

#[test]
fn parses_sample_payload() {
    let config = parse_lab_config(SAMPLE).unwrap();
    assert_eq!(config.default_tool(), "terminal");
    assert_eq!(config.tools.len(), 3);
    assert!(config.show_timer());
    assert_eq!(
        config.expires_at().to_rfc3339(),
        "2030-01-01T12:00:00+00:00"
    );
}

#[test]
fn instructions_tool_is_split_from_tabs() {
    let config = parse_lab_config(SAMPLE).unwrap();
    assert_eq!(config.instructions_tool().unwrap().name, "guide");
    let tabs: Vec<&str> = config.tab_tools().map(|t| t.name.as_str()).collect();
    assert_eq!(tabs, vec!["terminal", "editor"]);
}

#[test]
fn unknown_kind_is_a_tab() {
    let config = parse_lab_config(SAMPLE).unwrap();
    assert_eq!(config.tools[2].kind(), ToolKind::Tab);
    assert_eq!(config.tools[0].kind(), ToolKind::Instructions);
}

#[test]
fn show_timer_false_is_respected() {
    let json = r#"{
      "config": { "defaultTool": "a", "expiresAt": "2030-01-01T00:00:00+02:00", "showTimer": false },
      "tools": [ { "name": "a", "url": "/a" } ]
    }"#;
    let config = parse_lab_config(json).unwrap();
    assert!(!config.show_timer());
    assert!(config.instructions_tool().is_none());
    // Offsets are normalized to UTC
    assert_eq!(config.expires_at().to_rfc3339(), "2029-12-31T22:00:00+00:00");
}

#[test]
fn missing_tools_is_parse_error() {
    let json = r#"{ "config": { "defaultTool": "a", "expiresAt": "2030-01-01T00:00:00Z" } }"#;
    let err = parse_lab_config(json).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn invalid_expiration_is_parse_error() {
    let json = r#"{
      "config": { "defaultTool": "a", "expiresAt": "tomorrow" },
      "tools": [ { "name": "a", "url": "/a" } ]
    }"#;
    let err = parse_lab_config(json).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn two_instructions_tools_fail_validation() {
    let json = r#"{
      "config": { "defaultTool": "a", "expiresAt": "2030-01-01T00:00:00Z" },
      "tools": [
        { "name": "i1", "kind": "instructions", "url": "/i1" },
        { "name": "i2", "kind": "instructions", "url": "/i2" },
        { "name": "a", "url": "/a" }
      ]
    }"#;
    let err = parse_lab_config(json).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    assert!(err.to_string().contains("instructions"));
}

#[test]
fn inline_payload_wins_over_file() {
    let config = load_lab_config(Some(SAMPLE), Path::new("/nonexistent/config.json")).unwrap();
    assert_eq!(config.tools.len(), 3);
}

#[test]
fn placeholder_falls_back_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, SAMPLE).unwrap();

    let config = load_lab_config(Some(INLINE_PLACEHOLDER), &path).unwrap();
    assert_eq!(config.default_tool(), "terminal");
}

#[test]
fn broken_inline_falls_back_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, SAMPLE).unwrap();

    let config = load_lab_config(Some("{ not json"), &path).unwrap();
    assert_eq!(config.tools.len(), 3);
}

#[test]
fn missing_file_without_inline_is_file_not_found() {
    let err = load_lab_config(None, Path::new("/nonexistent/labshell/config.json")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}
