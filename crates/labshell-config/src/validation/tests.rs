//! Tests for the validation pipelines.

use super::*;
use crate::lab::{LabConfig, LabSection, ToolEntry};
use crate::schema::ShellSettings;

fn lab(tools: Vec<ToolEntry>) -> LabConfig {
    LabConfig {
        config: LabSection {
            default_tool: "terminal".into(),
            expires_at: "2030-01-01T00:00:00Z".parse().unwrap(),
            show_timer: true,
        },
        tools,
    }
}

#[test]
fn default_settings_validate() {
    assert!(validate_settings(&ShellSettings::default()).is_ok());
}

#[test]
fn catches_breakpoint_too_small() {
    let mut settings = ShellSettings::default();
    settings.layout.breakpoint_px = 100;
    let err = validate_settings(&settings).unwrap_err().to_string();
    assert!(err.contains("layout.breakpoint_px"));
}

#[test]
fn catches_non_finite_default_size() {
    let mut settings = ShellSettings::default();
    settings.layout.default_left = f64::NAN;
    let err = validate_settings(&settings).unwrap_err().to_string();
    assert!(err.contains("layout.default_left"));
}

#[test]
fn catches_zero_sum_default_sizes() {
    let mut settings = ShellSettings::default();
    settings.layout.default_left = 0.0;
    settings.layout.default_right = 0.0;
    let err = validate_settings(&settings).unwrap_err().to_string();
    assert!(err.contains("must be positive"));
}

#[test]
fn catches_empty_storage_key() {
    let mut settings = ShellSettings::default();
    settings.layout.storage_key = "  ".into();
    let err = validate_settings(&settings).unwrap_err().to_string();
    assert!(err.contains("layout.storage_key"));
}

#[test]
fn catches_tick_too_fast() {
    let mut settings = ShellSettings::default();
    settings.timer.tick_ms = 10;
    let err = validate_settings(&settings).unwrap_err().to_string();
    assert!(err.contains("timer.tick_ms"));
}

#[test]
fn catches_unknown_log_level() {
    let mut settings = ShellSettings::default();
    settings.logging.level = "verbose".into();
    let err = validate_settings(&settings).unwrap_err().to_string();
    assert!(err.contains("logging.level"));
}

#[test]
fn log_level_is_case_insensitive() {
    let mut settings = ShellSettings::default();
    settings.logging.level = "DEBUG".into();
    assert!(validate_settings(&settings).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut settings = ShellSettings::default();
    settings.layout.gutter_px = 99;
    settings.timer.expired_redirect = String::new();
    let err = validate_settings(&settings).unwrap_err().to_string();
    assert!(err.contains("layout.gutter_px"));
    assert!(err.contains("timer.expired_redirect"));
}

#[test]
fn valid_lab_passes() {
    let config = lab(vec![
        ToolEntry::instructions("guide", "/guide"),
        ToolEntry::new("terminal", "/terminal"),
    ]);
    assert!(validate_lab(&config).is_ok());
}

#[test]
fn unknown_default_tool_is_not_an_error() {
    let config = lab(vec![ToolEntry::new("editor", "/editor")]);
    assert!(validate_lab(&config).is_ok());
}

#[test]
fn catches_duplicate_tool_names() {
    let config = lab(vec![
        ToolEntry::new("terminal", "/a"),
        ToolEntry::new("terminal", "/b"),
    ]);
    let err = validate_lab(&config).unwrap_err().to_string();
    assert!(err.contains("duplicated"));
}

#[test]
fn catches_empty_name_and_url() {
    let config = lab(vec![ToolEntry::new("", "")]);
    let err = validate_lab(&config).unwrap_err().to_string();
    assert!(err.contains("tools[0].name"));
    assert!(err.contains("tools[0].url"));
}

#[test]
fn no_tools_is_valid() {
    assert!(validate_lab(&lab(Vec::new())).is_ok());
}
