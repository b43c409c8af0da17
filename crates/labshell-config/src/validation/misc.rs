//! Timer, tool pane and logging settings validation.

use crate::schema::{ShellSettings, LOG_LEVELS};

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_timer(errors: &mut Vec<String>, settings: &ShellSettings) {
    let timer = &settings.timer;
    validate_range(errors, "timer.tick_ms", timer.tick_ms, 100, 60_000);
    validate_range(
        errors,
        "timer.expired_grace_ms",
        timer.expired_grace_ms,
        0,
        10_000,
    );
    validate_non_empty(errors, "timer.expired_redirect", &timer.expired_redirect);
}

pub(crate) fn validate_toolpane(errors: &mut Vec<String>, settings: &ShellSettings) {
    validate_range(
        errors,
        "toolpane.watch_debounce_ms",
        settings.toolpane.watch_debounce_ms,
        50,
        10_000,
    );
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, settings: &ShellSettings) {
    let level = settings.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            settings.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
