//! Validation for the lab payload and the shell settings.
//!
//! Each domain has its own submodule; the orchestrators call them all and
//! collect errors into a single `ConfigError`.

mod helpers;
mod lab;
mod layout;
mod misc;

#[cfg(test)]
mod tests;

use crate::lab::LabConfig;
use crate::schema::ShellSettings;
use labshell_common::ConfigError;

/// Run all settings validations, collecting all errors.
pub fn validate_settings(settings: &ShellSettings) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, settings);
    misc::validate_timer(&mut errors, settings);
    misc::validate_toolpane(&mut errors, settings);
    misc::validate_logging(&mut errors, settings);

    finish(errors)
}

/// Validate the structure of a lab payload.
pub fn validate_lab(config: &LabConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    lab::validate_tools(&mut errors, config);
    lab::check_default_tool(config);

    finish(errors)
}

fn finish(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
