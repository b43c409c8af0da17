//! Core TOML settings loading: read from path or platform default.

use crate::schema::ShellSettings;
use crate::validation;
use labshell_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_settings, default_settings_path};

/// Load settings from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Validation problems are logged; the parsed settings are returned as-is.
pub fn load_from_path(path: &Path) -> Result<ShellSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let settings: ShellSettings = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate_settings(&settings) {
        warn!("settings validation warning: {e}");
    }

    info!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Load settings from the platform-specific default path.
///
/// On Linux: `~/.config/labshell/settings.toml`
/// On macOS: `~/Library/Application Support/labshell/settings.toml`
///
/// If the file does not exist, a commented default is written and defaults
/// are returned.
pub fn load_default() -> Result<ShellSettings, ConfigError> {
    let path = default_settings_path()?;

    match load_from_path(&path) {
        Ok(settings) => Ok(settings),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no settings found at {}, creating default", path.display());
            if let Err(e) = create_default_settings(&path) {
                warn!("could not write default settings: {e}");
            }
            Ok(ShellSettings::default())
        }
        Err(e) => Err(e),
    }
}
