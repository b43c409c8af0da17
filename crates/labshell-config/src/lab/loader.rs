//! Lab payload loading: inline string first, `config.json` as fallback.

use std::path::Path;

use labshell_common::ConfigError;
use tracing::{info, warn};

use super::LabConfig;
use crate::validation;

/// Value the page template carries until the build step injects a payload.
pub const INLINE_PLACEHOLDER: &str = "UI_CONFIG_PLACEHOLDER";

/// Parse and validate a lab payload.
pub fn parse_lab_config(json: &str) -> Result<LabConfig, ConfigError> {
    let config: LabConfig = serde_json::from_str(json)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse lab config: {e}")))?;

    validation::validate_lab(&config)?;
    Ok(config)
}

/// Load a lab payload from a JSON file.
pub fn load_lab_config_file(path: &Path) -> Result<LabConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let config = parse_lab_config(&content)?;
    info!(
        "loaded lab config from {} ({} tools)",
        path.display(),
        config.tools.len()
    );
    Ok(config)
}

/// Load the lab payload, preferring the inline string baked into the page.
///
/// The inline payload is skipped when absent or still the build placeholder.
/// An inline payload that fails to parse is logged and the file is tried
/// instead; only the file's error is returned.
pub fn load_lab_config(inline: Option<&str>, fallback: &Path) -> Result<LabConfig, ConfigError> {
    if let Some(inline) = inline.map(str::trim) {
        if !inline.is_empty() && inline != INLINE_PLACEHOLDER {
            match parse_lab_config(inline) {
                Ok(config) => {
                    info!("using inline lab config ({} tools)", config.tools.len());
                    return Ok(config);
                }
                Err(e) => warn!("inline lab config rejected: {e}"),
            }
        }
    }

    load_lab_config_file(fallback)
}
