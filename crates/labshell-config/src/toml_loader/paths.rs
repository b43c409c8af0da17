//! Where `settings.toml` lives and how the commented template gets there.

use labshell_common::ConfigError;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_settings_toml;

const APP_DIR: &str = "labshell";
const SETTINGS_FILE: &str = "settings.toml";

/// `settings.toml` under the shell's directory inside `config_root`.
pub fn settings_path_in(config_root: &Path) -> PathBuf {
    config_root.join(APP_DIR).join(SETTINGS_FILE)
}

/// `settings.toml` under the platform config directory.
pub fn default_settings_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|root| settings_path_in(&root))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory for labshell".into()))
}

/// Write the commented settings template to `path`.
///
/// A file already at `path` is left untouched, so two shells starting
/// together cannot clobber each other's edits.
pub fn create_default_settings(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| io_error("create", dir, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("settings template skipped, {} exists", path.display());
            return Ok(());
        }
        Err(e) => return Err(io_error("open", path, e)),
    };
    file.write_all(default_settings_toml().as_bytes())
        .map_err(|e| io_error("write", path, e))?;

    info!("wrote settings template to {}", path.display());
    Ok(())
}

fn io_error(action: &str, path: &Path, e: std::io::Error) -> ConfigError {
    ConfigError::ParseError(format!("cannot {action} {}: {e}", path.display()))
}
