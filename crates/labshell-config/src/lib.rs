//! Configuration for the lab shell.
//!
//! Two independent inputs live here:
//!
//! - the **lab payload** (`config.json` or an inline string baked into the
//!   page): the tool list, the default tool, the sandbox expiration and the
//!   timer flag;
//! - the **shell settings** (`settings.toml`): breakpoint, debounce window,
//!   pane minimums, timer and logging knobs. All sections use defaults so
//!   partial files work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use labshell_config::{lab, load_settings};
//! use std::path::Path;
//!
//! let settings = load_settings(None).expect("failed to load settings");
//! let config = lab::load_lab_config(None, Path::new("config.json")).expect("bad lab config");
//! println!("{} tools, breakpoint {}px", config.tools.len(), settings.layout.breakpoint_px);
//! ```

pub mod lab;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use lab::{LabConfig, LabSection, ToolEntry, ToolKind};
pub use schema::{ShellSettings, SETTINGS_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use labshell_common::ConfigError;
use std::path::Path;

/// Load shell settings from an explicit path, or from the platform default
/// location when `path` is `None`, and validate the result.
pub fn load_settings(path: Option<&Path>) -> Result<ShellSettings, ConfigError> {
    let settings = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate_settings(&settings)?;
    Ok(settings)
}
