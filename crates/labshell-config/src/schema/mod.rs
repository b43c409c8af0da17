//! Shell settings schema.
//!
//! All structs use `serde(default)` so partial settings files work correctly.

mod layout;
mod logging;
mod timer;
mod toolpane;

pub use layout::*;
pub use logging::*;
pub use timer::*;
pub use toolpane::*;

use serde::{Deserialize, Serialize};

/// Current settings schema version.
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// Root settings for the lab shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    pub layout: LayoutSettings,
    pub timer: TimerSettings,
    pub toolpane: ToolpaneSettings,
    pub logging: LoggingSettings,
}
