//! Split layout settings.

use serde::{Deserialize, Serialize};

/// Session storage key the split layout is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "labshell.split-layout";

/// Split layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Viewport width at or above which the split is shown (valid range: 320-4096).
    pub breakpoint_px: u32,
    /// Quiet period before a viewport change is re-evaluated (valid range: 0-2000).
    pub debounce_ms: u64,
    /// Default instructions pane share in percent.
    pub default_left: f64,
    /// Default tool pane share in percent.
    pub default_right: f64,
    /// Minimum tool pane width enforced by the split widget (valid range: 0-2000).
    pub min_tool_pane_px: u32,
    /// Width of the draggable divider (valid range: 0-40).
    pub gutter_px: u32,
    /// Session storage key for the persisted layout.
    pub storage_key: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            breakpoint_px: 768,
            debounce_ms: 100,
            default_left: 25.0,
            default_right: 75.0,
            min_tool_pane_px: 300,
            gutter_px: 8,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}
