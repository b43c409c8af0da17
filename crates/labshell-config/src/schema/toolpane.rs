//! Tool pane (tabs and embedded frames) settings.

use serde::{Deserialize, Serialize};

/// Sandbox attribute applied to every embedded tool frame.
pub const DEFAULT_FRAME_SANDBOX: &str = "allow-same-origin allow-scripts allow-popups allow-forms";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolpaneSettings {
    pub frame_sandbox: String,
    /// Watch the lab config file and add newly published tools as tabs.
    pub watch_for_new_tools: bool,
    /// Debounce window for config file change notifications (valid range: 50-10000).
    pub watch_debounce_ms: u64,
}

impl Default for ToolpaneSettings {
    fn default() -> Self {
        Self {
            frame_sandbox: DEFAULT_FRAME_SANDBOX.to_string(),
            watch_for_new_tools: true,
            watch_debounce_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolpane_settings_defaults() {
        let settings = ToolpaneSettings::default();
        assert_eq!(
            settings.frame_sandbox,
            "allow-same-origin allow-scripts allow-popups allow-forms"
        );
        assert!(settings.watch_for_new_tools);
        assert_eq!(settings.watch_debounce_ms, 500);
    }

    #[test]
    fn toolpane_settings_partial_toml() {
        let settings: ToolpaneSettings = toml::from_str("watch_for_new_tools = false").unwrap();
        assert!(!settings.watch_for_new_tools);
        assert_eq!(settings.frame_sandbox, DEFAULT_FRAME_SANDBOX);
    }
}
