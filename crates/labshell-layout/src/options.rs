//! Tunables for the split layout controller.

use std::time::Duration;

use labshell_config::schema::LayoutSettings;

use crate::sizes::SplitSizes;

#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Viewport width at or above which the split exists.
    pub breakpoint_px: u32,
    /// Quiet period before viewport signals are re-evaluated.
    pub debounce: Duration,
    /// Sizes used when nothing valid was persisted.
    pub default_sizes: SplitSizes,
    /// Minimum tool pane width enforced by the split widget.
    pub min_tool_pane_px: f64,
    /// Divider width.
    pub gutter_px: f64,
    /// Session storage key for the persisted layout.
    pub storage_key: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::from(&LayoutSettings::default())
    }
}

impl From<&LayoutSettings> for LayoutOptions {
    fn from(settings: &LayoutSettings) -> Self {
        Self {
            breakpoint_px: settings.breakpoint_px,
            debounce: Duration::from_millis(settings.debounce_ms),
            default_sizes: SplitSizes::normalize(settings.default_left, settings.default_right),
            min_tool_pane_px: f64::from(settings.min_tool_pane_px),
            gutter_px: f64::from(settings.gutter_px),
            storage_key: settings.storage_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_settings_defaults() {
        let options = LayoutOptions::default();
        assert_eq!(options.breakpoint_px, 768);
        assert_eq!(options.debounce, Duration::from_millis(100));
        assert_eq!(options.default_sizes, SplitSizes::DEFAULT);
        assert!((options.min_tool_pane_px - 300.0).abs() < f64::EPSILON);
        assert_eq!(options.storage_key, "labshell.split-layout");
    }

    #[test]
    fn configured_default_sizes_are_normalized() {
        let settings = LayoutSettings {
            default_left: 1.0,
            default_right: 1.0,
            ..LayoutSettings::default()
        };
        let options = LayoutOptions::from(&settings);
        assert!((options.default_sizes.left() - 50.0).abs() < 1e-9);
    }
}
