//! Headless page: keeps the would-be DOM state and logs each mutation.

use labshell_common::LayoutError;
use labshell_layout::{LayoutHost, SplitSizes, SplitWidget, ToggleAffordance};
use tracing::{debug, info};

#[derive(Debug)]
pub struct HeadlessHost {
    width: f64,
    instructions_visible: bool,
    mounted: bool,
    sizes: Option<SplitSizes>,
    affordance: ToggleAffordance,
    listening: bool,
}

impl HeadlessHost {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            instructions_visible: true,
            mounted: false,
            sizes: None,
            affordance: ToggleAffordance::hidden(),
            listening: false,
        }
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Inline sizes currently applied, `None` when the native layout rules.
    pub fn sizes(&self) -> Option<SplitSizes> {
        self.sizes
    }

    pub fn affordance(&self) -> &ToggleAffordance {
        &self.affordance
    }

    pub fn instructions_visible(&self) -> bool {
        self.instructions_visible
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

impl LayoutHost for HeadlessHost {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn hide_instructions(&mut self) {
        self.instructions_visible = false;
        info!("instructions region hidden");
    }

    fn mount_split(&mut self, widget: &SplitWidget) -> Result<(), LayoutError> {
        if !self.instructions_visible {
            return Err(LayoutError::MissingRegion("instructions"));
        }
        if self.mounted {
            return Err(LayoutError::WidgetUnavailable("split already mounted".into()));
        }
        self.mounted = true;
        debug!(gutter = widget.gutter_px(), min_right = widget.min_right_px(), "split mounted");
        Ok(())
    }

    fn unmount_split(&mut self) {
        self.mounted = false;
        debug!("split unmounted");
    }

    fn apply_sizes(&mut self, sizes: SplitSizes) {
        self.sizes = Some(sizes);
        debug!(left = sizes.left(), right = sizes.right(), "pane sizes applied");
    }

    fn clear_inline_sizing(&mut self) {
        self.sizes = None;
        debug!("inline sizing cleared");
    }

    fn apply_affordance(&mut self, affordance: &ToggleAffordance) {
        self.affordance = *affordance;
        debug!(
            toggle = affordance.toggle_visible,
            expand_tab = affordance.expand_tab_visible,
            label = affordance.aria_label,
            "toggle affordance updated"
        );
    }

    fn attach_viewport_listeners(&mut self) {
        self.listening = true;
    }

    fn detach_viewport_listeners(&mut self) {
        self.listening = false;
    }
}
