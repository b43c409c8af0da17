//! No-op LayoutHost implementation.
//!
//! Reports a fixed viewport width and accepts every mutation silently.

use labshell_common::LayoutError;

use super::{LayoutHost, ToggleAffordance};
use crate::sizes::SplitSizes;
use crate::widget::SplitWidget;

pub struct NoopHost {
    pub width: f64,
}

impl NoopHost {
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

impl LayoutHost for NoopHost {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn hide_instructions(&mut self) {}

    fn mount_split(&mut self, _widget: &SplitWidget) -> Result<(), LayoutError> {
        Ok(())
    }

    fn unmount_split(&mut self) {}

    fn apply_sizes(&mut self, _sizes: SplitSizes) {}

    fn clear_inline_sizing(&mut self) {}

    fn apply_affordance(&mut self, _affordance: &ToggleAffordance) {}

    fn attach_viewport_listeners(&mut self) {}

    fn detach_viewport_listeners(&mut self) {}
}
