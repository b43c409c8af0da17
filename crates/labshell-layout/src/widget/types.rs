//! Split widget state.

use crate::options::LayoutOptions;
use crate::sizes::SplitSizes;

/// In-process model of the split widget the host renders.
///
/// The left (instructions) pane has no minimum so it can be dragged shut;
/// the right (tool) pane keeps `min_right_px` whenever the container is
/// wide enough to honour it.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitWidget {
    pub(super) sizes: SplitSizes,
    pub(super) gutter_px: f64,
    pub(super) min_right_px: f64,
}

impl SplitWidget {
    pub fn new(sizes: SplitSizes, options: &LayoutOptions) -> Self {
        Self {
            sizes,
            gutter_px: options.gutter_px.max(0.0),
            min_right_px: options.min_tool_pane_px.max(0.0),
        }
    }

    pub fn sizes(&self) -> SplitSizes {
        self.sizes
    }

    pub fn set_sizes(&mut self, sizes: SplitSizes) {
        self.sizes = sizes;
    }

    pub fn gutter_px(&self) -> f64 {
        self.gutter_px
    }

    pub fn min_right_px(&self) -> f64 {
        self.min_right_px
    }
}
