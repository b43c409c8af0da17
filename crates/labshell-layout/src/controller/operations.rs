//! User-driven operations: collapse toggle and divider drags.

use tracing::debug;

use super::SplitLayoutController;
use crate::host::{LayoutHost, ToggleAffordance};
use crate::persist::SessionStore;
use crate::sizes::SplitSizes;

impl<H: LayoutHost, S: SessionStore> SplitLayoutController<H, S> {
    /// Collapse or expand the instructions pane. Returns `false` (and does
    /// nothing) when no split widget exists.
    pub fn toggle(&mut self) -> bool {
        let width = self.host.viewport_width();
        let Some(widget) = self.widget.as_mut() else {
            debug!("toggle ignored: no split widget");
            return false;
        };

        let sizes = if self.collapsed {
            self.collapsed = false;
            if self.saved.is_left_visible() {
                self.saved
            } else {
                self.options.default_sizes
            }
        } else {
            let current = widget.sizes();
            // A zero-width left pane is not worth remembering
            if current.is_left_visible() {
                self.saved = current;
            }
            self.collapsed = true;
            SplitSizes::COLLAPSED
        };

        let sizes = widget.constrain(sizes, width);
        widget.set_sizes(sizes);
        self.host.apply_sizes(sizes);
        self.host
            .apply_affordance(&ToggleAffordance::for_collapsed(self.collapsed));
        self.persist();
        debug!(collapsed = self.collapsed, "split toggled");
        true
    }

    /// Record the result of a manual divider drag.
    ///
    /// The widget always reflects the drag. The sizes are remembered and
    /// persisted only while expanded and with a non-zero left pane, so a
    /// drag to zero never overwrites the size that expand restores.
    /// Returns whether the sizes were remembered.
    pub fn on_drag_end(&mut self, left: f64, right: f64) -> bool {
        let width = self.host.viewport_width();
        let Some(widget) = self.widget.as_mut() else {
            debug!("drag end ignored: no split widget");
            return false;
        };

        let reported = SplitSizes::normalize_or(left, right, widget.sizes());
        let sizes = widget.constrain(reported, width);
        widget.set_sizes(sizes);

        if self.collapsed || !sizes.is_left_visible() {
            return false;
        }

        self.saved = sizes;
        self.persist();
        debug!(left = sizes.left(), right = sizes.right(), "drag sizes saved");
        true
    }
}
