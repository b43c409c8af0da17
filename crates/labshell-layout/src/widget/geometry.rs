//! Pane rectangle computation and minimum-size enforcement.

use labshell_common::Rect;

use super::SplitWidget;
use crate::sizes::SplitSizes;

impl SplitWidget {
    /// Pixel rectangles of the instructions and tool panes inside `bounds`.
    pub fn compute(&self, bounds: Rect) -> (Rect, Rect) {
        let available = (bounds.width - self.gutter_px).max(0.0);
        let sizes = self.constrain(self.sizes, bounds.width);
        let w1 = available * sizes.left() / 100.0;
        let w2 = (available - w1).max(0.0);
        (
            Rect {
                x: bounds.x,
                y: bounds.y,
                width: w1,
                height: bounds.height,
            },
            Rect {
                x: bounds.x + w1 + self.gutter_px,
                y: bounds.y,
                width: w2,
                height: bounds.height,
            },
        )
    }

    /// Adjust `sizes` so the tool pane is at least `min_right_px` wide in a
    /// container of `container_px`. A container too narrow for the minimum
    /// gives the tool pane everything.
    pub fn constrain(&self, sizes: SplitSizes, container_px: f64) -> SplitSizes {
        let available = container_px - self.gutter_px;
        if !available.is_finite() || available <= 0.0 || self.min_right_px <= 0.0 {
            return sizes;
        }
        if available <= self.min_right_px {
            return SplitSizes::COLLAPSED;
        }
        let right_px = available * sizes.right() / 100.0;
        if right_px >= self.min_right_px {
            return sizes;
        }
        let right = 100.0 * self.min_right_px / available;
        SplitSizes::normalize_or(100.0 - right, right, sizes)
    }
}
