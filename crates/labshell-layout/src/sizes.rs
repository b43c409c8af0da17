//! Percentage pair shared by the two panes.

use serde::Serialize;

/// Widths of the instructions (left) and tool (right) panes in percent.
///
/// Always normalized: both values lie in `[0, 100]` and they sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitSizes {
    left: f64,
    right: f64,
}

impl SplitSizes {
    /// Fallback pair for missing or malformed input.
    pub const DEFAULT: SplitSizes = SplitSizes {
        left: 25.0,
        right: 75.0,
    };

    /// Instructions pane hidden, tool pane full width.
    pub const COLLAPSED: SplitSizes = SplitSizes {
        left: 0.0,
        right: 100.0,
    };

    /// Normalize an arbitrary pair, falling back to [`SplitSizes::DEFAULT`].
    pub fn normalize(left: f64, right: f64) -> Self {
        Self::normalize_or(left, right, Self::DEFAULT)
    }

    /// Normalize an arbitrary pair, or `fallback` if it cannot be.
    pub fn normalize_or(left: f64, right: f64, fallback: SplitSizes) -> Self {
        Self::try_normalize(left, right).unwrap_or(fallback)
    }

    /// Rescale a pair to sum to 100, clamped to `[0, 100]`.
    ///
    /// `None` for non-finite input or a sum `<= 0`.
    pub fn try_normalize(left: f64, right: f64) -> Option<Self> {
        let sum = left + right;
        if !left.is_finite() || !right.is_finite() || !sum.is_finite() || sum <= 0.0 {
            return None;
        }
        let left = (100.0 * left / sum).clamp(0.0, 100.0);
        Some(Self {
            left,
            right: 100.0 - left,
        })
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    /// Whether the instructions pane has any width at all.
    pub fn is_left_visible(&self) -> bool {
        self.left > 0.0
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

impl Default for SplitSizes {
    fn default() -> Self {
        Self::DEFAULT
    }
}
