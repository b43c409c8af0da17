//! Viewport classification and the signals that trigger re-evaluation.

/// Layout mode derived from the viewport width. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    /// Wide enough for the side-by-side split.
    Desktop,
    /// Panes stack natively; no split exists.
    Compact,
}

impl ViewportMode {
    /// `Desktop` when `width >= breakpoint`. Unknown (non-finite) widths are
    /// treated as compact.
    pub fn for_width(width: f64, breakpoint_px: u32) -> Self {
        if width.is_finite() && width >= f64::from(breakpoint_px) {
            ViewportMode::Desktop
        } else {
            ViewportMode::Compact
        }
    }
}

/// Host events that may change the viewport mode. All of them funnel into
/// the same debounced re-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportSignal {
    WindowResize,
    OrientationChange,
    /// Visual viewport resized (on-screen keyboard, pinch zoom).
    VisualViewportResize,
    /// The breakpoint media query started (`true`) or stopped matching.
    BreakpointMatch(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(ViewportMode::for_width(768.0, 768), ViewportMode::Desktop);
        assert_eq!(ViewportMode::for_width(767.9, 768), ViewportMode::Compact);
        assert_eq!(ViewportMode::for_width(1024.0, 768), ViewportMode::Desktop);
    }

    #[test]
    fn unknown_width_is_compact() {
        assert_eq!(ViewportMode::for_width(f64::NAN, 768), ViewportMode::Compact);
        assert_eq!(
            ViewportMode::for_width(f64::INFINITY, 768),
            ViewportMode::Compact
        );
    }
}
