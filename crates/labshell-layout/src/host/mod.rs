//! The page-side contract of the split layout.

mod noop;

pub use noop::NoopHost;

use labshell_common::LayoutError;

use crate::sizes::SplitSizes;
use crate::widget::SplitWidget;

/// Direction the chevron on the divider's toggle button points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chevron {
    /// Pane open; clicking collapses it.
    Left,
    /// Pane collapsed; clicking expands it.
    Right,
}

/// State of the collapse/expand controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAffordance {
    /// The toggle button on the divider.
    pub toggle_visible: bool,
    /// The always-present "expand" tab, shown only while collapsed.
    pub expand_tab_visible: bool,
    pub aria_expanded: bool,
    pub aria_label: &'static str,
    pub chevron: Chevron,
}

impl ToggleAffordance {
    pub fn for_collapsed(collapsed: bool) -> Self {
        if collapsed {
            Self {
                toggle_visible: true,
                expand_tab_visible: true,
                aria_expanded: false,
                aria_label: "Expand instructions",
                chevron: Chevron::Right,
            }
        } else {
            Self {
                toggle_visible: true,
                expand_tab_visible: false,
                aria_expanded: true,
                aria_label: "Collapse instructions",
                chevron: Chevron::Left,
            }
        }
    }

    /// No split exists: neither control is shown.
    pub fn hidden() -> Self {
        Self {
            toggle_visible: false,
            expand_tab_visible: false,
            aria_expanded: true,
            aria_label: "Collapse instructions",
            chevron: Chevron::Left,
        }
    }
}

/// Everything the controller needs from the page.
///
/// Implementations own the instructions region, the tool region and the
/// divider between them. None of these calls may panic; a missing region is
/// reported through [`LayoutHost::mount_split`].
pub trait LayoutHost {
    /// Current layout viewport width in CSS pixels.
    fn viewport_width(&self) -> f64;

    /// Hide the instructions region for good and give the tool pane the
    /// full width.
    fn hide_instructions(&mut self);

    /// Build the split between the two regions.
    fn mount_split(&mut self, widget: &SplitWidget) -> Result<(), LayoutError>;

    /// Tear the split down.
    fn unmount_split(&mut self);

    /// Apply new pane sizes to a mounted split.
    fn apply_sizes(&mut self, sizes: SplitSizes);

    /// Remove any inline widths so the native stacked layout takes over.
    fn clear_inline_sizing(&mut self);

    fn apply_affordance(&mut self, affordance: &ToggleAffordance);

    /// Start delivering resize, orientation, visual-viewport and breakpoint
    /// signals. Called once per controller lifetime.
    fn attach_viewport_listeners(&mut self);

    fn detach_viewport_listeners(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_affordance() {
        let a = ToggleAffordance::for_collapsed(false);
        assert!(a.toggle_visible);
        assert!(!a.expand_tab_visible);
        assert!(a.aria_expanded);
        assert_eq!(a.chevron, Chevron::Left);
    }

    #[test]
    fn collapsed_affordance() {
        let a = ToggleAffordance::for_collapsed(true);
        assert!(a.expand_tab_visible);
        assert!(!a.aria_expanded);
        assert_eq!(a.aria_label, "Expand instructions");
        assert_eq!(a.chevron, Chevron::Right);
    }

    #[test]
    fn hidden_affordance_shows_nothing() {
        let a = ToggleAffordance::hidden();
        assert!(!a.toggle_visible);
        assert!(!a.expand_tab_visible);
    }
}
