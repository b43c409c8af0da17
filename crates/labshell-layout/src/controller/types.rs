//! Core types and constructors for SplitLayoutController.

use std::time::Instant;

use crate::debounce::Debouncer;
use crate::host::LayoutHost;
use crate::options::LayoutOptions;
use crate::persist::SessionStore;
use crate::sizes::SplitSizes;
use crate::widget::SplitWidget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutState {
    /// Not initialized, or torn down.
    Uninitialized,
    /// No instructions tool; the tool pane has the full width for good.
    NoSplit,
    /// Viewport at or above the breakpoint; the split should exist.
    Desktop,
    /// Viewport below the breakpoint; panes stack natively.
    Compact,
}

/// Counters for widget churn, mostly useful to assert idempotence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionStats {
    pub widgets_built: u32,
    pub widgets_destroyed: u32,
    /// Viewport re-evaluations actually run (after debouncing).
    pub evaluations: u32,
}

/// Keeps the split consistent with viewport size, the user's collapse
/// choice and the persisted preference.
///
/// All state lives in the instance; two controllers never share anything.
pub struct SplitLayoutController<H: LayoutHost, S: SessionStore> {
    pub(super) host: H,
    pub(super) store: S,
    pub(super) options: LayoutOptions,
    pub(super) state: LayoutState,
    /// Last non-degenerate sizes chosen by the user.
    pub(super) saved: SplitSizes,
    pub(super) collapsed: bool,
    pub(super) widget: Option<SplitWidget>,
    pub(super) debounce: Debouncer,
    /// Whether viewport listeners are attached.
    pub(super) listening: bool,
    pub(super) stats: TransitionStats,
}

impl<H: LayoutHost, S: SessionStore> SplitLayoutController<H, S> {
    pub fn new(host: H, store: S, options: LayoutOptions) -> Self {
        Self {
            host,
            store,
            saved: options.default_sizes,
            debounce: Debouncer::new(options.debounce),
            options,
            state: LayoutState::Uninitialized,
            collapsed: false,
            widget: None,
            listening: false,
            stats: TransitionStats::default(),
        }
    }

    // -- Accessors --

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn has_widget(&self) -> bool {
        self.widget.is_some()
    }

    /// Sizes currently shown by the widget, if one exists.
    pub fn sizes(&self) -> Option<SplitSizes> {
        self.widget.as_ref().map(SplitWidget::sizes)
    }

    /// Sizes restored on expand.
    pub fn saved_sizes(&self) -> SplitSizes {
        self.saved
    }

    pub fn widget(&self) -> Option<&SplitWidget> {
        self.widget.as_ref()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// When the pending viewport re-evaluation is due, if one is scheduled.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    pub fn stats(&self) -> TransitionStats {
        self.stats
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
