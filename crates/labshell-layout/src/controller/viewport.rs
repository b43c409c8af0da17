//! Responsive re-evaluation and its debounced entry point.

use std::time::Instant;

use tracing::{debug, trace};

use super::{LayoutState, SplitLayoutController};
use crate::host::LayoutHost;
use crate::persist::SessionStore;
use crate::viewport::{ViewportMode, ViewportSignal};

impl<H: LayoutHost, S: SessionStore> SplitLayoutController<H, S> {
    /// Re-evaluate the viewport mode now.
    ///
    /// Entering desktop builds the widget if none exists; entering compact
    /// destroys it and clears inline sizing. Staying in desktop only
    /// re-applies the tool-pane minimum for the new width. Returns the
    /// resulting state.
    pub fn on_viewport_change(&mut self) -> LayoutState {
        if !matches!(self.state, LayoutState::Desktop | LayoutState::Compact) {
            return self.state;
        }
        self.stats.evaluations += 1;

        match self.current_mode() {
            ViewportMode::Desktop => {
                if self.widget.is_none() {
                    debug!("viewport entered desktop mode");
                    self.build_widget();
                } else {
                    self.reconstrain_widget();
                }
                self.state = LayoutState::Desktop;
            }
            ViewportMode::Compact => {
                if self.widget.is_some() {
                    debug!("viewport entered compact mode");
                    self.destroy_widget();
                }
                self.state = LayoutState::Compact;
            }
        }
        self.state
    }

    fn reconstrain_widget(&mut self) {
        let width = self.host.viewport_width();
        let Some(widget) = self.widget.as_mut() else {
            return;
        };
        let sizes = widget.constrain(widget.sizes(), width);
        if sizes != widget.sizes() {
            widget.set_sizes(sizes);
            self.host.apply_sizes(sizes);
            debug!(
                left = sizes.left(),
                right = sizes.right(),
                "split narrowed to tool-pane minimum"
            );
        }
    }

    /// Schedule a re-evaluation for a resize-class signal. Each signal
    /// replaces the pending one. Ignored while listeners are detached.
    pub fn on_viewport_signal(&mut self, signal: ViewportSignal, now: Instant) {
        if !self.listening {
            return;
        }
        let replaced = self.debounce.trigger(now);
        trace!(?signal, replaced, "viewport signal");
    }

    /// Run the pending re-evaluation if its quiet period has elapsed.
    /// Returns whether a re-evaluation ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.debounce.fire(now) {
            return false;
        }
        self.on_viewport_change();
        true
    }
}
