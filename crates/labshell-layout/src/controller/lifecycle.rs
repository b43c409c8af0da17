//! Initialization, teardown, persistence and widget construction.

use labshell_config::LabConfig;
use tracing::{debug, info, warn};

use super::{LayoutState, SplitLayoutController};
use crate::host::{LayoutHost, ToggleAffordance};
use crate::persist::{PersistedLayout, SessionStore};
use crate::sizes::SplitSizes;
use crate::viewport::ViewportMode;
use crate::widget::SplitWidget;

impl<H: LayoutHost, S: SessionStore> SplitLayoutController<H, S> {
    /// Set the layout up for `config`.
    ///
    /// Without an instructions tool the instructions region is hidden and the
    /// controller stays in [`LayoutState::NoSplit`]. Otherwise the persisted
    /// preference is loaded, listeners are attached and the current viewport
    /// decides between desktop and compact. Re-initializing tears the
    /// previous layout down first.
    pub fn initialize(&mut self, config: &LabConfig) -> LayoutState {
        if self.state != LayoutState::Uninitialized {
            self.teardown();
        }

        let Some(instructions) = config.instructions_tool() else {
            self.host.hide_instructions();
            self.host.apply_affordance(&ToggleAffordance::hidden());
            self.state = LayoutState::NoSplit;
            info!("no instructions tool; tool pane takes the full width");
            return self.state;
        };

        let persisted = self.load_persisted();
        self.saved = persisted.sizes;
        self.collapsed = persisted.collapsed;
        self.attach_listeners();

        match self.current_mode() {
            ViewportMode::Desktop => {
                self.state = LayoutState::Desktop;
                self.build_widget();
            }
            ViewportMode::Compact => {
                self.state = LayoutState::Compact;
                self.host.clear_inline_sizing();
                self.host.apply_affordance(&ToggleAffordance::hidden());
            }
        }

        info!(
            instructions = %instructions.name,
            state = ?self.state,
            collapsed = self.collapsed,
            "split layout initialized"
        );
        self.state
    }

    /// Destroy the widget, detach listeners and drop any pending
    /// re-evaluation. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.widget.is_some() {
            self.destroy_widget();
        }
        if self.listening {
            self.host.detach_viewport_listeners();
            self.listening = false;
        }
        self.debounce.cancel();
        if self.state != LayoutState::Uninitialized {
            debug!(from = ?self.state, "split layout torn down");
        }
        self.state = LayoutState::Uninitialized;
    }

    pub(super) fn current_mode(&self) -> ViewportMode {
        ViewportMode::for_width(self.host.viewport_width(), self.options.breakpoint_px)
    }

    fn attach_listeners(&mut self) {
        if !self.listening {
            self.host.attach_viewport_listeners();
            self.listening = true;
        }
    }

    pub(super) fn build_widget(&mut self) {
        let sizes = if self.collapsed {
            SplitSizes::COLLAPSED
        } else {
            self.saved
        };
        let mut widget = SplitWidget::new(sizes, &self.options);
        let sizes = widget.constrain(sizes, self.host.viewport_width());
        widget.set_sizes(sizes);
        if let Err(e) = self.host.mount_split(&widget) {
            warn!("split widget not created: {e}");
            return;
        }
        self.host.apply_sizes(sizes);
        self.host
            .apply_affordance(&ToggleAffordance::for_collapsed(self.collapsed));
        self.widget = Some(widget);
        self.stats.widgets_built += 1;
        debug!(left = sizes.left(), right = sizes.right(), "split widget built");
    }

    pub(super) fn destroy_widget(&mut self) {
        if self.widget.take().is_none() {
            return;
        }
        self.host.unmount_split();
        self.host.clear_inline_sizing();
        self.host.apply_affordance(&ToggleAffordance::hidden());
        self.stats.widgets_destroyed += 1;
        debug!("split widget destroyed");
    }

    fn load_persisted(&self) -> PersistedLayout {
        let defaults = self.options.default_sizes;
        match self.store.get(&self.options.storage_key) {
            Ok(Some(raw)) => PersistedLayout::decode(&raw, defaults),
            Ok(None) => PersistedLayout::fallback(defaults),
            Err(e) => {
                debug!("session storage unreadable, using defaults: {e}");
                PersistedLayout::fallback(defaults)
            }
        }
    }

    pub(super) fn persist(&mut self) {
        let layout = PersistedLayout::new(self.saved, self.collapsed);
        let raw = match layout.encode() {
            Ok(raw) => raw,
            Err(e) => {
                warn!("could not encode split layout: {e}");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.options.storage_key, &raw) {
            warn!("split layout not persisted: {e}");
        }
    }
}
