//! Mutating operations on ToolPane: activation and config merges.

use labshell_config::LabConfig;
use tracing::{debug, info};

use super::{Activation, Tab, ToolPane};
use crate::frame::FrameState;

impl ToolPane {
    /// Show the tab named `name`, loading its frame the first time.
    pub fn activate(&mut self, name: &str) -> Activation {
        let Some(idx) = self.position(name) else {
            debug!(name, "activate ignored: unknown tab");
            return Activation::Unknown;
        };
        self.active_index = idx;
        let tab = &mut self.tabs[idx];
        if tab.is_loaded() {
            return Activation::Shown;
        }
        tab.frame = FrameState::Loaded;
        debug!(name, url = %tab.url, "frame loaded on first show");
        Activation::LoadedNow
    }

    /// Add tabs for tools in `latest` that are not shown yet.
    ///
    /// New tools are appended in configuration order, except a new tool that
    /// is the configured default: it goes first and becomes active with its
    /// frame loaded. Returns the names of the added tabs.
    pub fn merge_new_tools(&mut self, latest: &LabConfig) -> Vec<String> {
        let default = latest.default_tool();
        let fresh: Vec<Tab> = latest
            .tab_tools()
            .filter(|tool| !self.contains(&tool.name))
            .map(|tool| Tab::from_tool(tool, &self.base_url))
            .collect();
        let mut added = Vec::with_capacity(fresh.len());
        for mut tab in fresh {
            added.push(tab.name.clone());
            if tab.name == default {
                tab.frame = FrameState::Loaded;
                self.tabs.insert(0, tab);
                self.active_index = 0;
            } else {
                self.tabs.push(tab);
                if self.tabs.len() == 1 {
                    self.tabs[0].frame = FrameState::Loaded;
                }
            }
        }
        if !added.is_empty() {
            info!(added = ?added, "new tools added to tool pane");
        }
        added
    }
}
