//! Core types for the tool pane.

use labshell_config::{LabConfig, ToolEntry};
use serde::Serialize;
use tracing::{info, warn};

use crate::frame::{FrameSpec, FrameState, ABOUT_BLANK};
use crate::url::resolve_tool_url;

/// One tab of the tool pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub name: String,
    /// Tool URL, already resolved against the page URL.
    pub url: String,
    pub frame: FrameState,
}

impl Tab {
    pub(super) fn from_tool(tool: &ToolEntry, base_url: &str) -> Self {
        Self {
            name: tool.name.clone(),
            url: resolve_tool_url(&tool.url, base_url),
            frame: FrameState::Blank,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.frame == FrameState::Loaded
    }
}

/// Result of showing a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// No tab has that name.
    Unknown,
    /// The tab's frame was loaded before; nothing reloads.
    Shown,
    /// First time shown: the frame's `src` switches to the tool URL.
    LoadedNow,
}

/// Ordered tabs with exactly one active tab whenever any exist.
#[derive(Debug, Clone, Serialize)]
pub struct ToolPane {
    pub(super) tabs: Vec<Tab>,
    pub(super) active_index: usize,
    pub(super) base_url: String,
    pub(super) sandbox: String,
}

impl ToolPane {
    /// Build tabs for every non-instructions tool in configuration order.
    ///
    /// The tab named by `defaultTool` starts active and loaded. If no tab
    /// has that name the first tab takes its place.
    pub fn from_config(config: &LabConfig, base_url: &str, sandbox: impl Into<String>) -> Self {
        let tabs: Vec<Tab> = config
            .tab_tools()
            .map(|tool| Tab::from_tool(tool, base_url))
            .collect();
        let mut pane = Self {
            tabs,
            active_index: 0,
            base_url: base_url.to_string(),
            sandbox: sandbox.into(),
        };
        if pane.tabs.is_empty() {
            warn!("lab config has no tab tools; tool pane is empty");
            return pane;
        }
        let default = config.default_tool();
        match pane.position(default) {
            Some(idx) => pane.active_index = idx,
            None => warn!(
                default,
                fallback = %pane.tabs[0].name,
                "default tool is not a tab; activating the first tab"
            ),
        }
        pane.tabs[pane.active_index].frame = FrameState::Loaded;
        info!(
            tabs = pane.tabs.len(),
            active = %pane.tabs[pane.active_index].name,
            "tool pane built"
        );
        pane
    }

    pub(super) fn position(&self, name: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.name == name)
    }

    // -- Accessors --

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.name == name)
    }

    pub fn active(&self) -> Option<&Tab> {
        self.tabs.get(self.active_index)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn tab_names(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.name.as_str()).collect()
    }

    /// Frame attributes for `name`: the tool URL once loaded, the blank
    /// placeholder before.
    pub fn frame_spec(&self, name: &str) -> Option<FrameSpec> {
        let tab = self.get(name)?;
        let src = if tab.is_loaded() {
            tab.url.as_str()
        } else {
            ABOUT_BLANK
        };
        Some(FrameSpec::new(src, &tab.name, &self.sandbox))
    }
}
