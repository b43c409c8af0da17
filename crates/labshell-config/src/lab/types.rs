//! Lab payload types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `kind` value that routes a tool to the instructions region.
pub const INSTRUCTIONS_KIND: &str = "instructions";

/// Root of the lab payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabConfig {
    pub config: LabSection,
    pub tools: Vec<ToolEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabSection {
    /// Name of the tab that starts active.
    pub default_tool: String,
    /// When the sandbox is torn down.
    pub expires_at: DateTime<Utc>,
    #[serde(default = "default_show_timer")]
    pub show_timer: bool,
}

fn default_show_timer() -> bool {
    true
}

/// One embedded sub-application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub url: String,
}

/// Where a tool is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// The dedicated instructions region.
    Instructions,
    /// A tab in the tool pane.
    Tab,
}

impl ToolEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            url: url.into(),
        }
    }

    pub fn instructions(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: Some(INSTRUCTIONS_KIND.to_string()),
            url: url.into(),
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self.kind.as_deref() {
            Some(INSTRUCTIONS_KIND) => ToolKind::Instructions,
            _ => ToolKind::Tab,
        }
    }

    pub fn is_instructions(&self) -> bool {
        self.kind() == ToolKind::Instructions
    }
}

impl LabConfig {
    /// The tool routed to the instructions region, if any.
    pub fn instructions_tool(&self) -> Option<&ToolEntry> {
        self.tools.iter().find(|t| t.is_instructions())
    }

    /// Tools shown as tabs, in configuration order.
    pub fn tab_tools(&self) -> impl Iterator<Item = &ToolEntry> {
        self.tools.iter().filter(|t| !t.is_instructions())
    }

    pub fn default_tool(&self) -> &str {
        &self.config.default_tool
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.config.expires_at
    }

    pub fn show_timer(&self) -> bool {
        self.config.show_timer
    }
}
