//! LabShell struct and its accessors.

use std::path::PathBuf;

use labshell_config::ShellSettings;
use labshell_layout::{SessionStore, SplitLayoutController};
use labshell_timer::Countdown;
use labshell_toolpane::{LinkPolicy, ToolPane};

use super::HeadlessHost;

/// What the event loop does after handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Print a line and continue.
    Reply(String),
    Quit,
}

pub struct LabShell {
    pub(super) layout: SplitLayoutController<HeadlessHost, Box<dyn SessionStore>>,
    pub(super) tools: ToolPane,
    pub(super) links: LinkPolicy,
    /// Present only when the lab shows a timer.
    pub(super) countdown: Option<Countdown>,
    pub(super) settings: ShellSettings,
    /// Lab config file re-read on reload.
    pub(super) config_path: PathBuf,
}

impl LabShell {
    // -- Accessors --

    pub fn layout(&self) -> &SplitLayoutController<HeadlessHost, Box<dyn SessionStore>> {
        &self.layout
    }

    pub fn tools(&self) -> &ToolPane {
        &self.tools
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }
}
