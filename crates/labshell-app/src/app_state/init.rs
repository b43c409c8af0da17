//! Shell construction.

use std::path::PathBuf;

use labshell_config::{LabConfig, ShellSettings};
use labshell_layout::{LayoutOptions, SessionStore, SplitLayoutController};
use labshell_timer::Countdown;
use labshell_toolpane::{LinkPolicy, ToolPane};
use tracing::info;

use super::{HeadlessHost, LabShell};

/// Everything needed to bring a shell up.
pub struct Launch {
    pub config: LabConfig,
    pub settings: ShellSettings,
    pub config_path: PathBuf,
    pub width: f64,
    pub base_url: String,
    pub host: String,
    pub store: Box<dyn SessionStore>,
}

impl LabShell {
    /// Build the tool pane, initialize the split layout and set up the
    /// countdown if the lab shows one. The countdown starts on the first
    /// timer tick.
    pub fn launch(launch: Launch) -> Self {
        let Launch {
            config,
            settings,
            config_path,
            width,
            base_url,
            host,
            store,
        } = launch;

        let tools = ToolPane::from_config(&config, &base_url, settings.toolpane.frame_sandbox.as_str());

        let options = LayoutOptions::from(&settings.layout);
        let mut layout = SplitLayoutController::new(HeadlessHost::new(width), store, options);
        layout.initialize(&config);

        let countdown = config
            .show_timer()
            .then(|| Countdown::new(config.expires_at(), &settings.timer));

        info!(
            tabs = tools.len(),
            layout = ?layout.state(),
            timer = countdown.is_some(),
            "lab shell ready"
        );

        Self {
            layout,
            tools,
            links: LinkPolicy::new(host),
            countdown,
            settings,
            config_path,
        }
    }
}
