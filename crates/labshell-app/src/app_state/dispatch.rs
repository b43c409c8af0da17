//! Command dispatch: routes line commands, timer ticks and reloads to the
//! subsystem that owns them.

use std::time::Instant;

use chrono::{DateTime, Utc};
use labshell_common::Rect;
use labshell_config::lab::load_lab_config_file;
use labshell_layout::{SplitSizes, ViewportMode, ViewportSignal};
use labshell_timer::PLACEHOLDER;
use labshell_toolpane::{Activation, Tab};
use serde::Serialize;
use tracing::{debug, warn};

use super::{Flow, LabShell};
use crate::command::{Command, SignalSource};

#[derive(Serialize)]
struct Status<'a> {
    layout: String,
    collapsed: bool,
    instructions_visible: bool,
    split_mounted: bool,
    expand_tab_visible: bool,
    toggle_label: &'static str,
    listening: bool,
    sizes: Option<SplitSizes>,
    /// Pixel widths of the instructions and tool panes.
    panes_px: Option<[f64; 2]>,
    active_tab: Option<&'a str>,
    tabs: &'a [Tab],
    timer: &'a str,
}

impl LabShell {
    /// Apply one command.
    pub fn handle(&mut self, command: Command, now: Instant) -> Flow {
        match command {
            Command::Viewport { source, width } => {
                self.layout.host_mut().set_width(width);
                let signal = match source {
                    SignalSource::Resize => ViewportSignal::WindowResize,
                    SignalSource::Orientation => ViewportSignal::OrientationChange,
                    SignalSource::VisualViewport => ViewportSignal::VisualViewportResize,
                    SignalSource::Media => {
                        let bp = self.layout.options().breakpoint_px;
                        ViewportSignal::BreakpointMatch(
                            ViewportMode::for_width(width, bp) == ViewportMode::Desktop,
                        )
                    }
                };
                self.layout.on_viewport_signal(signal, now);
                Flow::Continue
            }
            Command::Toggle => {
                if !self.layout.toggle() {
                    return Flow::Reply("toggle unavailable: no split".into());
                }
                Flow::Continue
            }
            Command::Drag { left, right } => {
                if !self.layout.has_widget() {
                    return Flow::Reply("drag ignored: no split".into());
                }
                let saved = self.layout.on_drag_end(left, right);
                debug!(saved, "drag ended");
                Flow::Continue
            }
            Command::Tab(name) => match self.tools.activate(&name) {
                Activation::Unknown => Flow::Reply(format!("no such tab: {name}")),
                Activation::Shown | Activation::LoadedNow => {
                    match self.tools.frame_spec(&name) {
                        Some(frame) => Flow::Reply(format!("frame {} -> {}", frame.title, frame.src)),
                        None => Flow::Continue,
                    }
                }
            },
            Command::Link(href) => {
                let reply = match self.links.classify(&href).attributes() {
                    Some((target, rel)) => format!("{href}: target={target} rel=\"{rel}\""),
                    None => format!("{href}: in place"),
                };
                Flow::Reply(reply)
            }
            Command::Reload => {
                let added = self.reload_tools();
                Flow::Reply(format!("{} new tools", added.len()))
            }
            Command::Status => Flow::Reply(self.status_json()),
            Command::Quit => Flow::Quit,
        }
    }

    /// Advance the countdown. Returns the redirect target once the sandbox
    /// has expired.
    pub fn tick_timer(&mut self, now: DateTime<Utc>) -> Option<String> {
        let countdown = self.countdown.as_mut()?;
        let tick = if countdown.is_started() {
            countdown.tick(now)
        } else {
            countdown.start(now)
        };
        debug!(remaining = tick.remaining_secs, display = %tick.display, "timer tick");
        tick.redirect
    }

    /// Re-read the lab config and add tabs for tools that appeared.
    pub fn reload_tools(&mut self) -> Vec<String> {
        match load_lab_config_file(&self.config_path) {
            Ok(latest) => self.tools.merge_new_tools(&latest),
            Err(e) => {
                warn!("lab config reload failed: {e}");
                Vec::new()
            }
        }
    }

    fn status_json(&self) -> String {
        let host = self.layout.host();
        let panes_px = self.layout.widget().map(|widget| {
            let (left, right) = widget.compute(Rect::new(0.0, 0.0, host.width(), 0.0));
            [left.width, right.width]
        });
        let status = Status {
            layout: format!("{:?}", self.layout.state()),
            collapsed: self.layout.is_collapsed(),
            instructions_visible: host.instructions_visible(),
            split_mounted: host.is_mounted(),
            expand_tab_visible: host.affordance().expand_tab_visible,
            toggle_label: host.affordance().aria_label,
            listening: host.is_listening(),
            sizes: self.layout.sizes(),
            panes_px,
            active_tab: self.tools.active().map(|t| t.name.as_str()),
            tabs: self.tools.tabs(),
            timer: self
                .countdown
                .as_ref()
                .map_or(PLACEHOLDER, |c| c.display()),
        };
        serde_json::to_string(&status)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize status: {e}\"}}"))
    }
}
