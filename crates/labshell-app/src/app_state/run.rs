//! The event loop: stdin commands, timer ticks, debounced viewport
//! re-evaluations and config reloads.

use std::time::Duration;

use labshell_config::ConfigWatcher;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tokio::time::{sleep_until, Instant as TokioInstant, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::{Flow, LabShell};
use crate::command::Command;

impl LabShell {
    /// Run until stdin closes, `quit` is read or the sandbox expires.
    pub async fn run(mut self) {
        let (reload_tx, mut reload_rx) = broadcast::channel::<()>(8);
        let mut watching = self.settings.toolpane.watch_for_new_tools;
        if watching {
            self.spawn_config_watcher(reload_tx);
        } else {
            drop(reload_tx);
        }

        let mut ticker = tokio::time::interval(Duration::from_millis(self.settings.timer.tick_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let timed = self.countdown.is_some();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let deadline = self.layout.pending_deadline();
            let wake = deadline.map_or_else(TokioInstant::now, TokioInstant::from_std);

            tokio::select! {
                line = lines.next_line() => match line {
                    Ok(Some(line)) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        let command = match line.parse::<Command>() {
                            Ok(command) => command,
                            Err(e) => {
                                println!("error: {e}");
                                continue;
                            }
                        };
                        match self.handle(command, std::time::Instant::now()) {
                            Flow::Continue => {}
                            Flow::Reply(reply) => println!("{reply}"),
                            Flow::Quit => break,
                        }
                    }
                    Ok(None) => {
                        debug!("stdin closed");
                        break;
                    }
                    Err(e) => {
                        warn!("failed to read command: {e}");
                        break;
                    }
                },
                _ = sleep_until(wake), if deadline.is_some() => {
                    self.layout.poll(std::time::Instant::now());
                }
                _ = ticker.tick(), if timed => {
                    if let Some(target) = self.tick_timer(chrono::Utc::now()) {
                        println!("redirect {target}");
                        break;
                    }
                }
                signal = reload_rx.recv(), if watching => match signal {
                    Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                        let added = self.reload_tools();
                        if !added.is_empty() {
                            println!("added tools: {}", added.join(", "));
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        debug!("config watcher stopped");
                        watching = false;
                    }
                },
            }
        }

        self.layout.teardown();
        info!("lab shell stopped");
    }

    fn spawn_config_watcher(&self, tx: broadcast::Sender<()>) {
        let debounce = Duration::from_millis(self.settings.toolpane.watch_debounce_ms);
        let watcher = match ConfigWatcher::new(self.config_path.clone(), debounce) {
            Ok(watcher) => watcher,
            Err(e) => {
                warn!("config watcher unavailable: {e}");
                return;
            }
        };
        tokio::spawn(async move {
            if let Err(e) = watcher.watch(tx).await {
                warn!("config watcher failed: {e}");
            }
        });
    }
}
