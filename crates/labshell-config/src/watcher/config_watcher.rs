//! Debounced watcher for the lab payload file.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::time::Duration;

use labshell_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::{broadcast, mpsc};
use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, warn};

/// Watches one file and emits `()` after each burst of changes to it.
pub struct ConfigWatcher {
    path: PathBuf,
    debounce: Duration,
}

impl ConfigWatcher {
    /// The file need not exist yet; its creation counts as a change.
    pub fn new(path: PathBuf, debounce: Duration) -> Result<Self, ConfigError> {
        if path.file_name().is_none() {
            return Err(ConfigError::WatchError(format!(
                "{} does not name a file",
                path.display()
            )));
        }
        if !path.exists() {
            warn!("{} does not exist yet, watching for creation", path.display());
        }
        Ok(Self { path, debounce })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory actually handed to `notify`; editors replace files by
    /// rename, so the parent is watched rather than the file.
    fn watch_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Run until the notify channel closes, sending one signal on `tx` per
    /// burst. Every change inside the debounce window pushes the signal back.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let dir = self.watch_dir();
        let file_name: OsString = self.path.file_name().unwrap_or_default().to_os_string();
        let (raw_tx, mut raw_rx) = mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) if touches(&event, &file_name) => {
                    let _ = raw_tx.try_send(());
                }
                Ok(_) => {}
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::WatchError(format!("failed to watch {}: {e}", dir.display())))?;
        info!("watching {} for new tools", self.path.display());

        while raw_rx.recv().await.is_some() {
            let quiet = sleep(self.debounce);
            tokio::pin!(quiet);
            loop {
                tokio::select! {
                    _ = &mut quiet => break,
                    more = raw_rx.recv() => match more {
                        Some(()) => quiet.as_mut().reset(Instant::now() + self.debounce),
                        None => return Ok(()),
                    },
                }
            }
            debug!("lab config changed");
            if tx.send(()).is_err() {
                debug!("nobody listening for lab config changes");
            }
        }
        Ok(())
    }
}

/// Whether `event` creates or modifies the file called `file_name`.
fn touches(event: &Event, file_name: &OsStr) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn modify_and_create_of_our_file_count() {
        let name = OsStr::new("config.json");
        assert!(touches(&event(EventKind::Modify(ModifyKind::Any), "/lab/config.json"), name));
        assert!(touches(&event(EventKind::Create(CreateKind::File), "/lab/config.json"), name));
    }

    #[test]
    fn other_files_and_removals_are_ignored() {
        let name = OsStr::new("config.json");
        assert!(!touches(&event(EventKind::Modify(ModifyKind::Any), "/lab/other.json"), name));
        assert!(!touches(&event(EventKind::Remove(RemoveKind::File), "/lab/config.json"), name));
    }
}
