//! File watcher for the lab payload.
//!
//! Uses the `notify` crate to watch `config.json`; change bursts are
//! debounced into a single reload signal so newly published tools can be
//! added to the tab set.

mod config_watcher;

#[cfg(test)]
mod tests;

pub use config_watcher::ConfigWatcher;
