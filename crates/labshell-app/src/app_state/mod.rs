//! Top-level shell state.
//!
//! Owns the split layout controller, the tool pane and the countdown, and
//! routes line commands, timer ticks, debounced viewport re-evaluations and
//! config reloads to them.

mod core;
mod dispatch;
mod host;
mod init;
mod run;

pub use self::core::{Flow, LabShell};
pub use host::HeadlessHost;
pub use init::Launch;
