//! Startup inputs: lab payload, session store and argument checks.

use labshell_common::{LabError, Result};
use labshell_config::lab::load_lab_config;
use labshell_config::LabConfig;
use labshell_layout::{FileStore, MemoryStore, SessionStore};
use tracing::info;

use crate::cli::Args;

/// Load the lab payload named by the arguments.
pub fn load_lab(args: &Args) -> Result<LabConfig> {
    if !args.width.is_finite() || args.width <= 0.0 {
        return Err(LabError::Other(format!("invalid --width: {}", args.width)));
    }
    Ok(load_lab_config(args.inline.as_deref(), &args.config)?)
}

/// Open the session store. A file store is probed with `key` so an
/// unreadable file surfaces here rather than on the first toggle.
pub fn open_store(args: &Args, key: &str) -> Result<Box<dyn SessionStore>> {
    let Some(path) = &args.session_file else {
        return Ok(Box::new(MemoryStore::new()));
    };
    let store = FileStore::new(path);
    store.get(key)?;
    info!("session storage at {}", path.display());
    Ok(Box::new(store))
}
