//! The lab payload: tools, default tool, expiration and timer flag.

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{load_lab_config, load_lab_config_file, parse_lab_config, INLINE_PLACEHOLDER};
pub use types::*;
