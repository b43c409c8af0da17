//! TOML settings file loading and creation.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path};
pub use paths::{create_default_settings, default_settings_path, settings_path_in};
