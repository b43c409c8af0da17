use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Failures of the session-scoped key/value store backing the split layout.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),

    #[error("session storage quota exceeded ({needed} bytes needed, {limit} allowed)")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("session storage io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("required layout region missing: {0}")]
    MissingRegion(&'static str),

    #[error("split widget unavailable: {0}")]
    WidgetUnavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LabError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
