pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, LabError, LayoutError, StorageError};
pub use id::SandboxId;
pub use types::Rect;

pub type Result<T> = std::result::Result<T, LabError>;
