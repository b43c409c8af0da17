//! Resizable instructions/tool split with persisted collapse state and
//! responsive breakpoint switching.
//!
//! The [`SplitLayoutController`] owns all layout state. Everything that
//! touches the page goes through [`LayoutHost`] and [`SessionStore`], so the
//! controller runs the same in a browser binding, the headless shell, and
//! tests.

pub mod controller;
pub mod debounce;
pub mod host;
pub mod options;
pub mod persist;
pub mod sizes;
pub mod viewport;
pub mod widget;

pub use controller::{LayoutState, SplitLayoutController, TransitionStats};
pub use debounce::Debouncer;
pub use host::{Chevron, LayoutHost, NoopHost, ToggleAffordance};
pub use options::LayoutOptions;
pub use persist::{FileStore, MemoryStore, PersistedLayout, SessionStore};
pub use sizes::SplitSizes;
pub use viewport::{ViewportMode, ViewportSignal};
pub use widget::SplitWidget;
