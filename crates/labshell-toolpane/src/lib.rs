//! The tabbed tool pane: one lazily loaded frame per non-instructions tool.
//!
//! [`ToolPane`] tracks which tabs exist, which is active and which frames
//! have been loaded. [`links`] decides how anchors inside embedded content
//! open.

pub mod frame;
pub mod links;
pub mod pane;
pub mod url;

pub use frame::{FrameSpec, FrameState, ABOUT_BLANK};
pub use links::{LinkPolicy, LinkTarget};
pub use pane::{Activation, Tab, ToolPane};
