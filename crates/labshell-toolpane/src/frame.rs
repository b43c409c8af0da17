//! Embedded frame description.

use serde::Serialize;

/// Placeholder document for frames that have not been shown yet.
pub const ABOUT_BLANK: &str = "about:blank";

/// Load state of a tab's frame. A frame loads at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameState {
    Blank,
    Loaded,
}

/// Attributes the host puts on a tab's frame element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameSpec {
    pub src: String,
    pub title: String,
    pub loading: &'static str,
    pub sandbox: String,
}

impl FrameSpec {
    pub fn new(src: impl Into<String>, title: impl Into<String>, sandbox: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            title: title.into(),
            loading: "lazy",
            sandbox: sandbox.into(),
        }
    }
}
