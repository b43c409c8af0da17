//! Link policy for content embedded in the shell.
//!
//! Frames are embedded, so an external link followed in place would
//! navigate the frame away from the lab. Links to other hosts open in a
//! new browsing context instead.

use tracing::trace;

use crate::url::host_of;

/// `rel` applied to links opened in a new tab.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Leave the link as it is.
    InPlace,
    /// `target="_blank"` with [`EXTERNAL_REL`].
    NewTab,
}

impl LinkTarget {
    /// `(target, rel)` attributes to set, if any.
    pub fn attributes(self) -> Option<(&'static str, &'static str)> {
        match self {
            LinkTarget::InPlace => None,
            LinkTarget::NewTab => Some(("_blank", EXTERNAL_REL)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LinkPolicy {
    current_host: String,
}

impl LinkPolicy {
    pub fn new(current_host: impl Into<String>) -> Self {
        Self {
            current_host: current_host.into().to_ascii_lowercase(),
        }
    }

    pub fn current_host(&self) -> &str {
        &self.current_host
    }

    /// Only absolute `http(s)` links are considered. Unparsable links and
    /// links to the current host stay in place.
    pub fn classify(&self, href: &str) -> LinkTarget {
        if !href.starts_with("http") {
            return LinkTarget::InPlace;
        }
        match host_of(href) {
            Some(host) if host != self.current_host => {
                trace!(href, "external link opens in new tab");
                LinkTarget::NewTab
            }
            _ => LinkTarget::InPlace,
        }
    }
}
