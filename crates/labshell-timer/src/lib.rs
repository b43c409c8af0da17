//! Sandbox expiration countdown.
//!
//! The countdown is driven by explicit timestamps: the caller ticks it on
//! its own interval and acts on the returned [`Tick`].

mod countdown;
mod format;

pub use countdown::{Countdown, Tick};
pub use format::{format_mmss, PLACEHOLDER};
