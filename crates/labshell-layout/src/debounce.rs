//! Cancel-and-reschedule debouncer.
//!
//! Holds at most one pending deadline. Every trigger replaces the previous
//! deadline, so a burst of triggers fires once, `window` after the last one.
//! Time is passed in explicitly; the host's event loop sleeps until
//! [`Debouncer::deadline`] and then calls [`Debouncer::fire`].

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Schedule a firing `window` after `now`, replacing any pending one.
    /// Returns `true` if a pending firing was cancelled.
    pub fn trigger(&mut self, now: Instant) -> bool {
        self.deadline.replace(now + self.window).is_some()
    }

    /// Drop the pending firing, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Consume the pending firing if its deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
