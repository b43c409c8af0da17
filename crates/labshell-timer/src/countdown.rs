//! Countdown state machine.

use chrono::{DateTime, TimeDelta, Utc};
use labshell_config::schema::TimerSettings;
use tracing::{debug, info};

use crate::format::{format_mmss, PLACEHOLDER};

/// Outcome of one countdown tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub remaining_secs: u64,
    pub display: String,
    /// Set exactly once, when the grace period after reaching zero is over.
    pub redirect: Option<String>,
}

/// Countdown to the sandbox expiration.
#[derive(Debug, Clone)]
pub struct Countdown {
    expires_at: DateTime<Utc>,
    grace: TimeDelta,
    redirect: String,
    /// Last rendered display; the placeholder until started.
    display: String,
    started: bool,
    /// When the countdown was first seen at zero.
    zero_at: Option<DateTime<Utc>>,
    redirected: bool,
}

impl Countdown {
    pub fn new(expires_at: DateTime<Utc>, settings: &TimerSettings) -> Self {
        // Clamped to one day
        let grace_ms = settings.expired_grace_ms.min(86_400_000) as i64;
        Self {
            expires_at,
            grace: TimeDelta::milliseconds(grace_ms),
            redirect: settings.expired_redirect.clone(),
            display: PLACEHOLDER.to_string(),
            started: false,
            zero_at: None,
            redirected: false,
        }
    }

    /// Whole seconds left at `now`, never negative.
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from((self.expires_at - now).num_seconds()).unwrap_or(0)
    }

    /// Start the countdown and render the first value.
    pub fn start(&mut self, now: DateTime<Utc>) -> Tick {
        if !self.started {
            self.started = true;
            info!(expires_at = %self.expires_at, "countdown started");
        }
        self.tick(now)
    }

    /// Advance to `now`. Ticks before [`Countdown::start`] only report the
    /// placeholder.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Tick {
        if !self.started {
            return Tick {
                remaining_secs: self.remaining_secs(now),
                display: PLACEHOLDER.to_string(),
                redirect: None,
            };
        }
        let remaining_secs = self.remaining_secs(now);
        self.display = format_mmss(remaining_secs);

        let mut redirect = None;
        if remaining_secs == 0 {
            let zero_at = *self.zero_at.get_or_insert_with(|| {
                debug!("countdown reached zero");
                now
            });
            if !self.redirected && now - zero_at >= self.grace {
                self.redirected = true;
                info!(to = %self.redirect, "sandbox expired");
                redirect = Some(self.redirect.clone());
            }
        }
        Tick {
            remaining_secs,
            display: self.display.clone(),
            redirect,
        }
    }

    // -- Accessors --

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the expiration redirect has been issued.
    pub fn is_finished(&self) -> bool {
        self.redirected
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}
