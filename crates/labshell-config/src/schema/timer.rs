//! Countdown timer settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    /// Refresh interval of the countdown display (valid range: 100-60000).
    pub tick_ms: u64,
    /// Delay between showing `00:00` and leaving the page (valid range: 0-10000).
    pub expired_grace_ms: u64,
    /// Where the shell navigates once the sandbox has expired.
    pub expired_redirect: String,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            expired_grace_ms: 1000,
            expired_redirect: "/expired.html".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_settings_defaults() {
        let settings = TimerSettings::default();
        assert_eq!(settings.tick_ms, 1000);
        assert_eq!(settings.expired_grace_ms, 1000);
        assert_eq!(settings.expired_redirect, "/expired.html");
    }
}
