//! Countdown display formatting.

/// Display before the countdown starts.
pub const PLACEHOLDER: &str = "--:--";

/// `MM:SS`, both zero-padded. Minutes do not wrap into hours.
pub fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_both_fields() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(9), "00:09");
        assert_eq!(format_mmss(61), "01:01");
        assert_eq!(format_mmss(3599), "59:59");
    }

    #[test]
    fn minutes_exceed_an_hour() {
        assert_eq!(format_mmss(3600), "60:00");
        assert_eq!(format_mmss(7325), "122:05");
    }
}
