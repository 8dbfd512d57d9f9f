//! Time formatting helpers

use std::time::Duration;

/// Render milliseconds as zero-padded `MM:SS`.
///
/// Minutes are not capped, so 100 minutes or more render with three digits.
pub fn format_remaining(ms: u64) -> String {
    let seconds = ms / 1000;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Human readable duration such as `1h 2m 3s`
pub fn format_uptime(duration: Duration) -> String {
    let hours = duration.as_secs() / 3600;
    let minutes = (duration.as_secs() % 3600) / 60;
    let seconds = duration.as_secs() % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_remaining(0), "00:00");
        assert_eq!(format_remaining(65_000), "01:05");
        assert_eq!(format_remaining(600_000), "10:00");
        assert_eq!(format_remaining(1_799_000), "29:59");
    }

    #[test]
    fn drops_partial_seconds() {
        assert_eq!(format_remaining(999), "00:00");
        assert_eq!(format_remaining(59_999), "00:59");
    }

    #[test]
    fn minutes_are_not_truncated() {
        assert_eq!(format_remaining(100 * 60_000), "100:00");
    }

    #[test]
    fn uptime_picks_largest_unit() {
        assert_eq!(format_uptime(Duration::from_secs(7)), "7s");
        assert_eq!(format_uptime(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_uptime(Duration::from_secs(3723)), "1h 2m 3s");
    }
}
