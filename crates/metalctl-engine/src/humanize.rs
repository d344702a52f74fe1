//! Compact human readable durations, relative times and sizes.

use chrono::{DateTime, TimeDelta, Utc};

/// Renders at most the two most significant of days, hours, minutes and
/// seconds, e.g. `3d 4h` or `5m 2s`. Zero renders as `0s`.
pub fn humanize_duration(duration: TimeDelta) -> String {
    let secs = duration.num_seconds().unsigned_abs();
    let chunks = [
        (secs / 86_400, "d"),
        (secs % 86_400 / 3_600, "h"),
        (secs % 3_600 / 60, "m"),
        (secs % 60, "s"),
    ];

    let parts: Vec<String> = chunks
        .iter()
        .filter(|(amount, _)| *amount > 0)
        .take(2)
        .map(|(amount, unit)| format!("{}{}", amount, unit))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

/// `3 days ago`, `2 hours from now`, `now`.
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(ts);
    let secs = diff.num_seconds();
    if secs == 0 {
        return "now".to_string();
    }

    let suffix = if secs > 0 { "ago" } else { "from now" };
    let secs = secs.unsigned_abs();

    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;
    const WEEK: u64 = 7 * DAY;
    const MONTH: u64 = 30 * DAY;
    const YEAR: u64 = 365 * DAY;

    let (amount, unit) = match secs {
        s if s < MINUTE => (s, "second"),
        s if s < HOUR => (s / MINUTE, "minute"),
        s if s < DAY => (s / HOUR, "hour"),
        s if s < WEEK => (s / DAY, "day"),
        s if s < MONTH => (s / WEEK, "week"),
        s if s < YEAR => (s / MONTH, "month"),
        s => (s / YEAR, "year"),
    };

    if amount == 1 {
        format!("1 {} {}", unit, suffix)
    } else {
        format!("{} {}s {}", amount, unit, suffix)
    }
}

/// Cuts `s` to at most `max` characters, marking the cut with `...`.
pub fn truncate_end(s: &str, max: usize) -> String {
    const ELLIPSIS: &str = "...";

    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// SI byte sizes: `512 B`, `1.5 GB`, `64 GB`.
pub fn humanize_bytes(bytes: u64) -> String {
    const UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

    if bytes < 10 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    let rounded = (value * 10.0).round() / 10.0;
    if rounded < 10.0 && unit > 0 {
        format!("{:.1} {}", rounded, UNITS[unit])
    } else {
        format!("{:.0} {}", rounded, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_humanize_duration_keeps_two_parts() {
        let d = TimeDelta::days(3) + TimeDelta::hours(4) + TimeDelta::minutes(5);
        assert_eq!(humanize_duration(d), "3d 4h");
        assert_eq!(humanize_duration(TimeDelta::seconds(62)), "1m 2s");
        assert_eq!(humanize_duration(TimeDelta::hours(2) + TimeDelta::seconds(9)), "2h 9s");
        assert_eq!(humanize_duration(TimeDelta::zero()), "0s");
        assert_eq!(humanize_duration(TimeDelta::milliseconds(400)), "0s");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now, now), "now");
        assert_eq!(relative_time(now - TimeDelta::seconds(1), now), "1 second ago");
        assert_eq!(relative_time(now - TimeDelta::hours(3), now), "3 hours ago");
        assert_eq!(relative_time(now - TimeDelta::days(10), now), "1 week ago");
        assert_eq!(relative_time(now + TimeDelta::days(2), now), "2 days from now");
        assert_eq!(relative_time(now - TimeDelta::days(800), now), "2 years ago");
    }

    #[test]
    fn test_truncate_end() {
        assert_eq!(truncate_end("short", 10), "short");
        assert_eq!(truncate_end("abcdefghijkl", 8), "abcde...");
        assert_eq!(truncate_end("äöüäöüäöü", 6), "äöü...");
    }

    #[test]
    fn test_humanize_bytes() {
        assert_eq!(humanize_bytes(0), "0 B");
        assert_eq!(humanize_bytes(512), "512 B");
        assert_eq!(humanize_bytes(1_500_000_000), "1.5 GB");
        assert_eq!(humanize_bytes(64_000_000_000), "64 GB");
        assert_eq!(humanize_bytes(4_000_000_000_000), "4.0 TB");
    }
}
