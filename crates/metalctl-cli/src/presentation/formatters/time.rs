use chrono::{DateTime, SecondsFormat, Utc};
use metalctl_engine::humanize::humanize_duration;

/// `2024-06-01 12:00:00 UTC`
pub fn date_time(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// `2024-06-01T12:00:00Z`
pub fn rfc3339(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Compact age like `3d 4h`, empty when unknown.
pub fn age(ts: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    ts.map(|t| humanize_duration(now.signed_duration_since(t)))
        .unwrap_or_default()
}

/// `2024-06-01 12:00:00 UTC (in 3d 4h)`, or `(expired 2h ago)` once past.
pub fn expiry(expires: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(expires) = expires else {
        return String::new();
    };

    let remaining = expires.signed_duration_since(now);
    if remaining.num_seconds() > 0 {
        format!("{} (in {})", date_time(expires), humanize_duration(remaining))
    } else {
        format!(
            "{} (expired {} ago)",
            date_time(expires),
            humanize_duration(remaining)
        )
    }
}
