use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::StartClock;

pub const TIMEZONE: &str = "UTC";

#[derive(Debug, Clone, Serialize)]
pub struct RuntimeSnapshot {
    pub uptime_seconds: u64,
    pub uptime_human: String,
    pub current_time: String,
    pub timezone: &'static str,
}

impl RuntimeSnapshot {
    pub fn collect(now: OffsetDateTime, clock: StartClock) -> Self {
        let uptime_seconds = clock.uptime_seconds(now);
        let hours = uptime_seconds / 3600;
        let minutes = (uptime_seconds % 3600) / 60;

        Self {
            uptime_seconds,
            uptime_human: human_duration(hours, minutes),
            current_time: rfc3339(now),
            timezone: TIMEZONE,
        }
    }
}

/// `"H hours, M minutes"`; the singular label only for exactly 1.
pub fn human_duration(hours: u64, minutes: u64) -> String {
    format!(
        "{hours} {}, {minutes} {}",
        if hours == 1 { "hour" } else { "hours" },
        if minutes == 1 { "minute" } else { "minutes" },
    )
}

/// RFC 3339 with nanoseconds. Only fails for years outside 0..=9999,
/// in which case an empty string is returned rather than failing the request.
pub fn rfc3339(at: OffsetDateTime) -> String {
    at.to_offset(time::UtcOffset::UTC)
        .format(&Rfc3339)
        .inspect_err(|e| tracing::warn!("unable to format {} as Rfc3339 :: {:?}", at, e))
        .unwrap_or_default()
}
