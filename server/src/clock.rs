use time::OffsetDateTime;

/// UTC instant captured once when the process starts. Copied into every
/// handler through [`crate::AppState`] and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartClock(OffsetDateTime);

impl StartClock {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Whole seconds elapsed between start and `now`, truncated.
    /// Never negative, even if the wall clock stepped backwards.
    pub fn uptime_seconds(&self, now: OffsetDateTime) -> u64 {
        u64::try_from((now - self.0).whole_seconds()).unwrap_or(0)
    }
}

impl From<OffsetDateTime> for StartClock {
    fn from(started_at: OffsetDateTime) -> Self {
        Self(started_at.to_offset(time::UtcOffset::UTC))
    }
}
