pub mod day;
pub mod room;
pub mod schedule;
pub mod session;
pub mod slot;

use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};

/// Timezone-normalized instant used for all session and slot boundaries.
pub type EventTime = DateTime<FixedOffset>;

/// Parses an export timestamp (RFC 3339, e.g. `2024-06-10T09:00:00+02:00`).
pub fn parse_event_time(value: &str) -> Result<EventTime> {
    DateTime::parse_from_rfc3339(value).map_err(|source| Error::InvalidTimestamp {
        value: value.to_string(),
        source,
    })
}
