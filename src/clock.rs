//! Wall-clock source for response timestamps.

use std::fmt;

use chrono::{Local, NaiveDateTime};

/// Timestamp layout: ISO-8601 local date-time, no offset.
///
/// The fraction is printed only when non-zero, in 3, 6 or 9 digits.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Source of the current local date-time.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Current local date-time.
    fn now(&self) -> NaiveDateTime;

    /// Current local date-time rendered with [`TIMESTAMP_FORMAT`].
    fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

/// Clock backed by the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Render a date-time the way every endpoint reports it.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp produced by [`format_timestamp`].
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
}
