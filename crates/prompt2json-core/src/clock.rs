//! Time source for metadata timestamps.

use chrono::{Local, NaiveDateTime, Timelike};

/// A source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Format a local time as ISO-8601 without offset.
///
/// The fractional part is written as microseconds and omitted entirely when
/// it is zero, e.g. `2024-01-02T03:04:05` or `2024-01-02T03:04:05.000678`.
pub fn format_timestamp(time: NaiveDateTime) -> String {
    let base = time.format("%Y-%m-%dT%H:%M:%S").to_string();
    let micros = (time.nanosecond() % 1_000_000_000) / 1_000;
    if micros == 0 {
        base
    } else {
        format!("{}.{:06}", base, micros)
    }
}
