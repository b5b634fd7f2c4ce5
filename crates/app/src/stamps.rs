//! Date, time, and call-site stamps.

use chrono::{DateTime, Utc};
use std::panic::Location;
use std::time::SystemTime;

/// Which optional stamps a record carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordStamps {
    /// Stamp the UTC date.
    pub date: bool,
    /// Stamp the UTC time.
    pub time: bool,
    /// Stamp the calling `file:line`.
    pub location: bool,
}

/// UTC date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(timestamp: SystemTime) -> String {
    DateTime::<Utc>::from(timestamp).format("%Y-%m-%d").to_string()
}

/// UTC time as `HH:MM:SS.nnnnnnnnn`.
#[must_use]
pub fn format_time(timestamp: SystemTime) -> String {
    DateTime::<Utc>::from(timestamp)
        .format("%H:%M:%S%.9f")
        .to_string()
}

/// `file:line` of a call site.
#[must_use]
pub fn format_location(location: &Location<'_>) -> String {
    format!("{}:{}", location.file(), location.line())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn timestamps_render_in_utc() {
        // 2021-03-04T05:06:07.000000089Z
        let timestamp = UNIX_EPOCH + Duration::new(1_614_834_367, 89);
        assert_eq!(format_date(timestamp), "2021-03-04");
        assert_eq!(format_time(timestamp), "05:06:07.000000089");
    }

    #[test]
    fn location_names_this_file() {
        let location = format_location(Location::caller());
        assert!(location.contains("stamps.rs:"), "location: {location}");
    }
}
