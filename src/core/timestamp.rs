//! Timestamp capture for record prefixes
//!
//! Records carry a syslog-style local timestamp with millisecond
//! resolution, e.g. `Mar 07 09:05:01.042`. The layout is relied on by
//! log scrapers, so it is fixed rather than configurable.

use chrono::{DateTime, Local};
use std::fmt;

/// strftime layout of the record timestamp
pub const RECORD_TIMESTAMP_FORMAT: &str = "%b %d %H:%M:%S%.3f";

/// Wall-clock instant captured once per emitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(DateTime<Local>);

impl Timestamp {
    #[must_use]
    pub fn now() -> Self {
        Self(Local::now())
    }

    #[must_use]
    pub fn from_datetime(datetime: DateTime<Local>) -> Self {
        Self(datetime)
    }

    #[must_use]
    pub fn datetime(&self) -> &DateTime<Local> {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RECORD_TIMESTAMP_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed(ms: i64) -> Timestamp {
        let base = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).single().unwrap();
        Timestamp::from_datetime(base + Duration::milliseconds(ms))
    }

    #[test]
    fn test_layout() {
        assert_eq!(fixed(42).to_string(), "Mar 07 09:05:01.042");
        assert_eq!(fixed(999).to_string(), "Mar 07 09:05:01.999");
    }

    #[test]
    fn test_now_has_millisecond_field() {
        let rendered = Timestamp::now().to_string();
        let (_, millis) = rendered.rsplit_once('.').unwrap();
        assert_eq!(millis.len(), 3);
        assert!(millis.chars().all(|c| c.is_ascii_digit()));
    }
}
