//! Wall-clock access behind a trait so tests can pin "now".

use chrono::{DateTime, FixedOffset, Local};

/// Format used for feed timestamps (`17:42:01`)
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Format used by the `date` command (`Tue Feb 10 2026 17:42:01 GMT+0300`)
pub const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Source of the current time
pub trait Clock: std::fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current time formatted as `HH:MM:SS`
    fn timestamp(&self) -> String {
        self.now().format(TIME_FORMAT).to_string()
    }
}

/// Local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self(at)
    }

    /// Parse an RFC 3339 timestamp, e.g. `2026-02-10T17:42:01+03:00`
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(rfc3339).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_timestamp() {
        let clock = FixedClock::parse("2026-02-10T17:42:01+03:00").unwrap();
        assert_eq!(clock.timestamp(), "17:42:01");
    }

    #[test]
    fn test_fixed_clock_date_format() {
        let clock = FixedClock::parse("2026-02-10T17:42:01+03:00").unwrap();
        assert_eq!(
            clock.now().format(DATE_FORMAT).to_string(),
            "Tue Feb 10 2026 17:42:01 GMT+0300"
        );
    }

    #[test]
    fn test_system_clock_timestamp_shape() {
        let ts = SystemClock.timestamp();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.chars().filter(|c| *c == ':').count(), 2);
    }
}
