//! Wall-clock source and build timestamp formatting.

use std::fmt;

use chrono::{Local, NaiveDateTime};

/// `YYYY.MM.DD.HH.mm.ss`, every field zero-padded so stamps sort lexically.
pub const TIMESTAMP_FORMAT: &str = "%Y.%m.%d.%H.%M.%S";

/// Source of the current local time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// A build time rendered as build metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BuildTimestamp(NaiveDateTime);

impl BuildTimestamp {
    /// Capture the clock's current time.
    pub fn now(clock: &dyn Clock) -> Self {
        Self(clock.now())
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for BuildTimestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }
}

impl fmt::Display for BuildTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_format_is_zero_padded() {
        let stamp = BuildTimestamp::from(at(2024, 1, 2, 3, 4, 5));
        assert_eq!(stamp.to_string(), "2024.01.02.03.04.05");
    }

    #[test]
    fn test_format_matches_fixed_width_pattern() {
        let pattern = regex::Regex::new(r"^\d{4}\.\d{2}\.\d{2}\.\d{2}\.\d{2}\.\d{2}$").unwrap();
        for stamp in [
            BuildTimestamp::from(at(2023, 12, 31, 23, 59, 59)),
            BuildTimestamp::from(at(2000, 1, 1, 0, 0, 0)),
            BuildTimestamp::now(&SystemClock),
        ] {
            assert!(pattern.is_match(&stamp.to_string()), "bad stamp: {}", stamp);
        }
    }

    #[test]
    fn test_lexical_order_follows_time_order() {
        let earlier = BuildTimestamp::from(at(2023, 12, 31, 23, 59, 59)).to_string();
        let later = BuildTimestamp::from(at(2024, 1, 2, 3, 4, 5)).to_string();
        assert!(earlier < later);
    }

    #[test]
    fn test_now_reads_the_clock_once() {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .times(1)
            .return_const(at(2024, 1, 2, 3, 4, 5));

        let stamp = BuildTimestamp::now(&clock);
        assert_eq!(stamp.datetime(), at(2024, 1, 2, 3, 4, 5));
    }
}
