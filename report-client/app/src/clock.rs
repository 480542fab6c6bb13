//! Reference-timezone clock.
//!
//! "Today" is always computed in Japan Standard Time, independent of the
//! viewer's own timezone, so the report rolls over once per JST day.

use std::sync::Mutex;
use std::sync::PoisonError;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Timelike, Utc};

const JST_OFFSET_HOURS: i32 = 9;

/// JST as a fixed offset. Japan observes no daylight saving time.
#[must_use]
pub fn reference_offset() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_HOURS * 3600).expect("valid JST offset")
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *guard += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// An instant expressed in the reference timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceTime {
    local: DateTime<FixedOffset>,
}

impl ReferenceTime {
    #[must_use]
    pub fn from_utc(now: DateTime<Utc>) -> Self {
        Self {
            local: now.with_timezone(&reference_offset()),
        }
    }

    #[must_use]
    pub fn local(&self) -> DateTime<FixedOffset> {
        self.local
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.local.date_naive()
    }

    /// ISO calendar date (`YYYY-MM-DD`), used as the cache date key.
    #[must_use]
    pub fn date_key(&self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }

    #[must_use]
    pub fn hour(&self) -> u32 {
        self.local.hour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_date_key_uses_jst() {
        // 14:59 UTC is 23:59 JST the same day
        let before = ReferenceTime::from_utc(utc(2025, 7, 25, 14, 59));
        assert_eq!(before.date_key(), "2025-07-25");
        assert_eq!(before.hour(), 23);

        // 15:00 UTC is midnight JST the next day
        let after = ReferenceTime::from_utc(utc(2025, 7, 25, 15, 0));
        assert_eq!(after.date_key(), "2025-07-26");
        assert_eq!(after.hour(), 0);
    }

    #[test]
    fn test_date_key_has_no_time_component() {
        let time = ReferenceTime::from_utc(utc(2026, 1, 5, 3, 0));
        assert_eq!(time.date_key(), "2026-01-05");
    }

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(utc(2025, 7, 25, 0, 0));
        clock.advance(Duration::hours(15));
        assert_eq!(clock.now(), utc(2025, 7, 25, 15, 0));
        clock.set(utc(2030, 1, 1, 0, 0));
        assert_eq!(clock.now(), utc(2030, 1, 1, 0, 0));
    }

    proptest! {
        #[test]
        fn prop_date_key_matches_utc_plus_nine(secs in 0i64..4_000_000_000) {
            let instant = DateTime::<Utc>::from_timestamp(secs, 0).unwrap();
            let shifted = (instant + Duration::hours(9)).naive_utc().date();
            prop_assert_eq!(
                ReferenceTime::from_utc(instant).date_key(),
                shifted.format("%Y-%m-%d").to_string()
            );
        }

        #[test]
        fn prop_date_key_round_trips_through_naive_date(secs in 0i64..4_000_000_000) {
            let time = ReferenceTime::from_utc(DateTime::<Utc>::from_timestamp(secs, 0).unwrap());
            let parsed = NaiveDate::parse_from_str(&time.date_key(), "%Y-%m-%d").unwrap();
            prop_assert_eq!(parsed, time.date());
        }
    }
}
