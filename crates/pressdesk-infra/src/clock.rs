//! Clocks and id generators.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use pressdesk_core::ports::{Clock, IdGenerator};

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to one instant. Used by tests and reproducible demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    millis: i64,
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(millis: i64, date: NaiveDate) -> Self {
        Self { millis, date }
    }

    /// Midnight UTC of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        let millis = date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default();
        Self { millis, date }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}

/// Current time in milliseconds, nothing more. Two creates inside the same
/// millisecond get the same candidate id.
pub struct TimestampIdGenerator {
    clock: Arc<dyn Clock>,
}

impl TimestampIdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> i64 {
        self.clock.now_millis()
    }
}

/// Clock-seeded counter: `max(now_millis, last + 1)`.
///
/// Ids stay close to creation time but never repeat within one process.
pub struct MonotonicIdGenerator {
    clock: Arc<dyn Clock>,
    last: AtomicI64,
}

impl MonotonicIdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last: AtomicI64::new(0),
        }
    }
}

impl IdGenerator for MonotonicIdGenerator {
    fn next_id(&self) -> i64 {
        let now = self.clock.now_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed() -> Arc<dyn Clock> {
        Arc::new(FixedClock::new(
            1_760_000_000_000,
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        ))
    }

    #[test]
    fn test_timestamp_ids_collide_within_a_millisecond() {
        let ids = TimestampIdGenerator::new(fixed());
        assert_eq!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn test_monotonic_ids_never_repeat() {
        let ids = MonotonicIdGenerator::new(fixed());
        let first = ids.next_id();
        let second = ids.next_id();
        let third = ids.next_id();
        assert_eq!(first, 1_760_000_000_000);
        assert_eq!(second, first + 1);
        assert_eq!(third, first + 2);
    }

    #[test]
    fn test_fixed_clock_at_date() {
        let date = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();
        let clock = FixedClock::at_date(date);
        assert_eq!(clock.now_millis(), 86_400_000);
        assert_eq!(clock.today(), date);
    }
}
