use anniv_domain::{Bucket, DateKey};
use chrono::{Duration, NaiveDate};

use crate::DateIndex;

const LOOKBACK_DAYS: i64 = 7;
const NEXT_WEEK_DAYS: i64 = 7;
const LOOKAHEAD_DAYS: i64 = 30;

/// The shell feed window: a week back through a month ahead, both ends inclusive.
///
/// Comparisons are made on `YYYY-MM-DD` keys, so calendrically invalid keys
/// still fall somewhere in the ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollingWindow {
    start: DateKey,
    today: DateKey,
    week_end: DateKey,
    end: DateKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowEntry<'a> {
    pub key: &'a DateKey,
    pub bucket: Bucket,
    pub labels: &'a [String],
}

impl RollingWindow {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            start: DateKey::from(today - Duration::days(LOOKBACK_DAYS)),
            today: DateKey::from(today),
            week_end: DateKey::from(today + Duration::days(NEXT_WEEK_DAYS)),
            end: DateKey::from(today + Duration::days(LOOKAHEAD_DAYS)),
        }
    }

    pub fn contains(&self, key: &DateKey) -> bool {
        &self.start <= key && key <= &self.end
    }

    /// Returns the bucket for `key`, or `None` outside the window.
    pub fn classify(&self, key: &DateKey) -> Option<Bucket> {
        if !self.contains(key) {
            return None;
        }
        let bucket = if key < &self.today {
            Bucket::LastWeek
        } else if key == &self.today {
            Bucket::Today
        } else if key <= &self.week_end {
            Bucket::NextWeek
        } else {
            Bucket::NextMonth
        };
        Some(bucket)
    }

    /// Index entries inside the window, in date order.
    pub fn select<'a>(&'a self, index: &'a DateIndex) -> impl Iterator<Item = WindowEntry<'a>> {
        index
            .range(&self.start, &self.end)
            .filter_map(move |(key, labels)| {
                self.classify(key).map(|bucket| WindowEntry {
                    key,
                    bucket,
                    labels,
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn boundaries_are_inclusive() {
        let window = RollingWindow::new(date(2024, 4, 10));

        assert_eq!(
            window.classify(&DateKey::from_ymd(2024, 4, 3)),
            Some(Bucket::LastWeek)
        );
        assert_eq!(window.classify(&DateKey::from_ymd(2024, 4, 2)), None);
        assert_eq!(
            window.classify(&DateKey::from_ymd(2024, 5, 10)),
            Some(Bucket::NextMonth)
        );
        assert_eq!(window.classify(&DateKey::from_ymd(2024, 5, 11)), None);
    }

    #[test]
    fn buckets_partition_the_window() {
        let today = date(2024, 12, 28);
        let window = RollingWindow::new(today);

        let mut day = today - Duration::days(7);
        let mut seen = Vec::new();
        while day <= today + Duration::days(30) {
            let bucket = window
                .classify(&DateKey::from(day))
                .expect("every day in range has a bucket");
            let expected = if day < today {
                Bucket::LastWeek
            } else if day == today {
                Bucket::Today
            } else if day <= today + Duration::days(7) {
                Bucket::NextWeek
            } else {
                Bucket::NextMonth
            };
            assert_eq!(bucket, expected, "{day}");
            seen.push(bucket);
            day += Duration::days(1);
        }

        assert_eq!(seen.iter().filter(|b| **b == Bucket::LastWeek).count(), 7);
        assert_eq!(seen.iter().filter(|b| **b == Bucket::Today).count(), 1);
        assert_eq!(seen.iter().filter(|b| **b == Bucket::NextWeek).count(), 7);
        assert_eq!(seen.iter().filter(|b| **b == Bucket::NextMonth).count(), 23);
    }

    #[test]
    fn invalid_keys_are_ordered_as_strings() {
        let window = RollingWindow::new(date(2024, 12, 20));
        assert_eq!(
            window.classify(&DateKey::compose(2024, "12-40")),
            Some(Bucket::NextMonth)
        );
        assert_eq!(
            window.classify(&DateKey::compose(2024, "13-01")),
            Some(Bucket::NextMonth)
        );
        assert_eq!(window.classify(&DateKey::compose(2023, "13-01")), None);
    }
}
