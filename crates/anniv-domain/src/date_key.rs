//! `YYYY-MM-DD` keys used to index rendered labels.

use std::fmt;

use chrono::NaiveDate;

const KEY_FORMAT: &str = "%Y-%m-%d";

/// Date key in `YYYY-MM-DD` form.
///
/// Ordering is plain string ordering, which is chronological for zero-padded
/// keys. The key is not required to name a real calendar day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(String);

impl DateKey {
    /// Joins a year with an `MM-DD` suffix without validating it.
    pub fn compose(year: i32, month_day: &str) -> Self {
        Self(format!("{year}-{month_day}"))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(KEY_FORMAT).to_string())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self(format!("{year}-{month:02}-{day:02}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the key back into a date when it names a real day.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, KEY_FORMAT).ok()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_sort_chronologically() {
        let mut keys = vec![
            DateKey::from_ymd(2025, 1, 2),
            DateKey::from_ymd(2024, 12, 31),
            DateKey::from_ymd(2024, 2, 9),
            DateKey::from_ymd(2024, 10, 1),
        ];
        keys.sort();
        let rendered: Vec<_> = keys.iter().map(DateKey::as_str).collect();
        assert_eq!(
            rendered,
            vec!["2024-02-09", "2024-10-01", "2024-12-31", "2025-01-02"]
        );
    }

    #[test]
    fn compose_keeps_invalid_month_day() {
        let key = DateKey::compose(2024, "13-40");
        assert_eq!(key.as_str(), "2024-13-40");
        assert!(key.to_date().is_none());
    }

    #[test]
    fn from_date_matches_from_ymd() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        assert_eq!(DateKey::from(date), DateKey::from_ymd(2024, 4, 2));
        assert_eq!(DateKey::from_ymd(2024, 4, 2).to_date(), Some(date));
    }
}
