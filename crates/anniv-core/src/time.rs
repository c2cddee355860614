use chrono::{Datelike, NaiveDate};

/// Clock abstracts access to the current date so rendering stays deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;

    /// Year the date index is built around. Defaults to `today().year()`.
    fn reference_year(&self) -> i32 {
        self.today().year()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_year() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 4, 10).unwrap());
        assert_eq!(clock.reference_year(), 2024);
    }
}
