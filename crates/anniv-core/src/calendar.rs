//! Month matrices and the per-year week counter used by the HTML calendar.

use chrono::{Datelike, Duration, NaiveDate};

use crate::CoreError;

pub const DAYS_PER_WEEK: usize = 7;

const MONDAY: usize = 0;
const THURSDAY: usize = 3;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Monday..Sunday; `0` marks a day outside the month.
pub type Week = [u32; DAYS_PER_WEEK];

/// English month name for `1..=12`.
pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(idx).copied()
}

/// Monday-first month matrix.
pub fn month_matrix(year: i32, month: u32) -> Result<Vec<Week>, CoreError> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::InvalidMonth(month));
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(CoreError::YearOutOfRange(year))?;
    let days = days_in_month(first).ok_or(CoreError::YearOutOfRange(year))?;

    let mut weeks = Vec::with_capacity(6);
    let mut week: Week = [0; DAYS_PER_WEEK];
    let mut column = first.weekday().num_days_from_monday() as usize;
    for day in 1..=days {
        week[column] = day;
        column += 1;
        if column == DAYS_PER_WEEK {
            weeks.push(week);
            week = [0; DAYS_PER_WEEK];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(week);
    }
    Ok(weeks)
}

fn days_in_month(first: NaiveDate) -> Option<u32> {
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
    };
    Some((next_first - Duration::days(1)).day())
}

/// Running week number carried across the twelve months of one year.
///
/// The counter resets entering January. The first matrix week of January is
/// week 1 only when it holds a Thursday; otherwise it stays unnumbered.
/// Every later week counts when its Monday belongs to the month being
/// rendered, so the week straddling two months keeps one number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekNumberState {
    counter: u32,
}

impl WeekNumberState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u32 {
        self.counter
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Advances for one matrix week and returns its number (`0` = none).
    pub fn advance(&mut self, week: &Week, first_of_month: bool) -> u32 {
        if first_of_month && self.counter == 0 {
            if week[THURSDAY] != 0 {
                self.counter = 1;
            }
        } else if week[MONDAY] != 0 {
            self.counter += 1;
        }
        self.counter
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedWeek {
    /// `None` when the week carries no visible number.
    pub number: Option<u32>,
    pub days: Week,
}

/// One month's matrix with week numbers applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<NumberedWeek>,
}

impl CalendarMonth {
    /// Builds the month and advances `state`; January resets it first.
    pub fn build(year: i32, month: u32, state: &mut WeekNumberState) -> Result<Self, CoreError> {
        let matrix = month_matrix(year, month)?;
        if month == 1 {
            state.reset();
        }
        let weeks = matrix
            .into_iter()
            .enumerate()
            .map(|(idx, days)| {
                let number = state.advance(&days, idx == 0);
                NumberedWeek {
                    number: (number > 0).then_some(number),
                    days,
                }
            })
            .collect();
        Ok(Self { year, month, weeks })
    }

    pub fn name(&self) -> &'static str {
        month_name(self.month).unwrap_or_default()
    }
}
