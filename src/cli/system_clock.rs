use std::env;

use anniv_core::{Clock, FixedClock};
use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::settings::TODAY_ENV;

/// Clock backed by the local system date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Uses the date pinned in [`TODAY_ENV`] when set and valid, the system
/// clock otherwise.
pub fn clock_from_env() -> Box<dyn Clock> {
    match env::var(TODAY_ENV) {
        Ok(raw) if !raw.trim().is_empty() => {
            match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
                Ok(date) => Box::new(FixedClock(date)),
                Err(err) => {
                    warn!("ignoring {TODAY_ENV}=`{raw}`: {err}");
                    Box::new(SystemClock)
                }
            }
        }
        _ => Box::new(SystemClock),
    }
}
