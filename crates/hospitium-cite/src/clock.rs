//! Source of "today" for MLA access dates.

use chrono::NaiveDate;

/// Supplies the current date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Render an access date as `D Mon YYYY` (e.g. `5 Mar 2024`).
pub fn format_access_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}
