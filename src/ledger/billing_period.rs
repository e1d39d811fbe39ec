use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

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

/// One month of the billing timeline. `month0` is zero-based (January = 0).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BillingPeriod {
    pub year: i32,
    pub month0: u32,
}

impl BillingPeriod {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// Key receipts are matched against, e.g. `"March 2024"`.
    pub fn key(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize % 12]
    }

    /// One-based quarter index within the year.
    pub fn quarter(&self) -> u32 {
        self.month0 / 3 + 1
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// Expands the inclusive `[start, as_of]` window into contiguous monthly
/// periods, year by year. A start after `as_of` clamps to the single as-of
/// month, so the result is never empty.
pub fn periods_between(start: NaiveDate, as_of: NaiveDate) -> Vec<BillingPeriod> {
    let start = start.min(as_of);
    let (start_year, start_month) = (start.year(), start.month0());
    let (end_year, end_month) = (as_of.year(), as_of.month0());

    let mut periods = Vec::new();
    for year in start_year..=end_year {
        let from = if year == start_year { start_month } else { 0 };
        let to = if year == end_year { end_month } else { 11 };
        for month0 in from..=to {
            periods.push(BillingPeriod { year, month0 });
        }
    }
    periods
}
