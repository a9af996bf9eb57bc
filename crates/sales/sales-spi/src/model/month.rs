//! Calendar-month arithmetic on first-of-month dates.

use chrono::{Datelike, Months, NaiveDate};

/// Truncate a date to the first day of its month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shift a month by `n` calendar months.
///
/// Returns `None` when the result falls outside the supported calendar.
pub fn add_months(month: NaiveDate, n: u32) -> Option<NaiveDate> {
    month_start(month).checked_add_months(Months::new(n))
}

/// Signed number of whole months from `from` to `to`.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let years = i64::from(to.year()) - i64::from(from.year());
    let months = i64::from(to.month()) - i64::from(from.month());
    years * 12 + months
}

/// `YYYY-MM` label used by exports and summaries.
pub fn month_label(month: NaiveDate) -> String {
    month.format("%Y-%m").to_string()
}
