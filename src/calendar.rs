//! Naive calendar arithmetic used by the projection loop
//!
//! All month arithmetic is calendar based (year * 12 + month), never elapsed
//! time. Dates carry no timezone.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Month key of a date: `year * 12 + zero-based month`
pub fn month_key(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

/// Whole calendar months from `from` to `to` (negative when `to` is earlier).
/// Day of month is ignored.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    month_key(to) - month_key(from)
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// First day of the month `offset` months after the month containing `start`.
/// Saturates at the last representable month.
pub fn month_start_offset(start: NaiveDate, offset: u32) -> NaiveDate {
    first_of_month(start)
        .checked_add_months(Months::new(offset))
        .unwrap_or_else(|| first_of_month(NaiveDate::MAX))
}

/// `date` moved forward by whole years. Feb 29 lands on Feb 28 in non-leap
/// years. Saturates at `NaiveDate::MAX`.
pub fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MAX)
}

/// Age in whole years at `date`, one less while the birth month is still ahead
pub fn age_at(birth_date: NaiveDate, date: NaiveDate) -> i32 {
    let mut age = date.year() - birth_date.year();
    if date.month() < birth_date.month() {
        age -= 1;
    }
    age
}
