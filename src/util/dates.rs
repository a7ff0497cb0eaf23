use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::model::timescale::Timescale;

/// Today's date in the local calendar, with no time-of-day component.
pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

/// The date exactly 7 days after `date`.
pub fn next_week(date: NaiveDate) -> NaiveDate {
    date + Duration::days(7)
}

/// The date exactly 14 days after `date`.
pub fn next_two_weeks(date: NaiveDate) -> NaiveDate {
    date + Duration::days(14)
}

/// The date one "month" after `date`, where a month is the day-count of
/// `date`'s own month: Feb 10 advances 28 days (29 in a leap year), Jan 31
/// advances 31. This keeps the interval width stable for a given calendar
/// position instead of landing on the same day of the next month. Fixed
/// contract, not a simplification to correct.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date + Duration::days(days_in_month(date))
}

/// Projects `date` forward by the given timescale.
pub fn next_interval(date: NaiveDate, timescale: Timescale) -> NaiveDate {
    match timescale {
        Timescale::Week => next_week(date),
        Timescale::TwoWeeks => next_two_weeks(date),
        Timescale::Month => next_month(date),
    }
}

/// Days from `a - b`. Negative when `a` is before `b`, no clamping.
pub fn delta_days(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days()
}

/// Number of days in the month `date` falls in.
fn days_in_month(date: NaiveDate) -> i64 {
    let first = date - Duration::days(i64::from(date.day0()));
    let into_next = first + Duration::days(32);
    let first_of_next = into_next - Duration::days(i64::from(into_next.day0()));
    (first_of_next - first).num_days()
}
