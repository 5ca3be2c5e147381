//! Calendar arithmetic over proleptic Gregorian dates.
//!
//! Every function here is total over chrono's supported date range. Dates carry no time of
//! day, so whole-day differences never depend on the hour a caller sampled "today" at.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
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

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 366 for leap years, 365 otherwise.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Number of days in `month` (1-based). Months outside `1..=12` have zero days.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// 1-based ordinal of `date` within its year (Jan 1 = 1).
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// ISO-8601 week number: weeks start on Monday and week 1 holds the year's first Thursday.
///
/// Dates near the year boundary can belong to the neighbouring ISO year, e.g. 2024-12-30 is
/// in week 1 and 2021-01-01 is in week 53.
pub fn week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Number of ISO weeks in the ISO year `year` (52 or 53).
pub fn weeks_in_iso_year(year: i32) -> u32 {
    if NaiveDate::from_isoywd_opt(year, 53, Weekday::Mon).is_some() {
        53
    } else {
        52
    }
}

/// Absolute number of whole days between two dates.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> u32 {
    let days = b.signed_duration_since(a).num_days().unsigned_abs();
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Signed whole-day difference `b - a`.
pub fn days_from(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// Inverse of [`day_of_year`].
///
/// Ordinals past the end of the year roll forward into the following year (366 in a common
/// year is Jan 1 of the next year) and ordinals below 1 roll back (0 is Dec 31 of the
/// previous year). Results outside chrono's range saturate to its bounds.
pub fn date_from_day_of_year(ordinal: i64, year: i32) -> NaiveDate {
    let Some(jan1) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return if year < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        };
    };
    let offset = ordinal.saturating_sub(1);
    let shifted = if offset >= 0 {
        jan1.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        jan1.checked_sub_days(Days::new(offset.unsigned_abs()))
    };
    shifted.unwrap_or(if offset >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/math.rs"]
mod tests;
