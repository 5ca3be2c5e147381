use chrono::{Datelike, NaiveDate};

use crate::calendar::math::{
    MONTH_NAMES, day_of_year, days_in_month, days_in_year, week_number, weeks_in_iso_year,
};
use crate::progress::day::Progress;

/// Progress through the calendar year containing `date`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearProgress {
    /// The reference date ("today").
    pub date: NaiveDate,
    /// Calendar year of `date`.
    pub year: i32,
    /// Day-of-year reference over the year's length.
    pub progress: Progress,
    /// ISO week of `date`.
    pub week: u32,
    /// Number of weeks in the ISO year `date` belongs to.
    pub weeks_in_year: u32,
}

impl YearProgress {
    pub fn for_date(date: NaiveDate) -> Self {
        let year = date.year();
        Self {
            date,
            year,
            progress: Progress::new(day_of_year(date), days_in_year(year)),
            week: week_number(date),
            weeks_in_year: weeks_in_iso_year(date.iso_week().year()),
        }
    }

    /// `"Week N of M"` header line.
    pub fn week_label(&self) -> String {
        format!("Week {} of {}", self.week, self.weeks_in_year)
    }
}

/// Completion of one calendar month relative to a reference date.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MonthProgress {
    /// 1-based month number.
    pub month: u32,
    pub name: &'static str,
    pub days: u32,
    /// Completion in `[0, 100]`; the reference day counts as done.
    pub percent: f64,
}

impl MonthProgress {
    /// Percentage rounded to a whole number, as displayed.
    pub fn rounded_percent(&self) -> u32 {
        self.percent.round() as u32
    }
}

/// Completion of each month of `date`'s year, January first.
pub fn month_progress(date: NaiveDate) -> Vec<MonthProgress> {
    let year = date.year();
    let doy = day_of_year(date);
    let mut out = Vec::with_capacity(12);
    let mut elapsed = 0u32;

    for (idx, name) in MONTH_NAMES.iter().enumerate() {
        let month = idx as u32 + 1;
        let days = days_in_month(month, year);
        let start = elapsed + 1;
        let end = elapsed + days;

        let percent = if doy >= end {
            100.0
        } else if doy >= start {
            f64::from(doy - start + 1) / f64::from(days) * 100.0
        } else {
            0.0
        };

        out.push(MonthProgress {
            month,
            name,
            days,
            percent,
        });
        elapsed = end;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/progress/year.rs"]
mod tests;
