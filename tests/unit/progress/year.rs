use super::*;
use crate::progress::day::DayState;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn year_progress_uses_ordinal_and_year_length() {
    let yp = YearProgress::for_date(ymd(2024, 5, 29));
    assert_eq!(yp.year, 2024);
    assert_eq!(yp.progress.reference, 150);
    assert_eq!(yp.progress.total, 366);
    assert_eq!(yp.progress.state_of(150), DayState::Current);
}

#[test]
fn week_label_uses_iso_year_of_the_date() {
    let yp = YearProgress::for_date(ymd(2021, 1, 1));
    assert_eq!(yp.week_label(), "Week 53 of 53");

    let yp = YearProgress::for_date(ymd(2024, 6, 15));
    assert_eq!(yp.week_label(), "Week 24 of 52");
}

#[test]
fn month_progress_partial_and_complete() {
    // Feb 10 2023: January done, February partially, March untouched.
    let months = month_progress(ymd(2023, 2, 10));
    assert_eq!(months.len(), 12);
    assert_eq!(months[0].rounded_percent(), 100);
    assert_eq!(months[1].days, 28);
    assert_eq!(months[1].rounded_percent(), 36);
    assert_eq!(months[2].percent, 0.0);
    assert_eq!(months[1].name, "February");
}

#[test]
fn month_progress_counts_last_day_as_complete() {
    let months = month_progress(ymd(2024, 2, 29));
    assert_eq!(months[1].days, 29);
    assert_eq!(months[1].percent, 100.0);

    let months = month_progress(ymd(2024, 12, 31));
    assert!(months.iter().all(|m| m.percent == 100.0));
}
