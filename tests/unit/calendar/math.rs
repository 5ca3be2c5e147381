use super::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn leap_year_follows_gregorian_rule() {
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
    assert!(!is_leap_year(2100));
}

#[test]
fn days_in_year_tracks_leap_rule() {
    for year in 1890..2110 {
        let expected = 365 + u32::from(is_leap_year(year));
        assert_eq!(days_in_year(year), expected, "year {year}");
    }
}

#[test]
fn months_sum_to_year_length() {
    for year in [1900, 2000, 2023, 2024] {
        let total: u32 = (1..=12).map(|m| days_in_month(m, year)).sum();
        assert_eq!(total, days_in_year(year));
    }
    assert_eq!(days_in_month(2, 2024), 29);
    assert_eq!(days_in_month(2, 2023), 28);
    assert_eq!(days_in_month(13, 2023), 0);
}

#[test]
fn day_of_year_endpoints() {
    for year in [1900, 2000, 2023, 2024] {
        assert_eq!(day_of_year(ymd(year, 1, 1)), 1);
        assert_eq!(day_of_year(ymd(year, 12, 31)), days_in_year(year));
    }
    assert_eq!(day_of_year(ymd(2024, 3, 1)), 61);
    assert_eq!(day_of_year(ymd(2023, 3, 1)), 60);
}

#[test]
fn week_number_handles_year_boundaries() {
    // Dec 30/31 2024 fall in week 1 of ISO year 2025.
    assert_eq!(week_number(ymd(2024, 12, 30)), 1);
    assert_eq!(week_number(ymd(2024, 12, 31)), 1);
    // Jan 1 2021 (Friday) is week 53 of ISO year 2020.
    assert_eq!(week_number(ymd(2021, 1, 1)), 53);
    // Jan 1 2023 (Sunday) is week 52 of ISO year 2022.
    assert_eq!(week_number(ymd(2023, 1, 1)), 52);
    assert_eq!(week_number(ymd(2024, 1, 1)), 1);
    assert_eq!(week_number(ymd(2024, 6, 15)), 24);
}

#[test]
fn weeks_in_iso_year_detects_long_years() {
    assert_eq!(weeks_in_iso_year(2020), 53);
    assert_eq!(weeks_in_iso_year(2015), 53);
    assert_eq!(weeks_in_iso_year(2024), 52);
    assert_eq!(weeks_in_iso_year(2026), 53);
}

#[test]
fn days_between_is_symmetric_and_non_negative() {
    let a = ymd(2024, 1, 1);
    let b = ymd(2024, 1, 11);
    assert_eq!(days_between(a, b), 10);
    assert_eq!(days_between(b, a), 10);
    assert_eq!(days_between(a, a), 0);
    assert_eq!(days_between(ymd(2023, 12, 31), ymd(2025, 1, 1)), 367);

    assert_eq!(days_from(a, b), 10);
    assert_eq!(days_from(b, a), -10);
}

#[test]
fn date_from_day_of_year_round_trips() {
    for year in [1900, 2000, 2023, 2024] {
        let mut d = ymd(year, 1, 1);
        while d.year() == year {
            assert_eq!(date_from_day_of_year(i64::from(day_of_year(d)), year), d);
            d = d.succ_opt().unwrap();
        }
    }
}

#[test]
fn date_from_day_of_year_rolls_over_out_of_range_ordinals() {
    assert_eq!(date_from_day_of_year(366, 2023), ymd(2024, 1, 1));
    assert_eq!(date_from_day_of_year(366, 2024), ymd(2024, 12, 31));
    assert_eq!(date_from_day_of_year(367, 2024), ymd(2025, 1, 1));
    assert_eq!(date_from_day_of_year(0, 2024), ymd(2023, 12, 31));
    assert_eq!(date_from_day_of_year(-1, 2024), ymd(2023, 12, 30));
}

#[test]
fn date_from_day_of_year_saturates_at_extreme_ordinals() {
    assert_eq!(date_from_day_of_year(i64::MIN, 2024), NaiveDate::MIN);
    assert_eq!(date_from_day_of_year(i64::MAX, 2024), NaiveDate::MAX);
}
