use super::*;

#[test]
fn classification_splits_around_reference() {
    let p = Progress::new(150, 365);
    assert_eq!(p.state_of(149), DayState::Completed);
    assert_eq!(p.state_of(150), DayState::Current);
    assert_eq!(p.state_of(151), DayState::Remaining);
}

#[test]
fn exactly_one_current_day_inside_range() {
    for reference in [1, 100, 365] {
        let p = Progress::new(reference, 365);
        let current = p.states().filter(|(_, s)| *s == DayState::Current).count();
        assert_eq!(current, 1, "reference {reference}");
    }
}

#[test]
fn no_current_day_outside_range() {
    let not_started = Progress::new(0, 10);
    assert!(not_started.states().all(|(_, s)| s == DayState::Remaining));

    let finished = Progress::new(11, 10);
    assert!(finished.states().all(|(_, s)| s == DayState::Completed));
}

#[test]
fn fraction_and_label() {
    assert_eq!(Progress::new(165, 366).percent_label(), "45.1%");
    assert_eq!(Progress::new(365, 365).percent_label(), "100.0%");
    assert_eq!(Progress::new(20, 10).fraction(), 1.0);
}

#[test]
fn empty_run_reports_zero_percent() {
    let p = Progress::new(0, 0);
    assert_eq!(p.fraction(), 0.0);
    assert_eq!(p.percent_label(), "0.0%");
    assert_eq!(p.states().count(), 0);
    assert_eq!(p.days_left(), 0);
}

#[test]
fn summary_line_counts_days_left() {
    assert_eq!(
        Progress::new(150, 365).summary_line(),
        "Day 150 of 365 \u{2022} 215 days left"
    );
}
