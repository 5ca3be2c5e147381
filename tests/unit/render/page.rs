use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn page_header_and_stats() {
    let page = CalendarPage::build(date(2024, 1, 6));
    assert_eq!(page.header, "Saturday, January 6, 2024");
    assert_eq!(page.week_label, "Week 1 of 52");
    let values: Vec<_> = page.stats.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, ["6", "360", "1.6%"]);
    assert_eq!(page.months.len(), 12);
}

#[test]
fn cells_cover_the_year_with_dates_and_tooltips() {
    let page = CalendarPage::build(date(2024, 3, 1));
    assert_eq!(page.cells.len(), 366);

    let feb29 = &page.cells[59];
    assert_eq!(feb29.day, 60);
    assert_eq!(feb29.date, date(2024, 2, 29));
    assert_eq!(feb29.tooltip, "Feb 29");
    assert_eq!(feb29.state, DayState::Completed);
    assert_eq!(page.cells[60].state, DayState::Current);
    assert_eq!(page.cells[61].state, DayState::Remaining);
}

#[test]
fn text_grid_wraps_at_columns() {
    let page = CalendarPage::build(date(2025, 1, 3));
    let text = render_text(&page, 30);

    let grid: Vec<&str> = text
        .lines()
        .filter(|l| {
            !l.is_empty()
                && l
                    .chars()
                    .all(|c| matches!(c, '\u{25CF}' | '\u{25C6}' | '\u{25CB}'))
        })
        .collect();
    assert_eq!(grid.len(), 13);
    assert_eq!(grid[0].chars().count(), 30);
    assert_eq!(grid[12].chars().count(), 5);
    assert!(grid[0].starts_with("\u{25CF}\u{25CF}\u{25C6}\u{25CB}"));
}

#[test]
fn text_includes_stats_and_months() {
    let text = render_text(&CalendarPage::build(date(2025, 2, 1)), 0);
    assert!(text.contains("Days passed     32"));
    assert!(text.contains("Days remaining  333"));
    assert!(text.lines().any(|l| l.starts_with("January") && l.contains("100%")));
    assert!(text.lines().any(|l| l.starts_with("February") && l.contains("  4%")));
}

#[test]
fn goal_page_and_text() {
    let goal = Goal {
        title: "Marathon".into(),
        start_date: date(2025, 3, 1),
        end_date: date(2025, 3, 11),
    };
    let page = GoalPage::build(&goal, date(2025, 3, 5));
    assert_eq!(page.days_passed, 4);
    assert_eq!(page.days_left, 6);
    assert_eq!(page.percent, 40);
    assert_eq!(page.states.len(), 10);
    assert_eq!(page.states[3], DayState::Current);

    let text = render_goal_text(&page, 5);
    assert!(text.starts_with("Goal: Marathon\n"));
    assert!(text.contains("4 days passed \u{2022} 6 days left \u{2022} 40%"));
    assert!(text.contains("\u{25CF}\u{25CF}\u{25CF}\u{25C6}\u{25CB}\n\u{25CB}"));
}

#[test]
fn goal_before_start_has_nothing_elapsed() {
    let goal = Goal {
        title: "Later".into(),
        start_date: date(2025, 6, 1),
        end_date: date(2025, 6, 30),
    };
    let page = GoalPage::build(&goal, date(2025, 5, 1));
    assert_eq!(page.days_passed, 0);
    assert!(page.states.iter().all(|&s| s == DayState::Remaining));
}
