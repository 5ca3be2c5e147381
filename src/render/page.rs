//! Main-view page model and its plain-text rendering.
//!
//! The page shares the day classification rule with the wallpaper renderer but nothing else:
//! one fixed glyph per day, no glow, no proportional layout.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::calendar::format::{format_long, format_short, format_tooltip};
use crate::calendar::math::date_from_day_of_year;
use crate::progress::day::DayState;
use crate::progress::goal::{Goal, GoalProgress};
use crate::progress::year::{MonthProgress, YearProgress, month_progress};

/// Columns used when the caller does not pick a width.
pub const DEFAULT_COLUMNS: u32 = 21;

const BAR_WIDTH: usize = 20;

/// One day of the page grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    /// Hover label, e.g. `"Jan 6"`.
    pub tooltip: String,
    pub state: DayState,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

/// Everything the year page shows for one reference date.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CalendarPage {
    /// Long reference date, e.g. `"Saturday, January 6, 2024"`.
    pub header: String,
    /// `"Week N of M"`.
    pub week_label: String,
    /// Days passed, days remaining, progress percentage.
    pub stats: [StatCard; 3],
    pub cells: Vec<DayCell>,
    pub months: Vec<MonthProgress>,
}

impl CalendarPage {
    pub fn build(date: NaiveDate) -> Self {
        let year = YearProgress::for_date(date);
        let p = year.progress;

        let cells = p
            .states()
            .map(|(day, state)| {
                let date = date_from_day_of_year(i64::from(day), year.year);
                DayCell {
                    day,
                    date,
                    tooltip: format_tooltip(date),
                    state,
                }
            })
            .collect();

        Self {
            header: format_long(date),
            week_label: year.week_label(),
            stats: [
                StatCard {
                    label: "Days passed",
                    value: p.reference.to_string(),
                },
                StatCard {
                    label: "Days remaining",
                    value: p.days_left().to_string(),
                },
                StatCard {
                    label: "Progress",
                    value: p.percent_label(),
                },
            ],
            cells,
            months: month_progress(date),
        }
    }
}

/// Goal panel: headline numbers plus one state per goal day.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GoalPage {
    pub title: String,
    /// `"<start> – <end>"` in short form.
    pub range: String,
    pub days_passed: u32,
    pub days_left: u32,
    pub percent: u32,
    pub states: Vec<DayState>,
}

impl GoalPage {
    pub fn build(goal: &Goal, today: NaiveDate) -> Self {
        let gp = GoalProgress::compute(goal, today);
        Self {
            title: goal.title.clone(),
            range: format!(
                "{} \u{2013} {}",
                format_short(goal.start_date),
                format_short(goal.end_date)
            ),
            days_passed: gp.days_passed,
            days_left: gp.days_left,
            percent: gp.percent,
            states: gp.as_progress().states().map(|(_, s)| s).collect(),
        }
    }
}

/// Grid glyph for a day state.
pub fn glyph(state: DayState) -> char {
    match state {
        DayState::Completed => '\u{25CF}',
        DayState::Current => '\u{25C6}',
        DayState::Remaining => '\u{25CB}',
    }
}

/// The year page as text, `columns` glyphs per grid row (0 falls back to the default).
pub fn render_text(page: &CalendarPage, columns: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", page.header);
    let _ = writeln!(out, "{}", page.week_label);
    out.push('\n');

    let label_width = page.stats.iter().map(|s| s.label.len()).max().unwrap_or(0);
    for card in &page.stats {
        let _ = writeln!(out, "{:<label_width$}  {}", card.label, card.value);
    }
    out.push('\n');

    push_grid(&mut out, page.cells.iter().map(|c| c.state), columns);
    out.push('\n');

    for m in &page.months {
        let pct = m.rounded_percent();
        let _ = writeln!(out, "{:<9} {:>3}%  {}", m.name, pct, bar(m.percent));
    }
    out
}

/// The goal panel as text.
pub fn render_goal_text(page: &GoalPage, columns: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Goal: {}", page.title);
    let _ = writeln!(out, "{}", page.range);
    let _ = writeln!(
        out,
        "{} days passed \u{2022} {} days left \u{2022} {}%",
        page.days_passed, page.days_left, page.percent
    );
    out.push('\n');
    push_grid(&mut out, page.states.iter().copied(), columns);
    out
}

fn push_grid(out: &mut String, states: impl Iterator<Item = DayState>, columns: u32) {
    let columns = match columns {
        0 => DEFAULT_COLUMNS as usize,
        n => n as usize,
    };

    let mut in_row = 0;
    for state in states {
        out.push(glyph(state));
        in_row += 1;
        if in_row == columns {
            out.push('\n');
            in_row = 0;
        }
    }
    if in_row > 0 {
        out.push('\n');
    }
}

fn bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let mut s = "\u{2588}".repeat(filled);
    s.push_str(&"\u{2591}".repeat(BAR_WIDTH - filled));
    s
}

#[cfg(test)]
#[path = "../../tests/unit/render/page.rs"]
mod tests;
