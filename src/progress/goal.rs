use chrono::NaiveDate;

use crate::calendar::math::{days_between, days_from};
use crate::foundation::error::{LifecalError, LifecalResult};
use crate::progress::day::Progress;

/// A user-defined goal range.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Raw, unvalidated goal form input.
#[derive(Clone, Debug, Default)]
pub struct GoalDraft {
    pub title: String,
    pub start: String,
    pub end: String,
}

impl GoalDraft {
    /// Validate the form: every field present, ISO dates, start strictly before end.
    pub fn validate(&self) -> LifecalResult<Goal> {
        let title = self.title.trim();
        let start = self.start.trim();
        let end = self.end.trim();
        if title.is_empty() || start.is_empty() || end.is_empty() {
            return Err(LifecalError::validation("Please fill in all fields"));
        }

        let start_date = parse_iso_date(start)?;
        let end_date = parse_iso_date(end)?;
        if start_date >= end_date {
            return Err(LifecalError::validation(
                "End date must be after start date",
            ));
        }

        Ok(Goal {
            title: title.to_owned(),
            start_date,
            end_date,
        })
    }
}

fn parse_iso_date(s: &str) -> LifecalResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        LifecalError::validation(format!("invalid date \"{s}\" (expected YYYY-MM-DD): {e}"))
    })
}

/// Goal progress as of a given day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalProgress {
    /// Whole days from start to end.
    pub total_days: u32,
    /// Days elapsed since start, clamped to `[0, total_days]`.
    pub days_passed: u32,
    /// Days until end, never negative.
    pub days_left: u32,
    /// `days_passed / total_days` as a rounded whole percentage.
    pub percent: u32,
}

impl GoalProgress {
    pub fn compute(goal: &Goal, today: NaiveDate) -> Self {
        let total_days = days_between(goal.start_date, goal.end_date);
        let passed = days_from(goal.start_date, today).clamp(0, i64::from(total_days));
        let days_passed = u32::try_from(passed).unwrap_or(total_days);
        let days_left = u32::try_from(days_from(today, goal.end_date).max(0)).unwrap_or(u32::MAX);
        let percent = if total_days > 0 {
            (f64::from(days_passed) / f64::from(total_days) * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total_days,
            days_passed,
            days_left,
            percent,
        }
    }

    /// Classification reference for the goal grid: the last elapsed day.
    pub fn as_progress(&self) -> Progress {
        Progress::new(self.days_passed, self.total_days)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/goal.rs"]
mod tests;
