/// Visual state of one day cell relative to a reference day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayState {
    /// Strictly before the reference day.
    Completed,
    /// The reference day itself.
    Current,
    /// Strictly after the reference day.
    Remaining,
}

/// Classify 1-based `day` against the 1-based `reference` day.
///
/// A reference of 0 (nothing started yet) makes every day remaining; a reference past the
/// last day makes every day completed.
pub fn classify(day: u32, reference: u32) -> DayState {
    match day.cmp(&reference) {
        std::cmp::Ordering::Less => DayState::Completed,
        std::cmp::Ordering::Equal => DayState::Current,
        std::cmp::Ordering::Greater => DayState::Remaining,
    }
}

/// A reference day within a run of `total` days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Progress {
    /// Reference ("today") day, 1-based; 0 means not started.
    pub reference: u32,
    /// Total number of days in the run.
    pub total: u32,
}

impl Progress {
    pub fn new(reference: u32, total: u32) -> Self {
        Self { reference, total }
    }

    /// Elapsed fraction in `[0, 1]`. An empty run reports 0.
    pub fn fraction(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (f64::from(self.reference) / f64::from(self.total)).clamp(0.0, 1.0)
    }

    /// Percentage with one decimal, e.g. `"45.2%"`.
    pub fn percent_label(self) -> String {
        format!("{:.1}%", self.fraction() * 100.0)
    }

    /// Days after the reference day, never negative.
    pub fn days_left(self) -> u32 {
        self.total.saturating_sub(self.reference)
    }

    pub fn state_of(self, day: u32) -> DayState {
        classify(day, self.reference)
    }

    /// `(day, state)` for every day `1..=total`.
    pub fn states(self) -> impl Iterator<Item = (u32, DayState)> {
        (1..=self.total).map(move |day| (day, classify(day, self.reference)))
    }

    /// `"Day X of Y • Z days left"`.
    pub fn summary_line(self) -> String {
        format!(
            "Day {} of {} \u{2022} {} days left",
            self.reference,
            self.total,
            self.days_left()
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/day.rs"]
mod tests;
