//! Flat year calendar image: solid background, plain dots, title and footer.

use chrono::{Datelike, NaiveDate};

use crate::calendar::format::format_long;
use crate::catalog::theme::Theme;
use crate::foundation::core::{Canvas, Point};
use crate::progress::day::DayState;
use crate::progress::year::YearProgress;
use crate::render::grid::GridGeometry;
use crate::render::plan::{DrawCommand, Scene, TextRun};

/// Default export size.
pub const EXPORT_WIDTH: u32 = 800;
pub const EXPORT_HEIGHT: u32 = 600;

const COLUMNS: u32 = 21;

/// Lay out the year calendar for `date` in `theme` on `canvas`.
#[tracing::instrument(skip(canvas), fields(width = canvas.width, height = canvas.height))]
pub fn compose_calendar_export(date: NaiveDate, theme: Theme, canvas: Canvas) -> Scene {
    let palette = theme.palette();
    let year = YearProgress::for_date(date);
    let p = year.progress;
    let (w, h) = (canvas.w(), canvas.h());

    let mut scene = Scene::new(canvas);
    scene.push(DrawCommand::SolidFill {
        rect: canvas.rect(),
        color: palette.bg_primary,
    });

    let cx = w / 2.0;
    let title_at = Point::new(cx, h * 50.0 / 600.0);
    let title = TextRun::new("Life Calendar", title_at, w * 0.04, palette.text_primary);
    scene.text(title.bold().centered());
    let subtitle = format!("{} Progress: {}", date.year(), p.percent_label());
    let subtitle_at = Point::new(cx, h * 80.0 / 600.0);
    scene.text(TextRun::new(subtitle, subtitle_at, w * 0.02, palette.text_secondary).centered());

    let grid = GridGeometry::new(p.total, COLUMNS, w * 0.015, w * 0.005);
    let grid = grid.at(Point::new((w - grid.width()) / 2.0, h * 0.2));
    for (day, state) in p.states() {
        let color = match state {
            DayState::Completed => palette.dot_completed,
            DayState::Current => palette.dot_today,
            DayState::Remaining => palette.dot_remaining,
        };
        scene.push(DrawCommand::Dot {
            center: grid.dot_center(day),
            radius: grid.dot / 2.0,
            color,
            glow: None,
        });
    }

    let footer = format!("Day {} of {} \u{2022} {}", p.reference, p.total, format_long(date));
    scene.text(
        TextRun::new(footer, Point::new(cx, h * 0.95), w * 0.015, palette.text_secondary)
            .centered(),
    );
    scene
}

#[cfg(test)]
#[path = "../../tests/unit/render/calendar.rs"]
mod tests;
