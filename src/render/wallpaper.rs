//! Wallpaper layouts: year (or goal) progress as a glowing dot grid plus headline stats.
//!
//! Every length is a fraction of the canvas width or height, so a 200 px preview and a
//! full-resolution export of the same device are the same picture at different scales.

use chrono::{Datelike, NaiveDate};

use crate::calendar::format::format_short;
use crate::calendar::math::{day_of_year, days_in_year};
use crate::catalog::device::LayoutKind;
use crate::catalog::theme::Palette;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::math::Fnv1a64;
use crate::progress::day::{DayState, Progress};
use crate::progress::goal::{Goal, GoalProgress};
use crate::render::grid::GridGeometry;
use crate::render::plan::{DrawCommand, Glow, Scene, TextRun};
use crate::session::SessionConfig;

const TITLE: &str = "Life Calendar";
const NOISE_AMPLITUDE: u8 = 10;

/// What a wallpaper shows.
#[derive(Clone, Debug, PartialEq)]
pub struct WallpaperContent {
    /// Headline, "Life Calendar" for the year view.
    pub title: String,
    /// Second line: the year, or the goal's date range.
    pub subtitle: String,
    pub progress: Progress,
    /// The reference date printed under the stats.
    pub date: NaiveDate,
}

impl WallpaperContent {
    /// Progress through the calendar year of `today`.
    pub fn year(today: NaiveDate) -> Self {
        Self {
            title: TITLE.to_owned(),
            subtitle: today.year().to_string(),
            progress: Progress::new(day_of_year(today), days_in_year(today.year())),
            date: today,
        }
    }

    /// Progress through a goal range as of `today`.
    pub fn goal(goal: &Goal, today: NaiveDate) -> Self {
        let gp = GoalProgress::compute(goal, today);
        Self {
            title: goal.title.clone(),
            subtitle: format!(
                "{} \u{2013} {}",
                format_short(goal.start_date),
                format_short(goal.end_date)
            ),
            progress: gp.as_progress(),
            date: today,
        }
    }
}

/// Per-layout proportions.
struct GridStyle {
    columns: u32,
    /// Halo extents as fractions of the dot diameter.
    completed_glow: f64,
    current_glow: f64,
}

const VERTICAL: GridStyle = GridStyle {
    columns: 14,
    completed_glow: 0.1,
    current_glow: 0.3,
};

const HORIZONTAL: GridStyle = GridStyle {
    columns: 30,
    completed_glow: 0.11,
    current_glow: 0.37,
};

/// Lay out a wallpaper for the session's theme and device layout on `canvas`.
///
/// `canvas` is usually the device's full resolution, or its preview size.
#[tracing::instrument(skip(content), fields(theme = %config.theme, device = config.device.key))]
pub fn compose_wallpaper(
    content: &WallpaperContent,
    config: &SessionConfig,
    canvas: Canvas,
) -> Scene {
    let palette = config.theme.palette();
    let mut scene = Scene::new(canvas);
    paint_background(&mut scene, palette, noise_seed(content, config));

    match config.device.layout() {
        LayoutKind::Vertical => compose_vertical(&mut scene, content, palette),
        LayoutKind::Horizontal => compose_horizontal(&mut scene, content, palette),
    }
    scene
}

fn noise_seed(content: &WallpaperContent, config: &SessionConfig) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u64(content.date.num_days_from_ce() as u64);
    h.write_bytes(config.theme.id().as_bytes());
    h.write_bytes(config.device.key.as_bytes());
    h.finish()
}

fn paint_background(scene: &mut Scene, palette: &Palette, seed: u64) {
    let rect = scene.canvas.rect();
    scene.push(DrawCommand::LinearGradient {
        rect,
        start: Point::new(rect.x0, rect.y0),
        end: Point::new(rect.x1, rect.y1),
        from: palette.bg_gradient[0],
        to: palette.bg_gradient[1],
    });
    scene.push(DrawCommand::Noise {
        seed,
        amplitude: NOISE_AMPLITUDE,
    });
}

fn compose_vertical(scene: &mut Scene, content: &WallpaperContent, palette: &Palette) {
    let (w, h) = (scene.canvas.w(), scene.canvas.h());
    let p = content.progress;

    // Summary and date sit below the grid; the date baseline stays above `0.95 h`.
    let grid_top = h * 0.35;
    let stats_gap = h * 0.08;
    let date_gap = w * 0.05;
    let region = (w * 0.9, h * 0.95 - grid_top - stats_gap - date_gap);
    let grid = GridGeometry::fitted(p.total, VERTICAL.columns, w * 0.035, 0.5, region);
    let grid = grid.at(Point::new((w - grid.width()) / 2.0, grid_top));
    tracing::debug!(rows = grid.rows, dot = grid.dot, "vertical grid");

    let cx = w / 2.0;
    let at = |y: f64| Point::new(cx, y);
    let secondary = palette.text_secondary;

    let title = TextRun::new(&content.title, at(h * 0.15), w * 0.08, palette.text_primary);
    scene.text(title.bold().centered());
    scene.text(TextRun::new(&content.subtitle, at(h * 0.20), w * 0.04, secondary).centered());
    let percent = TextRun::new(p.percent_label(), at(h * 0.30), w * 0.12, palette.accent);
    scene.text(percent.bold().centered());

    paint_grid(scene, &grid, p, palette, &VERTICAL);

    let stats_y = grid.origin.y + grid.height() + stats_gap;
    scene.text(TextRun::new(p.summary_line(), at(stats_y), w * 0.035, secondary).centered());
    let date = format_short(content.date);
    scene.text(TextRun::new(date, at(stats_y + date_gap), w * 0.03, secondary).centered());
}

fn compose_horizontal(scene: &mut Scene, content: &WallpaperContent, palette: &Palette) {
    let (w, h) = (scene.canvas.w(), scene.canvas.h());
    let p = content.progress;

    // Right-hand region from `0.55 w` to `0.95 w`, with a `0.1 h` margin top and bottom.
    let left = w * 0.55;
    let region = (w * 0.4, h * 0.8);
    let grid = GridGeometry::fitted(p.total, HORIZONTAL.columns, h * 0.025, 0.5, region);
    let grid = grid.at(Point::new(
        left + (region.0 - grid.width()) / 2.0,
        (h - grid.height()) / 2.0,
    ));
    tracing::debug!(rows = grid.rows, dot = grid.dot, "horizontal grid");

    let at = |y: f64| Point::new(w * 0.05, y);
    let secondary = palette.text_secondary;
    let small = h * 0.035;

    scene.text(TextRun::new(&content.title, at(h * 0.25), h * 0.08, palette.text_primary).bold());
    scene.text(TextRun::new(&content.subtitle, at(h * 0.32), h * 0.04, secondary));
    scene.text(TextRun::new(p.percent_label(), at(h * 0.55), h * 0.2, palette.accent).bold());

    let day_line = format!("Day {} of {}", p.reference, p.total);
    scene.text(TextRun::new(day_line, at(h * 0.65), small, secondary));
    let left_line = format!("{} days remaining", p.days_left());
    scene.text(TextRun::new(left_line, at(h * 0.72), small, secondary));
    scene.text(TextRun::new(format_short(content.date), at(h * 0.79), small, secondary));

    paint_grid(scene, &grid, p, palette, &HORIZONTAL);
}

fn paint_grid(
    scene: &mut Scene,
    grid: &GridGeometry,
    progress: Progress,
    palette: &Palette,
    style: &GridStyle,
) {
    for (day, state) in progress.states() {
        let (color, glow) = match state {
            DayState::Completed => (palette.dot_completed, style.completed_glow),
            DayState::Current => (palette.dot_today, style.current_glow),
            DayState::Remaining => (palette.dot_remaining, 0.0),
        };
        let glow = (glow > 0.0).then(|| Glow {
            color,
            radius: grid.dot * glow,
        });
        scene.push(DrawCommand::Dot {
            center: grid.dot_center(day),
            radius: grid.dot / 2.0,
            color,
            glow,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/wallpaper.rs"]
mod tests;
