//! Lifecal renders a year (or a goal range) as a grid of day dots.
//!
//! The crate is split the same way a render runs:
//!
//! - calendar maths and progress ([`YearProgress`], [`GoalProgress`])
//! - a themed layout into a backend-agnostic [`Scene`] ([`compose_wallpaper`],
//!   [`compose_calendar_export`])
//! - rasterization by a [`RenderBackend`] into a [`FrameRGBA`], then PNG export
//!
//! Theme and goal choices persist through [`Preferences`].
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod calendar;
pub(crate) mod catalog;
/// PNG export and output file names.
pub mod export;
pub(crate) mod progress;
pub(crate) mod render;
/// Wallpaper selection state.
pub mod session;
/// Persisted preferences.
pub mod store;

pub use crate::foundation::color::Rgba8;
pub use crate::foundation::core::{Canvas, Point, Rect, Rgba8Premul};
pub use crate::foundation::error::{LifecalError, LifecalResult};

pub use crate::calendar::format::{format_long, format_short, format_tooltip};
pub use crate::calendar::math::{
    MONTH_NAMES, date_from_day_of_year, day_of_year, days_between, days_from, days_in_month,
    days_in_year, is_leap_year, week_number, weeks_in_iso_year,
};
pub use crate::catalog::device::{
    DEVICES, DeviceCategory, DeviceProfile, LayoutKind, default_device, device_by_key,
    first_for_category,
};
pub use crate::catalog::theme::{Palette, Theme};
pub use crate::progress::day::{DayState, Progress, classify};
pub use crate::progress::goal::{Goal, GoalDraft, GoalProgress};
pub use crate::progress::year::{MonthProgress, YearProgress, month_progress};
pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
pub use crate::render::calendar::{EXPORT_HEIGHT, EXPORT_WIDTH, compose_calendar_export};
pub use crate::render::composite::{over, over_in_place, unpremultiply_in_place};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::grid::{GridGeometry, rows_for};
pub use crate::render::page::{
    CalendarPage, DEFAULT_COLUMNS, DayCell, GoalPage, StatCard, glyph, render_goal_text,
    render_text,
};
pub use crate::render::plan::{DrawCommand, Glow, Scene, TextAlign, TextRun};
pub use crate::render::text::TextRasterizer;
pub use crate::render::wallpaper::{WallpaperContent, compose_wallpaper};
pub use crate::session::{SessionConfig, SessionEvent};
pub use crate::store::{JsonFileStore, KeyValueStore, MemoryStore, Preferences};
