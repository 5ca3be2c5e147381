use crate::foundation::color::Rgba8;
use crate::foundation::core::{Canvas, Point, Rect};

/// Backend-agnostic drawing of one image.
///
/// Layout code only ever produces a `Scene`; pixels come from a [`crate::RenderBackend`].
/// Background commands ([`DrawCommand::SolidFill`], [`DrawCommand::LinearGradient`],
/// [`DrawCommand::Noise`]) are painted beneath every dot and text run, in their relative
/// order. Dots are painted beneath text.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Target raster size.
    pub canvas: Canvas,
    /// Commands in paint order (see the layering rule above).
    pub commands: Vec<DrawCommand>,
}

/// Soft halo drawn around a dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Rgba8,
    /// Extent of the halo beyond the dot edge, in pixels.
    pub radius: f64,
}

/// Horizontal anchoring of a text run relative to its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
}

/// A single line of text; `origin.y` is the alphabetic baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub origin: Point,
    pub size_px: f64,
    pub bold: bool,
    pub color: Rgba8,
    pub align: TextAlign,
}

/// Draw command emitted by the layout code.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill a rectangle with one color.
    SolidFill { rect: Rect, color: Rgba8 },
    /// Fill a rectangle with a two-stop gradient running from `start` to `end`.
    LinearGradient {
        rect: Rect,
        start: Point,
        end: Point,
        from: Rgba8,
        to: Rgba8,
    },
    /// Add deterministic monochrome grain of up to `±amplitude` per channel.
    Noise { seed: u64, amplitude: u8 },
    /// A filled circle, optionally with a halo.
    Dot {
        center: Point,
        radius: f64,
        color: Rgba8,
        glow: Option<Glow>,
    },
    Text(TextRun),
}

impl TextRun {
    /// Regular-weight, start-aligned run with its baseline at `origin`.
    pub fn new(text: impl Into<String>, origin: Point, size_px: f64, color: Rgba8) -> Self {
        Self {
            text: text.into(),
            origin,
            size_px,
            bold: false,
            color,
            align: TextAlign::Start,
        }
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn centered(self) -> Self {
        Self {
            align: TextAlign::Center,
            ..self
        }
    }
}

impl Scene {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    pub fn text(&mut self, run: TextRun) {
        self.commands.push(DrawCommand::Text(run));
    }

    /// Every dot command, in paint order.
    pub fn dots(&self) -> impl Iterator<Item = (Point, f64, Rgba8, Option<Glow>)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Dot {
                center,
                radius,
                color,
                glow,
            } => Some((*center, *radius, *color, *glow)),
            _ => None,
        })
    }

    /// Every text run, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(run) => Some(run),
            _ => None,
        })
    }
}
