use kurbo::Shape;

use crate::foundation::color::Rgba8;
use crate::foundation::core::{Canvas, Point, Rect, Rgba8Premul};
use crate::foundation::error::{LifecalError, LifecalResult};
use crate::foundation::math::mix64;
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::render::composite::over_in_place;
use crate::render::plan::{DrawCommand, Glow, Scene, TextRun};
use crate::render::text::TextRasterizer;

/// Concentric rings used to approximate a soft halo.
const GLOW_RINGS: u32 = 6;

/// CPU backend: background written directly, dots through `vello_cpu`, text through `resvg`.
pub struct CpuBackend {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
    text: Option<TextRasterizer>,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
            text: None,
        }
    }

    fn text_rasterizer(&mut self) -> &TextRasterizer {
        self.text
            .get_or_insert_with(|| TextRasterizer::new(&self.settings))
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> LifecalResult<R>,
    ) -> LifecalResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn paint_background(&self, scene: &Scene) -> Vec<u8> {
        let canvas = scene.canvas;
        let clear = self
            .settings
            .clear_rgba
            .map(|[r, g, b, a]| Rgba8Premul::from_straight_rgba(r, g, b, a))
            .unwrap_or_else(Rgba8Premul::transparent)
            .to_array();

        let mut buf = clear.repeat(pixel_count(canvas));
        for cmd in &scene.commands {
            match cmd {
                DrawCommand::SolidFill { rect, color } => {
                    fill_rect(&mut buf, canvas, *rect, |_| *color);
                }
                DrawCommand::LinearGradient {
                    rect,
                    start,
                    end,
                    from,
                    to,
                } => {
                    let axis = *end - *start;
                    let len2 = axis.hypot2();
                    fill_rect(&mut buf, canvas, *rect, |p| {
                        let t = if len2 > 0.0 {
                            ((p - *start).dot(axis) / len2).clamp(0.0, 1.0)
                        } else {
                            0.0
                        };
                        from.lerp(*to, t as f32)
                    });
                }
                DrawCommand::Noise { seed, amplitude } => {
                    apply_noise(&mut buf, canvas, *seed, *amplitude);
                }
                DrawCommand::Dot { .. } | DrawCommand::Text(_) => {}
            }
        }
        buf
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(
        skip_all,
        fields(width = scene.canvas.width, height = scene.canvas.height)
    )]
    fn render_scene(&mut self, scene: &Scene) -> LifecalResult<FrameRGBA> {
        let canvas = scene.canvas;
        let (w, h) = canvas_u16(canvas)?;

        let mut data = self.paint_background(scene);

        let shapes = self.with_ctx_mut(w, h, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            for (center, radius, color, glow) in scene.dots() {
                if let Some(glow) = glow {
                    fill_glow(ctx, center, radius, glow);
                }
                fill_circle(ctx, center, radius, color);
            }

            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(pixmap)
        })?;
        over_in_place(&mut data, shapes.data_as_u8_slice())?;

        let runs: Vec<&TextRun> = scene.texts().collect();
        if !runs.is_empty() {
            let layer = self.text_rasterizer().rasterize(canvas, &runs)?;
            over_in_place(&mut data, &layer)?;
        }

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data,
            premultiplied: true,
        })
    }
}

fn canvas_u16(canvas: Canvas) -> LifecalResult<(u16, u16)> {
    let w = u16::try_from(canvas.width).ok().filter(|&w| w > 0);
    let h = u16::try_from(canvas.height).ok().filter(|&h| h > 0);
    match (w, h) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(LifecalError::render(format!(
            "canvas {}x{} is outside the supported 1..={} range",
            canvas.width,
            canvas.height,
            u16::MAX
        ))),
    }
}

fn pixel_count(canvas: Canvas) -> usize {
    (canvas.width as usize).saturating_mul(canvas.height as usize)
}

/// Overwrite pixels whose centres fall inside `rect` with `color_at(centre)`.
fn fill_rect(buf: &mut [u8], canvas: Canvas, rect: Rect, color_at: impl Fn(Point) -> Rgba8) {
    let rect = rect.intersect(canvas.rect());
    let x0 = rect.x0.round().max(0.0) as u32;
    let x1 = (rect.x1.round() as u32).min(canvas.width);
    let y0 = rect.y0.round().max(0.0) as u32;
    let y1 = (rect.y1.round() as u32).min(canvas.height);

    for y in y0..y1 {
        for x in x0..x1 {
            let c = color_at(Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5)).to_premul();
            let idx = (y as usize * canvas.width as usize + x as usize) * 4;
            buf[idx..idx + 4].copy_from_slice(&c.to_array());
        }
    }
}

/// Monochrome grain: one offset in `-amplitude..=amplitude` per pixel, applied to r, g and b.
fn apply_noise(buf: &mut [u8], canvas: Canvas, seed: u64, amplitude: u8) {
    if amplitude == 0 {
        return;
    }
    let span = u64::from(amplitude) * 2 + 1;
    for (i, px) in buf.chunks_exact_mut(4).enumerate() {
        let offset = (mix64(seed ^ (i as u64)) % span) as i16 - i16::from(amplitude);
        let limit = i16::from(px[3]);
        for c in &mut px[..3] {
            *c = (i16::from(*c) + offset).clamp(0, limit) as u8;
        }
    }
    tracing::trace!(seed, pixels = pixel_count(canvas), "noise applied");
}

fn fill_circle(ctx: &mut vello_cpu::RenderContext, center: Point, radius: f64, color: Rgba8) {
    if radius <= 0.0 || color.a == 0 {
        return;
    }
    let circle = kurbo::Circle::new(center, radius);
    let mut path = vello_cpu::kurbo::BezPath::new();
    for el in circle.path_elements(0.1) {
        path.push(el);
    }
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));
    ctx.fill_path(&path);
}

/// Outer rings are painted first so overlapping translucency brightens towards the dot.
fn fill_glow(ctx: &mut vello_cpu::RenderContext, center: Point, radius: f64, glow: Glow) {
    if glow.radius <= 0.0 {
        return;
    }
    let ring_alpha = (f32::from(glow.color.a) * 0.12).round() as u8;
    for i in 0..GLOW_RINGS {
        let frac = f64::from(GLOW_RINGS - i) / f64::from(GLOW_RINGS);
        fill_circle(
            ctx,
            center,
            radius + glow.radius * frac,
            glow.color.with_alpha(ring_alpha),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
