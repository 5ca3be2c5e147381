//! Text layer: scene text runs are written out as an SVG document and rasterized with
//! `usvg`/`resvg`, which handles shaping and font fallback.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use crate::foundation::core::Canvas;
use crate::foundation::error::{LifecalError, LifecalResult};
use crate::render::backend::RenderSettings;
use crate::render::plan::{TextAlign, TextRun};

const FONT_FAMILY: &str = "Inter, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif";

/// Rasterizes text runs against a font database built once from [`RenderSettings`].
pub struct TextRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl TextRasterizer {
    pub fn new(settings: &RenderSettings) -> Self {
        Self {
            fontdb: build_fontdb(settings),
        }
    }

    pub fn face_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Draw `runs` onto a transparent canvas-sized layer (premultiplied RGBA8).
    pub fn rasterize(&self, canvas: Canvas, runs: &[&TextRun]) -> LifecalResult<Vec<u8>> {
        let svg = svg_document(canvas, runs);
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            font_resolver: font_resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| LifecalError::render(format!("text layout failed: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
            .ok_or_else(|| LifecalError::render("text layer allocation failed"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        Ok(pixmap.data().to_vec())
    }
}

/// SVG markup for `runs`, one `<text>` element each.
pub fn svg_document(canvas: Canvas, runs: &[&TextRun]) -> String {
    let (w, h) = (canvas.width, canvas.height);
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    for run in runs {
        let anchor = match run.align {
            TextAlign::Start => "start",
            TextAlign::Center => "middle",
        };
        let c = run.color;
        let _ = write!(
            out,
            r##"<text x="{x:.3}" y="{y:.3}" font-family="{FONT_FAMILY}" font-size="{size:.3}" font-weight="{weight}" fill="#{r:02x}{g:02x}{b:02x}" fill-opacity="{op:.4}" text-anchor="{anchor}">{text}</text>"##,
            x = run.origin.x,
            y = run.origin.y,
            size = run.size_px,
            weight = if run.bold { 700 } else { 400 },
            r = c.r,
            g = c.g,
            b = c.b,
            op = f32::from(c.a) / 255.0,
            text = escape_xml(&run.text),
        );
    }
    out.push_str("</svg>");
    out
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn build_fontdb(settings: &RenderSettings) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    if settings.load_system_fonts {
        db.load_system_fonts();
    }
    for dir in &settings.font_dirs {
        load_fonts_from_dir(&mut db, dir);
    }

    if db.is_empty() {
        tracing::warn!("no fonts found; wallpaper text will not be drawn");
    } else {
        tracing::debug!(faces = db.len(), "font database loaded");
    }
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory is not readable");
        return;
    };

    for path in rd.flatten().map(|e| e.path()) {
        let is_font = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"));
        if is_font && let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "skipping font file");
        }
    }
}

/// Query by family list then generic sans-serif; any face beats dropping the text.
fn font_resolver() -> usvg::FontResolver<'static> {
    use usvg::fontdb::{Family, Query, Stretch, Style, Weight};

    usvg::FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families: Vec<Family<'_>> = font
                .families()
                .iter()
                .map(|family| match family {
                    usvg::FontFamily::Serif => Family::Serif,
                    usvg::FontFamily::SansSerif => Family::SansSerif,
                    usvg::FontFamily::Cursive => Family::Cursive,
                    usvg::FontFamily::Fantasy => Family::Fantasy,
                    usvg::FontFamily::Monospace => Family::Monospace,
                    usvg::FontFamily::Named(s) => Family::Name(s),
                })
                .collect();
            families.push(Family::SansSerif);

            let style = match font.style() {
                usvg::FontStyle::Normal => Style::Normal,
                usvg::FontStyle::Italic => Style::Italic,
                usvg::FontStyle::Oblique => Style::Oblique,
            };
            let query = Query {
                families: &families,
                weight: Weight(font.weight()),
                stretch: Stretch::Normal,
                style,
            };

            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|f| f.id))
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
