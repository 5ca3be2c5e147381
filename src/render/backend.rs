use std::path::PathBuf;

use crate::foundation::error::LifecalResult;
use crate::render::plan::Scene;

/// A rendered image.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA of the pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// A renderer that turns a [`Scene`] into pixels.
pub trait RenderBackend {
    fn render_scene(&mut self, scene: &Scene) -> LifecalResult<FrameRGBA>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu` and `resvg`.
    #[default]
    Cpu,
}

/// Backend-agnostic settings.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// If set, backends clear the target to this RGBA8 color before drawing.
    pub clear_rgba: Option<[u8; 4]>,
    /// Extra directories scanned for font files.
    pub font_dirs: Vec<PathBuf>,
    /// Whether installed system fonts are loaded for text.
    pub load_system_fonts: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_rgba: None,
            font_dirs: Vec::new(),
            load_system_fonts: true,
        }
    }
}

pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> LifecalResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        ))),
    }
}
