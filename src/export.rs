//! PNG export of rendered frames and the file names exported images get.

use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::catalog::device::DeviceProfile;
use crate::catalog::theme::Theme;
use crate::foundation::error::{LifecalError, LifecalResult};
use crate::render::backend::FrameRGBA;
use crate::render::composite::unpremultiply_in_place;

/// Frame pixels as a straight-alpha RGBA image.
fn to_rgba_image(frame: &FrameRGBA) -> LifecalResult<image::RgbaImage> {
    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_in_place(&mut data);
    }
    image::RgbaImage::from_raw(frame.width, frame.height, data).ok_or_else(|| {
        LifecalError::render(format!(
            "frame buffer does not match {}x{} rgba8",
            frame.width, frame.height
        ))
    })
}

/// Encode a frame as PNG bytes.
pub fn encode_png(frame: &FrameRGBA) -> LifecalResult<Vec<u8>> {
    let img = to_rgba_image(frame)?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// Write a frame to `path` as PNG, creating the parent directory if needed.
#[tracing::instrument(skip(frame, path), fields(path = %path.display()))]
pub fn write_png(frame: &FrameRGBA, path: &Path) -> LifecalResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let img = to_rgba_image(frame)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(width = frame.width, height = frame.height, "png written");
    Ok(())
}

/// `life-calendar-<device slug>-<theme id>.png`
pub fn wallpaper_file_name(device: &DeviceProfile, theme: Theme) -> String {
    format!("life-calendar-{}-{}.png", device.slug(), theme.id())
}

/// `life-calendar-goal-<device slug>-<theme id>.png`
pub fn goal_wallpaper_file_name(device: &DeviceProfile, theme: Theme) -> String {
    format!("life-calendar-goal-{}-{}.png", device.slug(), theme.id())
}

/// `life-calendar-<year>.png`
pub fn calendar_file_name(year: i32) -> String {
    format!("life-calendar-{year}.png")
}

#[cfg(test)]
#[path = "../tests/unit/export.rs"]
mod tests;
