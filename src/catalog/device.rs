use std::fmt;

use crate::foundation::core::Canvas;
use crate::foundation::error::{LifecalError, LifecalResult};

/// Device family; decides which wallpaper layout is used.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    Phone,
    Tablet,
    Desktop,
}

/// Placement strategy for the wallpaper renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    /// Stats stacked above a centred grid (tall screens).
    Vertical,
    /// Stats on the left, grid on the right (wide screens).
    Horizontal,
}

impl DeviceCategory {
    pub fn id(self) -> &'static str {
        match self {
            DeviceCategory::Phone => "phone",
            DeviceCategory::Tablet => "tablet",
            DeviceCategory::Desktop => "desktop",
        }
    }

    pub fn layout(self) -> LayoutKind {
        match self {
            DeviceCategory::Phone | DeviceCategory::Tablet => LayoutKind::Vertical,
            DeviceCategory::Desktop => LayoutKind::Horizontal,
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One entry of the wallpaper resolution catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DeviceProfile {
    /// Resolution key, `"<width>x<height>"`.
    pub key: &'static str,
    pub width: u32,
    pub height: u32,
    pub category: DeviceCategory,
    pub name: &'static str,
}

/// The resolution catalog, in picker order.
pub static DEVICES: [DeviceProfile; 11] = [
    profile("1290x2796", 1290, 2796, DeviceCategory::Phone, "iPhone 15 Pro Max"),
    profile("1179x2556", 1179, 2556, DeviceCategory::Phone, "iPhone 15/14 Pro"),
    profile("1170x2532", 1170, 2532, DeviceCategory::Phone, "iPhone 14/13"),
    profile("1080x2400", 1080, 2400, DeviceCategory::Phone, "Android Standard"),
    profile("1440x3200", 1440, 3200, DeviceCategory::Phone, "Android Flagship"),
    profile("1080x2340", 1080, 2340, DeviceCategory::Phone, "Android Compact"),
    profile("1920x1080", 1920, 1080, DeviceCategory::Desktop, "Full HD"),
    profile("2560x1440", 2560, 1440, DeviceCategory::Desktop, "2K QHD"),
    profile("3840x2160", 3840, 2160, DeviceCategory::Desktop, "4K UHD"),
    profile("2048x2732", 2048, 2732, DeviceCategory::Tablet, "iPad Pro 12.9\""),
    profile("1640x2360", 1640, 2360, DeviceCategory::Tablet, "iPad Air"),
];

const fn profile(
    key: &'static str,
    width: u32,
    height: u32,
    category: DeviceCategory,
    name: &'static str,
) -> DeviceProfile {
    DeviceProfile {
        key,
        width,
        height,
        category,
        name,
    }
}

/// Profile selected when nothing else is chosen.
pub fn default_device() -> &'static DeviceProfile {
    &DEVICES[0]
}

/// Look up a profile by its `"<w>x<h>"` key.
pub fn device_by_key(key: &str) -> LifecalResult<&'static DeviceProfile> {
    let key = key.trim();
    DEVICES
        .iter()
        .find(|d| d.key.eq_ignore_ascii_case(key))
        .ok_or_else(|| LifecalError::validation(format!("unknown resolution \"{key}\"")))
}

/// First catalog entry of a category.
pub fn first_for_category(category: DeviceCategory) -> &'static DeviceProfile {
    DEVICES
        .iter()
        .find(|d| d.category == category)
        .unwrap_or(&DEVICES[0])
}

impl DeviceProfile {
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn layout(&self) -> LayoutKind {
        self.category.layout()
    }

    /// File-name friendly name: every non-alphanumeric ASCII char becomes `-`, lowercased.
    pub fn slug(&self) -> String {
        self.name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect()
    }

    /// Down-scaled canvas for on-screen previews: 400 px wide for desktops, 200 px otherwise.
    pub fn preview_size(&self) -> Canvas {
        let max_width = match self.category {
            DeviceCategory::Desktop => 400.0,
            DeviceCategory::Phone | DeviceCategory::Tablet => 200.0,
        };
        let scale = max_width / f64::from(self.width);
        Canvas {
            width: (f64::from(self.width) * scale).round().max(1.0) as u32,
            height: (f64::from(self.height) * scale).round().max(1.0) as u32,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/device.rs"]
mod tests;
