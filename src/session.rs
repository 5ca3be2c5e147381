//! Explicit wallpaper-generator selection state.
//!
//! A [`SessionConfig`] is a plain value: it is handed to every render call and replaced, never
//! mutated, when the user picks something else.

use crate::catalog::device::{DeviceCategory, DeviceProfile, default_device, first_for_category};
use crate::catalog::theme::Theme;

/// Current theme and output device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub theme: Theme,
    pub device: &'static DeviceProfile,
}

/// A user selection that changes the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    ThemeSelected(Theme),
    /// Switches to the first catalog resolution of the category.
    CategorySelected(DeviceCategory),
    ResolutionSelected(&'static DeviceProfile),
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            device: default_device(),
        }
    }
}

impl SessionConfig {
    pub fn new(theme: Theme, device: &'static DeviceProfile) -> Self {
        Self { theme, device }
    }

    /// Return the configuration that results from applying `event`.
    #[must_use]
    pub fn update(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::ThemeSelected(theme) => Self { theme, ..self },
            SessionEvent::CategorySelected(category) => Self {
                device: first_for_category(category),
                ..self
            },
            SessionEvent::ResolutionSelected(device) => Self { device, ..self },
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/session/session.rs"]
mod tests;
