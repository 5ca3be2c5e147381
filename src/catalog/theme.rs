use std::fmt;
use std::str::FromStr;

use crate::foundation::color::Rgba8;
use crate::foundation::error::LifecalError;

/// Colors of one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Palette {
    /// Flat background, used by the simple calendar export.
    pub bg_primary: Rgba8,
    /// Diagonal background gradient, top-left to bottom-right.
    pub bg_gradient: [Rgba8; 2],
    pub dot_completed: Rgba8,
    pub dot_remaining: Rgba8,
    pub dot_today: Rgba8,
    pub text_primary: Rgba8,
    pub text_secondary: Rgba8,
    pub accent: Rgba8,
}

/// The closed set of color themes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Midnight,
    Purple,
    Ocean,
    Matrix,
    Ruby,
    Sunset,
}

impl Theme {
    /// Every theme, in picker order.
    pub const ALL: [Theme; 6] = [
        Theme::Midnight,
        Theme::Purple,
        Theme::Ocean,
        Theme::Matrix,
        Theme::Ruby,
        Theme::Sunset,
    ];

    /// Stable lowercase identifier, used for persistence and file names.
    pub fn id(self) -> &'static str {
        match self {
            Theme::Midnight => "midnight",
            Theme::Purple => "purple",
            Theme::Ocean => "ocean",
            Theme::Matrix => "matrix",
            Theme::Ruby => "ruby",
            Theme::Sunset => "sunset",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Theme::Midnight => "Midnight",
            Theme::Purple => "Purple",
            Theme::Ocean => "Ocean",
            Theme::Matrix => "Matrix",
            Theme::Ruby => "Ruby",
            Theme::Sunset => "Sunset",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Midnight => &MIDNIGHT,
            Theme::Purple => &PURPLE,
            Theme::Ocean => &OCEAN,
            Theme::Matrix => &MATRIX,
            Theme::Ruby => &RUBY,
            Theme::Sunset => &SUNSET,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = LifecalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Theme::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| LifecalError::validation(format!("unknown theme \"{needle}\"")))
    }
}

const MIDNIGHT: Palette = Palette {
    bg_primary: Rgba8::hex("#0A0A0D"),
    bg_gradient: [Rgba8::hex("#0A0A0D"), Rgba8::hex("#151518")],
    dot_completed: Rgba8::hex("#FFFFFF"),
    dot_remaining: Rgba8::hex("#2A2A2D"),
    dot_today: Rgba8::hex("#FF6B35"),
    text_primary: Rgba8::hex("#FFFFFF"),
    text_secondary: Rgba8::hex("#888888"),
    accent: Rgba8::hex("#FF6B35"),
};

const PURPLE: Palette = Palette {
    bg_primary: Rgba8::hex("#0D0A14"),
    bg_gradient: [Rgba8::hex("#0D0A14"), Rgba8::hex("#1A1528")],
    dot_completed: Rgba8::hex("#E8E0FF"),
    dot_remaining: Rgba8::hex("#2D2545"),
    dot_today: Rgba8::hex("#9B59B6"),
    text_primary: Rgba8::hex("#E8E0FF"),
    text_secondary: Rgba8::hex("#9B8DC7"),
    accent: Rgba8::hex("#9B59B6"),
};

const OCEAN: Palette = Palette {
    bg_primary: Rgba8::hex("#0A0D14"),
    bg_gradient: [Rgba8::hex("#0A0D14"), Rgba8::hex("#141D2B")],
    dot_completed: Rgba8::hex("#E0F0FF"),
    dot_remaining: Rgba8::hex("#1E3045"),
    dot_today: Rgba8::hex("#3498DB"),
    text_primary: Rgba8::hex("#E0F0FF"),
    text_secondary: Rgba8::hex("#7BA3C7"),
    accent: Rgba8::hex("#3498DB"),
};

const MATRIX: Palette = Palette {
    bg_primary: Rgba8::hex("#0A0D0A"),
    bg_gradient: [Rgba8::hex("#0A0D0A"), Rgba8::hex("#141F14")],
    dot_completed: Rgba8::hex("#D5FFD5"),
    dot_remaining: Rgba8::hex("#1E301E"),
    dot_today: Rgba8::hex("#2ECC71"),
    text_primary: Rgba8::hex("#D5FFD5"),
    text_secondary: Rgba8::hex("#7AC77A"),
    accent: Rgba8::hex("#2ECC71"),
};

const RUBY: Palette = Palette {
    bg_primary: Rgba8::hex("#140A0A"),
    bg_gradient: [Rgba8::hex("#140A0A"), Rgba8::hex("#241414")],
    dot_completed: Rgba8::hex("#FFE0E0"),
    dot_remaining: Rgba8::hex("#351E1E"),
    dot_today: Rgba8::hex("#E74C3C"),
    text_primary: Rgba8::hex("#FFE0E0"),
    text_secondary: Rgba8::hex("#C77A7A"),
    accent: Rgba8::hex("#E74C3C"),
};

const SUNSET: Palette = Palette {
    bg_primary: Rgba8::hex("#140D0A"),
    bg_gradient: [Rgba8::hex("#140D0A"), Rgba8::hex("#241914")],
    dot_completed: Rgba8::hex("#FFF0E0"),
    dot_remaining: Rgba8::hex("#352E1E"),
    dot_today: Rgba8::hex("#E67E22"),
    text_primary: Rgba8::hex("#FFF0E0"),
    text_secondary: Rgba8::hex("#C7A07A"),
    accent: Rgba8::hex("#E67E22"),
};

#[cfg(test)]
#[path = "../../tests/unit/catalog/theme.rs"]
mod tests;
