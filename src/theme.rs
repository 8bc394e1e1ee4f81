// Theme support for the TUI
//
// The wizard draws with three tones (foreground, muted, accent) plus an error
// tone. Each has a light and a dark variant; which one is used is decided once
// at start-up from the configured appearance or the terminal's background.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Which palette variant to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Detect from the terminal, dark if unknown
    #[default]
    Auto,
    Dark,
    Light,
}

impl Appearance {
    /// Parse from a config or env string, falling back to Auto
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "dark" => Appearance::Dark,
            "light" => Appearance::Light,
            _ => Appearance::Auto,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Auto => "auto",
            Appearance::Dark => "dark",
            Appearance::Light => "light",
        }
    }
}

/// Resolved colors handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            foreground: Color::Rgb(0xE7, 0xE5, 0xE4),
            muted: Color::Rgb(0x9C, 0xA3, 0xAF),
            accent: Color::Rgb(0xD1, 0xD5, 0xDB),
            error: Color::Rgb(0xF8, 0x71, 0x71),
        }
    }

    pub fn light() -> Self {
        Self {
            foreground: Color::Rgb(0x1C, 0x19, 0x17),
            muted: Color::Rgb(0x6B, 0x72, 0x80),
            accent: Color::Rgb(0x37, 0x41, 0x51),
            error: Color::Rgb(0xB9, 0x1C, 0x1C),
        }
    }

    /// Pick the variant for `appearance`, consulting `COLORFGBG` for Auto
    pub fn resolve(appearance: Appearance) -> Self {
        let colorfgbg = std::env::var("COLORFGBG").ok();
        Self::resolve_with(appearance, colorfgbg.as_deref())
    }

    fn resolve_with(appearance: Appearance, colorfgbg: Option<&str>) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
            Appearance::Auto => match colorfgbg.and_then(background_is_light) {
                Some(true) => Self::light(),
                _ => Self::dark(),
            },
        }
    }
}

/// Interpret `COLORFGBG` ("fg;bg" or "fg;default;bg"): ANSI 7 and 9-15 are light
fn background_is_light(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(bg == 7 || (9..=15).contains(&bg))
}
