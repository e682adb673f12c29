//! Theme registry
//!
//! A theme is a named palette of five colors. Resolution never fails: an
//! absent, empty or unknown identifier yields the `professional_blue` preset.

use aidoc_model::Rgb;
use log::debug;
use serde::Serialize;

/// Identifier of the fallback theme
pub const DEFAULT_THEME_ID: &str = "professional_blue";

/// A named color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Registry key (e.g. "modern_dark")
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// First gradient stop
    pub bg_start: Rgb,
    /// Last gradient stop
    pub bg_end: Rgb,
    /// Title text
    pub title_color: Rgb,
    /// Body text, subtitles and slide numbers
    pub body_color: Rgb,
    /// Decorative bars
    pub accent_color: Rgb,
}

static THEMES: [Theme; 5] = [
    Theme {
        id: "professional_blue",
        name: "Professional Blue",
        bg_start: Rgb(227, 242, 253),
        bg_end: Rgb(187, 222, 251),
        title_color: Rgb(25, 118, 210),
        body_color: Rgb(33, 33, 33),
        accent_color: Rgb(66, 165, 245),
    },
    Theme {
        id: "modern_dark",
        name: "Modern Dark",
        bg_start: Rgb(48, 48, 48),
        bg_end: Rgb(33, 33, 33),
        title_color: Rgb(255, 255, 255),
        body_color: Rgb(220, 220, 220),
        accent_color: Rgb(102, 126, 234),
    },
    Theme {
        id: "vibrant_orange",
        name: "Vibrant Orange",
        bg_start: Rgb(255, 243, 224),
        bg_end: Rgb(255, 224, 178),
        title_color: Rgb(230, 81, 0),
        body_color: Rgb(62, 39, 35),
        accent_color: Rgb(255, 152, 0),
    },
    Theme {
        id: "nature_green",
        name: "Nature Green",
        bg_start: Rgb(232, 245, 233),
        bg_end: Rgb(200, 230, 201),
        title_color: Rgb(27, 94, 32),
        body_color: Rgb(33, 33, 33),
        accent_color: Rgb(76, 175, 80),
    },
    Theme {
        id: "elegant_purple",
        name: "Elegant Purple",
        bg_start: Rgb(243, 229, 245),
        bg_end: Rgb(225, 190, 231),
        title_color: Rgb(74, 20, 140),
        body_color: Rgb(33, 33, 33),
        accent_color: Rgb(142, 36, 170),
    },
];

/// All registered themes in registry order
pub fn themes() -> &'static [Theme] {
    &THEMES
}

/// Exact lookup without fallback
pub fn lookup(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id == id)
}

/// The fallback preset
pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

/// Resolve an optional identifier to a theme, falling back to the default.
pub fn resolve(id: Option<&str>) -> &'static Theme {
    match id.filter(|id| !id.is_empty()) {
        Some(id) => lookup(id).unwrap_or_else(|| {
            debug!("Unknown theme '{}', using {}", id, DEFAULT_THEME_ID);
            default_theme()
        }),
        None => default_theme(),
    }
}
