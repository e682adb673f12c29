//! # aidoc-pptx
//!
//! PowerPoint (PPTX) rendering of a topic and its sections.
//!
//! A deck is one title slide followed by one content slide per section.
//! Every slide carries the theme's diagonal gradient; content slides add an
//! icon-decorated title, bullet points, two accent bars and a slide number.
//!
//! ## Features
//!
//! - **Fixed widescreen geometry**: every shape sits at a canvas-relative
//!   position (see [`layout`])
//! - **Best-effort decorations**: a bar that cannot be placed is skipped and
//!   reported in the [`DeckReport`], never fatal
//! - **DeckSettings**: TOML for locale, author and the title-slide caption
//! - **SlideReader**: reads a produced deck back for verification
//!
//! ## Example
//!
//! ```
//! use aidoc_core::resolve_theme;
//! use aidoc_model::Section;
//! use aidoc_pptx::{render_slides, SlideReader};
//!
//! let sections = vec![Section::new(1, "Market Overview", "• Growth\n• Risk")];
//! let bytes = render_slides("AI Trading", &sections, resolve_theme(Some("modern_dark")))?;
//!
//! let slides = SlideReader::from_bytes(&bytes)?.slides()?;
//! assert_eq!(slides.len(), 2);
//! assert_eq!(slides[1].bullets, vec!["Growth", "Risk"]);
//! # Ok::<(), aidoc_pptx::PptxError>(())
//! ```

pub mod deck;
pub mod deck_settings;
pub mod error;
pub mod layout;
pub mod reader;
pub mod slide;
pub mod writer;

// Re-exports
pub use deck::{
    attempt_decorate, render_slides, CanvasGuard, Decoration, DeckReport, RenderedDeck,
    ShapeGuard, SkippedDecoration, SlideDeck,
};
pub use deck_settings::DeckSettings;
pub use error::{PptxError, Result};
pub use reader::{BarSummary, GradientSummary, ShapeText, SlideReader, SlideSummary};
pub use slide::{Align, Bar, Gradient, Shape, Slide, TextBox, TextParagraph};
pub use writer::PptxWriter;

/// PPTX-related constants
pub mod constants {
    /// Widescreen 16:9 slide width in EMU (13.333" width)
    pub const WIDESCREEN_SLIDE_WIDTH_EMU: i64 = 12_192_000;

    /// Widescreen 16:9 slide height in EMU (7.5" height)
    pub const WIDESCREEN_SLIDE_HEIGHT_EMU: i64 = 6_858_000;

    /// EMU per inch
    pub const EMU_PER_INCH: i64 = 914_400;

    /// EMU per point
    pub const EMU_PER_POINT: i64 = 12_700;

    /// DrawingML font sizes and spacing are in hundredths of a point
    pub const CENTIPOINTS_PER_POINT: u32 = 100;

    /// DrawingML angles are in 60000ths of a degree
    pub const ANGLE_UNITS_PER_DEGREE: u32 = 60_000;

    /// DrawingML percentages are in 1000ths of a percent
    pub const PERCENT_UNITS: u32 = 1_000;

    /// PresentationML namespace
    pub const NS_PRESENTATION: &str =
        "http://schemas.openxmlformats.org/presentationml/2006/main";

    /// DrawingML namespace
    pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

    /// Relationships namespace
    pub const NS_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emu_constants() {
        // 1 inch = 72 points
        assert_eq!(constants::EMU_PER_INCH, 72 * constants::EMU_PER_POINT);
    }

    #[test]
    fn test_widescreen_dimensions() {
        let aspect_ratio = constants::WIDESCREEN_SLIDE_WIDTH_EMU as f64
            / constants::WIDESCREEN_SLIDE_HEIGHT_EMU as f64;
        assert!((aspect_ratio - 16.0 / 9.0).abs() < 0.01);

        // 7.5" tall
        assert_eq!(
            constants::WIDESCREEN_SLIDE_HEIGHT_EMU * 2,
            15 * constants::EMU_PER_INCH
        );
    }
}
