//! Fixed slide geometry.
//!
//! All positions are relative to the widescreen canvas and never derived
//! from other shapes. Values are written in hundredths of an inch.

use crate::constants::{EMU_PER_INCH, WIDESCREEN_SLIDE_HEIGHT_EMU, WIDESCREEN_SLIDE_WIDTH_EMU};

/// Canvas width in EMU
pub const CANVAS_WIDTH: i64 = WIDESCREEN_SLIDE_WIDTH_EMU;

/// Canvas height in EMU
pub const CANVAS_HEIGHT: i64 = WIDESCREEN_SLIDE_HEIGHT_EMU;

/// Convert hundredths of an inch to EMU
pub const fn inches_100(hundredths: i64) -> i64 {
    hundredths * EMU_PER_INCH / 100
}

/// A positioned rectangle in EMU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Left edge
    pub x: i64,
    /// Top edge
    pub y: i64,
    /// Width
    pub cx: i64,
    /// Height
    pub cy: i64,
}

impl Frame {
    /// Build a frame from EMU values
    pub const fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self { x, y, cx, cy }
    }

    /// Right edge
    pub const fn right(&self) -> i64 {
        self.x + self.cx
    }

    /// Bottom edge
    pub const fn bottom(&self) -> i64 {
        self.y + self.cy
    }

    /// Whether the frame has area and lies fully on the canvas
    pub fn fits_canvas(&self) -> bool {
        self.cx > 0
            && self.cy > 0
            && self.x >= 0
            && self.y >= 0
            && self.right() <= CANVAS_WIDTH
            && self.bottom() <= CANVAS_HEIGHT
    }
}

/// Title on the title slide
pub const TITLE_SLIDE_TITLE: Frame = Frame::new(
    inches_100(100),
    inches_100(250),
    CANVAS_WIDTH - inches_100(200),
    inches_100(150),
);

/// Caption below the title-slide title
pub const TITLE_SLIDE_SUBTITLE: Frame = Frame::new(
    inches_100(100),
    inches_100(430),
    CANVAS_WIDTH - inches_100(200),
    inches_100(80),
);

/// Title on a content slide
pub const CONTENT_TITLE: Frame = Frame::new(
    inches_100(50),
    inches_100(50),
    CANVAS_WIDTH - inches_100(100),
    inches_100(100),
);

/// Thin bar under the content title
pub const TITLE_BAR: Frame = Frame::new(
    inches_100(50),
    inches_100(160),
    CANVAS_WIDTH - inches_100(100),
    inches_100(5),
);

/// Bullet body
pub const BODY: Frame = Frame::new(
    inches_100(100),
    inches_100(220),
    CANVAS_WIDTH - inches_100(200),
    inches_100(450),
);

/// Full-width bar along the bottom edge
pub const BOTTOM_BAR: Frame = Frame::new(0, inches_100(735), CANVAS_WIDTH, inches_100(15));

/// Slide number in the bottom-right corner
pub const SLIDE_NUMBER: Frame = Frame::new(
    CANVAS_WIDTH - inches_100(100),
    inches_100(700),
    inches_100(50),
    inches_100(30),
);

/// Font sizes in points
pub mod font {
    /// Title-slide title
    pub const TITLE_SLIDE_TITLE: u32 = 48;
    /// Title-slide caption
    pub const SUBTITLE: u32 = 24;
    /// Content-slide title
    pub const CONTENT_TITLE: u32 = 36;
    /// Bullet text
    pub const BODY: u32 = 20;
    /// Slide number
    pub const SLIDE_NUMBER: u32 = 14;
}

/// Space before and after each bullet, in points
pub const BODY_PARAGRAPH_SPACING: u32 = 14;

/// Bullet line spacing in percent
pub const BODY_LINE_SPACING: u32 = 130;

/// Gradient direction in degrees
pub const GRADIENT_ANGLE: u32 = 45;
