//! Slide data structures.
//!
//! The intermediate representation between deck construction and PPTX
//! serialization. Shapes are absolutely positioned; nothing here knows
//! about placeholders or layouts.

use aidoc_model::Rgb;

use crate::layout::{Frame, GRADIENT_ANGLE};

/// A single slide in a presentation
#[derive(Debug, Clone, Default)]
pub struct Slide {
    /// Position in the deck (1-based, title slide included)
    pub position: usize,

    /// Background fill, if any
    pub background: Option<Gradient>,

    /// Shapes in z-order (first is bottom-most)
    pub shapes: Vec<Shape>,
}

/// Two-stop linear gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    /// Direction in degrees
    pub angle: u32,
    /// Color at 0%
    pub start: Rgb,
    /// Color at 100%
    pub end: Rgb,
}

/// A shape on a slide
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Text box
    Text(TextBox),
    /// Filled rectangle without text
    Bar(Bar),
}

/// A positioned text box
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    /// Shape name, used to find the box again when reading
    pub name: String,
    /// Position and size
    pub frame: Frame,
    /// Paragraphs in order
    pub paragraphs: Vec<TextParagraph>,
    /// Whether text wraps at the box edge
    pub wrap: bool,
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Left aligned
    #[default]
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
}

impl Align {
    /// DrawingML `algn` value
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// One paragraph of single-run text
#[derive(Debug, Clone, PartialEq)]
pub struct TextParagraph {
    /// Text content
    pub text: String,
    /// Font size in points
    pub size: u32,
    /// Bold
    pub bold: bool,
    /// Text color
    pub color: Rgb,
    /// Alignment
    pub align: Align,
    /// Bullet character, if bulleted
    pub bullet: Option<char>,
    /// Space before and after in points
    pub spacing: Option<u32>,
    /// Line spacing in percent
    pub line_spacing: Option<u32>,
}

impl TextParagraph {
    /// Plain left-aligned paragraph
    pub fn new(text: impl Into<String>, size: u32, color: Rgb) -> Self {
        Self {
            text: text.into(),
            size,
            bold: false,
            color,
            align: Align::Left,
            bullet: None,
            spacing: None,
            line_spacing: None,
        }
    }

    /// Set bold
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set alignment
    pub fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Prefix with a bullet character
    pub fn with_bullet(mut self, bullet: char) -> Self {
        self.bullet = Some(bullet);
        self
    }

    /// Set paragraph spacing (before and after) and line spacing
    pub fn with_spacing(mut self, spacing: u32, line_spacing: u32) -> Self {
        self.spacing = Some(spacing);
        self.line_spacing = Some(line_spacing);
        self
    }
}

/// A solid accent rectangle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    /// Shape name
    pub name: String,
    /// Position and size
    pub frame: Frame,
    /// Fill color
    pub color: Rgb,
}

impl Bar {
    /// Create a bar
    pub fn new(name: impl Into<String>, frame: Frame, color: Rgb) -> Self {
        Self {
            name: name.into(),
            frame,
            color,
        }
    }
}

impl Gradient {
    /// Diagonal gradient between two colors
    pub fn diagonal(start: Rgb, end: Rgb) -> Self {
        Self {
            angle: GRADIENT_ANGLE,
            start,
            end,
        }
    }
}

impl Slide {
    /// Empty slide at a deck position
    pub fn new(position: usize) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set the background
    pub fn with_background(mut self, gradient: Gradient) -> Self {
        self.background = Some(gradient);
        self
    }

    /// Add a text box
    pub fn add_text(&mut self, text_box: TextBox) {
        self.shapes.push(Shape::Text(text_box));
    }

    /// Add a bar
    pub fn add_bar(&mut self, bar: Bar) {
        self.shapes.push(Shape::Bar(bar));
    }

    /// Find a text box by name
    pub fn text_box(&self, name: &str) -> Option<&TextBox> {
        self.shapes.iter().find_map(|shape| match shape {
            Shape::Text(text) if text.name == name => Some(text),
            _ => None,
        })
    }

    /// Iterate over bars
    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Bar(bar) => Some(bar),
            _ => None,
        })
    }
}

impl TextBox {
    /// Create an empty text box
    pub fn new(name: impl Into<String>, frame: Frame) -> Self {
        Self {
            name: name.into(),
            frame,
            paragraphs: Vec::new(),
            wrap: true,
        }
    }

    /// Add a paragraph
    pub fn with_paragraph(mut self, paragraph: TextParagraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    /// Add several paragraphs
    pub fn with_paragraphs(mut self, paragraphs: impl IntoIterator<Item = TextParagraph>) -> Self {
        self.paragraphs.extend(paragraphs);
        self
    }

    /// All paragraph texts joined by newlines
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
