//! Deck construction.
//!
//! A deck is built strictly in order: the title slide, then one content
//! slide per section, each finished before the next begins. Decorative bars
//! go through [`attempt_decorate`]; a bar the [`ShapeGuard`] refuses is left
//! out and recorded, the slide itself is always emitted.

use aidoc_core::{bullet_lines, decorate_title, Theme};
use aidoc_model::Section;
use log::{debug, warn};

use crate::deck_settings::DeckSettings;
use crate::error::Result;
use crate::layout::{self, font};
use crate::slide::{Align, Bar, Gradient, Slide, TextBox, TextParagraph};
use crate::writer::PptxWriter;

/// Bullet character for body paragraphs
pub const BULLET: char = '•';

/// Shape names, shared with the reader
pub mod names {
    /// Title text box
    pub const TITLE: &str = "Title";
    /// Title-slide caption
    pub const SUBTITLE: &str = "Subtitle";
    /// Bullet body
    pub const BODY: &str = "Body";
    /// Bar under the content title
    pub const TITLE_BAR: &str = "Title Bar";
    /// Bar along the bottom edge
    pub const BOTTOM_BAR: &str = "Bottom Bar";
    /// Slide number
    pub const SLIDE_NUMBER: &str = "Slide Number";
}

/// Render a deck with default settings
pub fn render_slides(topic: &str, sections: &[Section], theme: &Theme) -> Result<Vec<u8>> {
    Ok(SlideDeck::new().render(topic, sections, theme)?.bytes)
}

/// Decides whether a decorative bar can be placed on a slide
pub trait ShapeGuard {
    /// `Err(reason)` to skip the bar
    fn admit(&self, slide: &Slide, bar: &Bar) -> std::result::Result<(), String>;
}

impl<F> ShapeGuard for F
where
    F: Fn(&Slide, &Bar) -> std::result::Result<(), String>,
{
    fn admit(&self, slide: &Slide, bar: &Bar) -> std::result::Result<(), String> {
        self(slide, bar)
    }
}

/// Default guard: refuses bars that would not lie on the canvas
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasGuard;

impl ShapeGuard for CanvasGuard {
    fn admit(&self, _slide: &Slide, bar: &Bar) -> std::result::Result<(), String> {
        if bar.frame.fits_canvas() {
            Ok(())
        } else {
            Err(format!("frame {:?} is outside the canvas", bar.frame))
        }
    }
}

/// Outcome of a best-effort placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoration {
    /// The bar is on the slide
    Placed,
    /// The bar was left out
    Skipped(String),
}

/// Place `bar` on `slide` unless the guard refuses it.
pub fn attempt_decorate<G: ShapeGuard + ?Sized>(
    slide: &mut Slide,
    bar: Bar,
    guard: &G,
) -> Decoration {
    match guard.admit(slide, &bar) {
        Ok(()) => {
            slide.add_bar(bar);
            Decoration::Placed
        }
        Err(reason) => {
            warn!(
                "Skipping '{}' on slide {}: {}",
                bar.name, slide.position, reason
            );
            Decoration::Skipped(reason)
        }
    }
}

/// A decoration left out of the deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDecoration {
    /// Deck position of the slide (1-based, title slide included)
    pub slide: usize,
    /// Shape name of the bar
    pub name: String,
    /// Why it was skipped
    pub reason: String,
}

/// What a render produced besides bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckReport {
    /// Slides written, title slide included
    pub slides: usize,
    /// Decorations that were not placed
    pub skipped: Vec<SkippedDecoration>,
}

impl DeckReport {
    /// Whether every decoration was placed
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// A rendered presentation
#[derive(Debug, Clone)]
pub struct RenderedDeck {
    /// The `.pptx` package
    pub bytes: Vec<u8>,
    /// Render summary
    pub report: DeckReport,
}

/// Builds themed decks from sections
#[derive(Debug, Clone, Default)]
pub struct SlideDeck<G = CanvasGuard> {
    settings: DeckSettings,
    guard: G,
}

impl SlideDeck {
    /// Deck builder with default settings and guard
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: ShapeGuard> SlideDeck<G> {
    /// Use these settings
    pub fn with_settings(mut self, settings: DeckSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Use another placement guard
    pub fn with_guard<H: ShapeGuard>(self, guard: H) -> SlideDeck<H> {
        SlideDeck {
            settings: self.settings,
            guard,
        }
    }

    /// Current settings
    pub fn settings(&self) -> &DeckSettings {
        &self.settings
    }

    /// Render the title slide and one content slide per section
    pub fn render(&self, topic: &str, sections: &[Section], theme: &Theme) -> Result<RenderedDeck> {
        self.settings.validate()?;

        let mut writer = PptxWriter::new(self.settings.meta.locale.clone())
            .with_title(topic)
            .with_theme(theme);
        if let Some(author) = &self.settings.meta.author {
            writer = writer.with_author(author.clone());
        }

        let mut report = DeckReport::default();

        writer.add_slide(self.title_slide(topic, theme));
        for (index, section) in sections.iter().enumerate() {
            let slide = self.content_slide(index + 1, section, theme, &mut report);
            writer.add_slide(slide);
        }
        report.slides = writer.slide_count();

        debug!(
            "Deck '{}': {} slides, theme {}, {} decorations skipped",
            topic,
            report.slides,
            theme.id,
            report.skipped.len()
        );

        Ok(RenderedDeck {
            bytes: writer.generate()?,
            report,
        })
    }

    fn title_slide(&self, topic: &str, theme: &Theme) -> Slide {
        let mut slide = Slide::new(1).with_background(background(theme));

        slide.add_text(
            TextBox::new(names::TITLE, layout::TITLE_SLIDE_TITLE).with_paragraph(
                TextParagraph::new(topic, font::TITLE_SLIDE_TITLE, theme.title_color)
                    .bold()
                    .aligned(Align::Center),
            ),
        );
        slide.add_text(
            TextBox::new(names::SUBTITLE, layout::TITLE_SLIDE_SUBTITLE).with_paragraph(
                TextParagraph::new(&self.settings.deck.subtitle, font::SUBTITLE, theme.body_color)
                    .aligned(Align::Center),
            ),
        );

        slide
    }

    /// Content slide for the `number`-th section (1-based)
    fn content_slide(
        &self,
        number: usize,
        section: &Section,
        theme: &Theme,
        report: &mut DeckReport,
    ) -> Slide {
        let mut slide = Slide::new(number + 1).with_background(background(theme));

        slide.add_text(
            TextBox::new(names::TITLE, layout::CONTENT_TITLE).with_paragraph(
                TextParagraph::new(
                    decorate_title(&section.title),
                    font::CONTENT_TITLE,
                    theme.title_color,
                )
                .bold(),
            ),
        );

        self.decorate(
            &mut slide,
            Bar::new(names::TITLE_BAR, layout::TITLE_BAR, theme.accent_color),
            report,
        );

        let bullets = bullet_lines(&section.content);
        debug!(
            "Slide {} '{}': {} bullets",
            slide.position,
            section.title,
            bullets.len()
        );
        if !bullets.is_empty() {
            slide.add_text(
                TextBox::new(names::BODY, layout::BODY).with_paragraphs(bullets.into_iter().map(
                    |line| {
                        TextParagraph::new(line, font::BODY, theme.body_color)
                            .with_bullet(BULLET)
                            .with_spacing(layout::BODY_PARAGRAPH_SPACING, layout::BODY_LINE_SPACING)
                    },
                )),
            );
        }

        self.decorate(
            &mut slide,
            Bar::new(names::BOTTOM_BAR, layout::BOTTOM_BAR, theme.accent_color),
            report,
        );

        slide.add_text(
            TextBox::new(names::SLIDE_NUMBER, layout::SLIDE_NUMBER).with_paragraph(
                TextParagraph::new(number.to_string(), font::SLIDE_NUMBER, theme.body_color)
                    .aligned(Align::Right),
            ),
        );

        slide
    }

    fn decorate(&self, slide: &mut Slide, bar: Bar, report: &mut DeckReport) {
        let name = bar.name.clone();
        if let Decoration::Skipped(reason) = attempt_decorate(slide, bar, &self.guard) {
            report.skipped.push(SkippedDecoration {
                slide: slide.position,
                name,
                reason,
            });
        }
    }
}

fn background(theme: &Theme) -> Gradient {
    Gradient::diagonal(theme.bg_start, theme.bg_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Frame;
    use crate::slide::Shape;
    use aidoc_core::resolve_theme;
    use aidoc_model::Rgb;

    fn sections(n: u32) -> Vec<Section> {
        (1..=n)
            .map(|i| Section::new(i, format!("Part {}", i), "• one\n• two"))
            .collect()
    }

    fn refuse_bottom(_: &Slide, bar: &Bar) -> std::result::Result<(), String> {
        if bar.name == names::BOTTOM_BAR {
            Err("forced".to_string())
        } else {
            Ok(())
        }
    }

    #[test]
    fn test_attempt_decorate_placed() {
        let mut slide = Slide::new(2);
        let bar = Bar::new(names::TITLE_BAR, layout::TITLE_BAR, Rgb(1, 2, 3));
        assert_eq!(
            attempt_decorate(&mut slide, bar, &CanvasGuard),
            Decoration::Placed
        );
        assert_eq!(slide.bars().count(), 1);
    }

    #[test]
    fn test_attempt_decorate_skipped() {
        let mut slide = Slide::new(2);
        let frame = Frame::new(0, 0, 1, layout::CANVAS_HEIGHT + 1);
        let bar = Bar::new("Off Canvas", frame, Rgb(1, 2, 3));
        let outcome = attempt_decorate(&mut slide, bar, &CanvasGuard);
        assert!(matches!(outcome, Decoration::Skipped(ref reason) if reason.contains("outside")));
        assert!(slide.shapes.is_empty());
    }

    #[test]
    fn test_title_slide_layout() {
        let deck = SlideDeck::new();
        let theme = resolve_theme(Some("nature_green"));
        let slide = deck.title_slide("Forests", theme);

        assert_eq!(slide.position, 1);
        assert_eq!(
            slide.background,
            Some(Gradient::diagonal(theme.bg_start, theme.bg_end))
        );
        let title = slide.text_box(names::TITLE).unwrap();
        assert_eq!(title.text(), "Forests");
        assert_eq!(title.paragraphs[0].size, 48);
        assert!(title.paragraphs[0].bold);
        assert_eq!(title.paragraphs[0].color, theme.title_color);
        assert_eq!(title.paragraphs[0].align, Align::Center);

        let subtitle = slide.text_box(names::SUBTITLE).unwrap();
        assert_eq!(subtitle.text(), "AI-Generated Presentation");
        assert_eq!(subtitle.paragraphs[0].color, theme.body_color);
        assert_eq!(slide.bars().count(), 0);
    }

    #[test]
    fn test_content_slide_layout() {
        let deck = SlideDeck::new();
        let theme = resolve_theme(Some("vibrant_orange"));
        let mut report = DeckReport::default();
        let section = Section::new(1, "Market Trends", "- **Up** 5%\n\n- Down *2%*");
        let slide = deck.content_slide(3, &section, theme, &mut report);

        assert_eq!(slide.position, 4);
        assert!(report.is_complete());

        let title = slide.text_box(names::TITLE).unwrap();
        assert_eq!(title.text(), "📈  Market Trends");
        assert_eq!(title.paragraphs[0].size, 36);

        let body = slide.text_box(names::BODY).unwrap();
        assert_eq!(body.text(), "Up 5%\nDown 2%");
        assert!(body
            .paragraphs
            .iter()
            .all(|p| p.bullet == Some(BULLET) && p.size == 20 && p.color == theme.body_color));

        let bars: Vec<_> = slide.bars().map(|b| b.name.as_str()).collect();
        assert_eq!(bars, vec![names::TITLE_BAR, names::BOTTOM_BAR]);
        assert!(slide.bars().all(|b| b.color == theme.accent_color));

        let number = slide.text_box(names::SLIDE_NUMBER).unwrap();
        assert_eq!(number.text(), "3");
        assert_eq!(number.paragraphs[0].align, Align::Right);
    }

    #[test]
    fn test_shape_order() {
        let deck = SlideDeck::new();
        let mut report = DeckReport::default();
        let slide = deck.content_slide(
            1,
            &Section::new(1, "A", "x"),
            resolve_theme(None),
            &mut report,
        );
        let order: Vec<_> = slide
            .shapes
            .iter()
            .map(|s| match s {
                Shape::Text(t) => t.name.as_str(),
                Shape::Bar(b) => b.name.as_str(),
            })
            .collect();
        assert_eq!(
            order,
            vec![
                names::TITLE,
                names::TITLE_BAR,
                names::BODY,
                names::BOTTOM_BAR,
                names::SLIDE_NUMBER
            ]
        );
    }

    #[test]
    fn test_empty_content_has_no_body() {
        let deck = SlideDeck::new();
        let mut report = DeckReport::default();
        let slide = deck.content_slide(
            1,
            &Section::new(1, "Blank", "  \n"),
            resolve_theme(None),
            &mut report,
        );
        assert!(slide.text_box(names::BODY).is_none());
        assert!(slide.text_box(names::TITLE).is_some());
        assert!(slide.text_box(names::SLIDE_NUMBER).is_some());
        assert_eq!(slide.bars().count(), 2);
    }

    #[test]
    fn test_render_report() {
        let rendered = SlideDeck::new()
            .render("Topic", &sections(3), resolve_theme(None))
            .unwrap();
        assert_eq!(rendered.report.slides, 4);
        assert!(rendered.report.is_complete());
        assert!(!rendered.bytes.is_empty());
    }

    #[test]
    fn test_render_with_refusing_guard() {
        let rendered = SlideDeck::new()
            .with_guard(refuse_bottom)
            .render("Topic", &sections(2), resolve_theme(None))
            .unwrap();

        assert_eq!(rendered.report.slides, 3);
        assert_eq!(
            rendered.report.skipped,
            vec![
                SkippedDecoration {
                    slide: 2,
                    name: names::BOTTOM_BAR.to_string(),
                    reason: "forced".to_string(),
                },
                SkippedDecoration {
                    slide: 3,
                    name: names::BOTTOM_BAR.to_string(),
                    reason: "forced".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_invalid_settings_fail_render() {
        let mut settings = DeckSettings::default();
        settings.meta.locale.clear();
        let err = SlideDeck::new()
            .with_settings(settings)
            .render("Topic", &[], resolve_theme(None))
            .unwrap_err();
        assert_eq!(err.code(), "PPTX001");
    }
}
