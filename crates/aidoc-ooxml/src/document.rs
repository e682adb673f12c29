//! Document content parsing (word/document.xml)
//!
//! Reads the body back as a flat list of styled paragraphs. Only what the
//! renderer emits is modelled: paragraph style, runs and their text.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{OoxmlError, Result};
use crate::xml::get_attr;

/// A parsed Word document
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Body paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

/// A paragraph with its style and runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Style ID (references styles.xml)
    pub style_id: Option<String>,
    /// Text runs
    pub runs: Vec<Run>,
}

/// A text run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// The text content
    pub text: String,
}

/// Where the parser currently is inside `w:body`
#[derive(Default)]
struct BodyCursor {
    in_body: bool,
    paragraph: Option<Paragraph>,
    run: Option<String>,
    // Only <w:t> carries visible text; <w:instrText> does not
    in_t: bool,
}

impl BodyCursor {
    fn open(&mut self, element: &[u8]) {
        match element {
            b"body" => self.in_body = true,
            b"p" if self.in_body => self.paragraph = Some(Paragraph::default()),
            b"r" if self.paragraph.is_some() => self.run = Some(String::new()),
            b"t" if self.run.is_some() => self.in_t = true,
            _ => {}
        }
    }

    fn close(&mut self, element: &[u8], out: &mut Vec<Paragraph>) {
        match element {
            b"body" => self.in_body = false,
            b"p" => out.extend(self.paragraph.take()),
            b"r" => {
                if let (Some(text), Some(paragraph)) = (self.run.take(), self.paragraph.as_mut()) {
                    paragraph.runs.push(Run { text });
                }
            }
            b"t" => self.in_t = false,
            _ => {}
        }
    }
}

impl Document {
    /// Parse a document from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        // Whitespace inside runs is content
        reader.config_mut().trim_text(false);

        let mut cursor = BodyCursor::default();
        let mut paragraphs = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf).map_err(OoxmlError::Xml)? {
                Event::Start(e) => cursor.open(e.local_name().as_ref()),
                Event::End(e) => cursor.close(e.local_name().as_ref(), &mut paragraphs),
                Event::Empty(e) => match e.local_name().as_ref() {
                    b"p" if cursor.in_body => paragraphs.push(Paragraph::default()),
                    b"pStyle" => {
                        if let Some(paragraph) = cursor.paragraph.as_mut() {
                            paragraph.style_id = get_attr(&e, b"w:val");
                        }
                    }
                    _ => {}
                },
                Event::Text(text) if cursor.in_t => {
                    if let Some(run) = cursor.run.as_mut() {
                        run.push_str(&text.unescape().unwrap_or_default());
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(Document { paragraphs })
    }

    /// Paragraphs carrying the given style
    pub fn styled<'a>(&'a self, style_id: &'a str) -> impl Iterator<Item = &'a Paragraph> {
        self.paragraphs
            .iter()
            .filter(move |p| p.style_id.as_deref() == Some(style_id))
    }

    /// Get plain text content, one line per paragraph
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Paragraph {
    /// Get plain text of this paragraph
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if this paragraph has no visible text
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_paragraph() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
        <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
            <w:body>
                <w:p>
                    <w:r>
                        <w:t>Hello, world!</w:t>
                    </w:r>
                </w:p>
            </w:body>
        </w:document>"#;

        let doc = Document::parse(xml).unwrap();
        assert_eq!(doc.paragraphs.len(), 1);
        assert_eq!(doc.plain_text(), "Hello, world!");
        assert_eq!(doc.paragraphs[0].style_id, None);
    }

    #[test]
    fn test_parse_styled_paragraphs() {
        let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
            <w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>Report</w:t></w:r></w:p>
            <w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Intro</w:t></w:r></w:p>
            <w:p><w:pPr><w:pStyle w:val="Normal"/></w:pPr><w:r><w:t xml:space="preserve">Fish &amp; chips</w:t></w:r></w:p>
        </w:body></w:document>"#;

        let doc = Document::parse(xml).unwrap();
        let styles: Vec<_> = doc
            .paragraphs
            .iter()
            .map(|p| p.style_id.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(styles, vec!["Title", "Heading1", "Normal"]);
        assert_eq!(doc.paragraphs[2].plain_text(), "Fish & chips");
        assert_eq!(doc.styled("Heading1").count(), 1);
    }

    #[test]
    fn test_empty_paragraphs_are_kept() {
        let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
            <w:p><w:pPr><w:pStyle w:val="Normal"/></w:pPr></w:p>
            <w:p/>
        </w:body></w:document>"#;

        let doc = Document::parse(xml).unwrap();
        assert_eq!(doc.paragraphs.len(), 2);
        assert!(doc.paragraphs.iter().all(Paragraph::is_empty));
        assert_eq!(doc.paragraphs[0].style_id.as_deref(), Some("Normal"));
    }

    #[test]
    fn test_ignore_field_codes() {
        let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>
            <w:p>
                <w:r><w:instrText>TOC \o "1-3"</w:instrText></w:r>
                <w:r><w:t>Contents</w:t></w:r>
            </w:p>
        </w:body></w:document>"#;

        let doc = Document::parse(xml).unwrap();
        assert_eq!(doc.plain_text(), "Contents");
    }

    #[test]
    fn test_parse_empty_document() {
        let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body/></w:document>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(doc.paragraphs.is_empty());
    }

    #[test]
    fn test_malformed_xml() {
        let result = Document::parse(b"<w:document><w:body></w:document>");
        assert!(result.is_err());
    }
}
