//! Structural view of a rendered Word document
//!
//! Groups the body paragraphs back into a topic and sections, the inverse
//! of what [`crate::writer::DocxWriter`] lays out.

use log::debug;

use crate::archive::OoxmlArchive;
use crate::document::Document;
use crate::error::Result;
use crate::writer::{STYLE_HEADING, STYLE_TITLE};

/// A Word document read back as topic plus sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordOutline {
    /// Text of every `Title` paragraph
    pub topics: Vec<String>,
    /// Sections in document order
    pub sections: Vec<WordSection>,
}

/// One heading and the paragraphs under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSection {
    /// Heading text
    pub title: String,
    /// Body paragraph texts, empty strings included
    pub paragraphs: Vec<String>,
}

impl WordSection {
    /// Body text with paragraphs joined by newlines
    pub fn body(&self) -> String {
        self.paragraphs.join("\n")
    }
}

impl WordOutline {
    /// Read the outline of a `.docx` package
    pub fn from_docx(bytes: &[u8]) -> Result<Self> {
        let archive = OoxmlArchive::from_bytes(bytes)?;
        let document = Document::parse(archive.document_xml()?)?;
        Ok(Self::from_document(&document))
    }

    /// Group parsed paragraphs by heading
    pub fn from_document(document: &Document) -> Self {
        let mut outline = WordOutline::default();

        for para in &document.paragraphs {
            match para.style_id.as_deref() {
                Some(STYLE_TITLE) => outline.topics.push(para.plain_text()),
                Some(STYLE_HEADING) => outline.sections.push(WordSection {
                    title: para.plain_text(),
                    paragraphs: Vec::new(),
                }),
                _ => match outline.sections.last_mut() {
                    Some(section) => section.paragraphs.push(para.plain_text()),
                    None => debug!("Skipping paragraph before first heading"),
                },
            }
        }

        outline
    }

    /// The topic when exactly one title paragraph is present
    pub fn topic(&self) -> Option<&str> {
        match self.topics.as_slice() {
            [topic] => Some(topic.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::render_word;
    use aidoc_model::Section;

    #[test]
    fn test_outline_groups_by_heading() {
        let sections = vec![
            Section::new(1, "Intro", "Hello"),
            Section::new(2, "Plan", "Step one\nStep two"),
        ];
        let outline = WordOutline::from_docx(&render_word("Roadmap", &sections).unwrap()).unwrap();

        assert_eq!(outline.topic(), Some("Roadmap"));
        assert_eq!(outline.sections.len(), 2);
        assert_eq!(outline.sections[0].title, "Intro");
        assert_eq!(outline.sections[0].body(), "Hello");
        assert_eq!(outline.sections[1].paragraphs, vec!["Step one", "Step two"]);
    }

    #[test]
    fn test_empty_body_is_one_empty_paragraph() {
        let outline =
            WordOutline::from_docx(&render_word("T", &[Section::new(1, "Blank", "")]).unwrap())
                .unwrap();
        assert_eq!(outline.sections[0].paragraphs, vec![String::new()]);
    }

    #[test]
    fn test_topic_requires_single_title() {
        let outline = WordOutline {
            topics: vec!["A".to_string(), "B".to_string()],
            sections: Vec::new(),
        };
        assert_eq!(outline.topic(), None);
        assert_eq!(WordOutline::default().topic(), None);
    }

    #[test]
    fn test_not_a_docx() {
        assert!(WordOutline::from_docx(b"nope").is_err());
    }
}
