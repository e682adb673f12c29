//! Section definitions
//!
//! A section is one titled, ordered unit of document content. Sections are
//! immutable inputs to rendering.

use serde::{Deserialize, Serialize};

/// A titled unit of document content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Caller-assigned identifier, unique within a request
    pub id: u32,
    /// Section title (heading in Word, slide title in slides)
    pub title: String,
    /// Raw content, possibly empty or markdown-decorated
    #[serde(default)]
    pub content: String,
}

impl Section {
    /// Create a section with content
    pub fn new(id: u32, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Create a section without content (an outline entry)
    pub fn outline_entry(id: u32, title: impl Into<String>) -> Self {
        Self::new(id, title, String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_new() {
        let section = Section::new(1, "Intro", "Hello");
        assert_eq!(section.id, 1);
        assert_eq!(section.title, "Intro");
        assert_eq!(section.content, "Hello");
    }

    #[test]
    fn test_outline_entry_has_no_content() {
        let section = Section::outline_entry(3, "Outline");
        assert_eq!(section.id, 3);
        assert!(section.content.is_empty());
    }

    #[test]
    fn test_deserialize_without_content() {
        let section: Section = serde_json::from_str(r#"{"id": 4, "title": "Agenda"}"#).unwrap();
        assert_eq!(section.content, "");
        assert_eq!(section.title, "Agenda");
    }
}
