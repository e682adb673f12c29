//! Render requests and rendered output
//!
//! A [`RenderRequest`] is constructed per call, consumed by exactly one render
//! and discarded once the bytes are produced.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::section::Section;

/// MIME type of a WordprocessingML document
pub const WORD_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// MIME type of a PresentationML document
pub const SLIDE_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// The kind of office document to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Word-processor document (.docx)
    #[serde(rename = "docx", alias = "word")]
    Word,
    /// Slide deck (.pptx)
    #[serde(rename = "pptx", alias = "slide", alias = "slides")]
    Slide,
}

/// A document type string that names neither format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown document type '{0}' (expected docx or pptx)")]
pub struct UnknownDocumentType(pub String);

impl DocumentType {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Word => "docx",
            Self::Slide => "pptx",
        }
    }

    /// MIME content type for transport
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Word => WORD_CONTENT_TYPE,
            Self::Slide => SLIDE_CONTENT_TYPE,
        }
    }
}

impl FromStr for DocumentType {
    type Err = UnknownDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "docx" | "word" => Ok(Self::Word),
            "pptx" | "slide" | "slides" => Ok(Self::Slide),
            other => Err(UnknownDocumentType(other.to_string())),
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Everything needed for a single export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Document topic (title heading / title slide)
    pub topic: String,
    /// Ordered sections
    pub sections: Vec<Section>,
    /// Output format
    #[serde(rename = "docType", alias = "doc_type")]
    pub doc_type: DocumentType,
    /// Theme identifier, only meaningful for slides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl RenderRequest {
    /// Create a request without a theme
    pub fn new(topic: impl Into<String>, sections: Vec<Section>, doc_type: DocumentType) -> Self {
        Self {
            topic: topic.into(),
            sections,
            doc_type,
            theme: None,
        }
    }

    /// Set the theme identifier
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Download filename for this request
    pub fn filename(&self) -> String {
        attachment_filename(&self.topic, self.doc_type)
    }
}

/// A finished office document, owned by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// The serialized container
    pub bytes: Vec<u8>,
    /// Suggested attachment filename
    pub filename: String,
    /// MIME content type
    pub content_type: &'static str,
}

impl RenderedDocument {
    /// Wrap rendered bytes with the transport metadata of `request`
    pub fn for_request(request: &RenderRequest, bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            filename: request.filename(),
            content_type: request.doc_type.content_type(),
        }
    }
}

/// Derive an attachment filename from a topic: whitespace becomes `_`
pub fn attachment_filename(topic: &str, doc_type: DocumentType) -> String {
    let stem: String = topic
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{}.{}", stem, doc_type.extension())
}
