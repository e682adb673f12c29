//! # aidoc-ooxml
//!
//! Word (`.docx`) rendering for aidoc, plus the OOXML reading helpers the
//! slide crate and the CLI share.
//!
//! This crate provides functionality to:
//! - Render a topic and its sections as a DOCX package
//! - Unpack any OOXML package into memory
//! - Parse `word/document.xml` back into styled paragraphs
//! - Assemble OPC packages part by part ([`Package`])
//!
//! ## Example
//!
//! ```
//! use aidoc_model::Section;
//! use aidoc_ooxml::{render_word, WordOutline};
//!
//! let bytes = render_word("Quarterly Report", &[Section::new(1, "Intro", "Hello")])?;
//! let outline = WordOutline::from_docx(&bytes)?;
//!
//! assert_eq!(outline.topic(), Some("Quarterly Report"));
//! assert_eq!(outline.sections[0].body(), "Hello");
//! # Ok::<(), aidoc_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod document;
pub mod error;
pub mod outline;
pub mod package;
pub mod writer;
pub mod xml;

pub use archive::OoxmlArchive;
pub use document::{Document, Paragraph, Run};
pub use error::{OoxmlError, Result};
pub use outline::{WordOutline, WordSection};
pub use package::{Package, Relationship};
pub use writer::{render_word, DocxWriter};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
