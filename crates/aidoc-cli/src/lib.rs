//! aidoc CLI - Command-line interface library
//!
//! This library provides the CLI functionality for aidoc:
//! - Render: turn a JSON render request into a `.docx` or `.pptx`
//! - Outline: clean a generated list of titles into sections
//! - Themes: list the slide themes
//! - Inspect: summarise a produced document
//!
//! # Library Usage
//!
//! ```
//! use aidoc_cli::{export_document, Settings};
//! use aidoc_model::{DocumentType, RenderRequest, Section};
//!
//! let request = RenderRequest::new(
//!     "Quarterly Report",
//!     vec![Section::new(1, "Intro", "Hello")],
//!     DocumentType::Word,
//! );
//! let document = export_document(&request, &Settings::default())?;
//! assert_eq!(document.filename, "Quarterly_Report.docx");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Render a request
//! aidoc render request.json --output deck.pptx
//!
//! # Clean a raw outline into JSON sections
//! aidoc outline titles.txt --count 5 --type pptx
//!
//! # Summarise a produced file
//! aidoc inspect deck.pptx
//! ```

pub mod app;
pub mod config;
pub mod export;

// Re-export main entry point and types
pub use app::{
    inspect_command, inspect_report, outline_command, outline_json, render_command,
    themes_command, themes_listing,
};
pub use app::{run_cli, OutputFormat};
pub use config::{load_settings, ExportSettings, Settings};
pub use export::{export_document, resolve_request_theme};
