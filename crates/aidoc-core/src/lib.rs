//! aidoc-core - Content preparation for office documents
//!
//! Core library for aidoc. Everything here is pure and stateless:
//!
//! - [`sanitize`]: normalize generated text into renderable content
//! - [`theme`]: resolve a theme identifier to a color palette
//! - [`icons`]: pick a decorative glyph for a section title
//! - [`outline`]: turn a generated list of titles into sections
//! - [`prompts`] and [`generator`]: the boundary to the text generator
//!
//! # Example
//!
//! ```
//! use aidoc_core::{match_icon, resolve_theme, sanitize};
//!
//! assert_eq!(sanitize("- **Revenue** grew"), "Revenue grew");
//! assert_eq!(resolve_theme(Some("no_such_theme")).id, "professional_blue");
//! assert_eq!(match_icon("Q3 Market Analysis"), Some("📈"));
//! ```

pub mod error;
pub mod generator;
pub mod icons;
pub mod outline;
pub mod prompts;
pub mod sanitize;
pub mod theme;

// Re-export main types and functions
pub use error::{CoreError, Result};
pub use generator::{Author, GenerationError, TextGenerator};
pub use icons::{decorate_title, match_icon, ICON_TABLE};
pub use outline::{clean_outline, outline_sections};
pub use sanitize::{bullet_lines, sanitize};
pub use theme::{resolve as resolve_theme, themes, Theme, DEFAULT_THEME_ID};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
