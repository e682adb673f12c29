//! aidoc-model - Request and section types
//!
//! This crate provides the plain data types shared by the aidoc renderers:
//! the caller-supplied [`Section`], the [`RenderRequest`] that bundles a topic
//! with its sections, and the [`RenderedDocument`] handed back for transport.

pub mod color;
pub mod request;
pub mod section;

pub use color::Rgb;
pub use request::{
    attachment_filename, DocumentType, RenderRequest, RenderedDocument, UnknownDocumentType,
};
pub use section::Section;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
