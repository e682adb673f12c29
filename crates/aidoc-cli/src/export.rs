//! Export dispatch
//!
//! One request in, one rendered document out. The document type picks the
//! renderer; slides additionally resolve a theme.

use aidoc_core::{resolve_theme, Theme};
use aidoc_model::{DocumentType, RenderRequest, RenderedDocument};
use aidoc_ooxml::DocxWriter;
use aidoc_pptx::SlideDeck;
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Settings;

/// Theme for a request: its own, else the configured default, else the
/// registry fallback.
pub fn resolve_request_theme(request: &RenderRequest, settings: &Settings) -> &'static Theme {
    let requested = request
        .theme
        .as_deref()
        .filter(|id| !id.is_empty())
        .or(settings.export.default_theme.as_deref());
    resolve_theme(requested)
}

/// Render a request into an office document
pub fn export_document(request: &RenderRequest, settings: &Settings) -> Result<RenderedDocument> {
    let bytes = match request.doc_type {
        DocumentType::Word => {
            let mut writer = DocxWriter::new();
            if let Some(author) = &settings.meta.author {
                writer = writer.with_author(author.clone());
            }
            writer
                .generate(&request.topic, &request.sections)
                .context("Failed to render Word document")?
        }
        DocumentType::Slide => {
            let theme = resolve_request_theme(request, settings);
            let rendered = SlideDeck::new()
                .with_settings(settings.deck_settings())
                .render(&request.topic, &request.sections, theme)
                .context("Failed to render slide deck")?;
            for skipped in &rendered.report.skipped {
                warn!(
                    "Slide {}: '{}' left out ({})",
                    skipped.slide, skipped.name, skipped.reason
                );
            }
            info!(
                "Rendered {} slides with theme {}",
                rendered.report.slides, theme.id
            );
            rendered.bytes
        }
    };

    Ok(RenderedDocument::for_request(request, bytes))
}
