//! DeckSettings configuration for PPTX generation.
//!
//! ```toml
//! [meta]
//! locale = "en-US"
//! author = "Research Team"
//!
//! [deck]
//! subtitle = "Quarterly Briefing"
//! ```

use crate::error::{PptxError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Caption shown under the title on the first slide
pub const DEFAULT_SUBTITLE: &str = "AI-Generated Presentation";

/// Settings that shape a deck without changing its content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSettings {
    /// Document metadata
    #[serde(default)]
    pub meta: DeckMeta,

    /// Deck presentation options
    #[serde(default)]
    pub deck: DeckOptions,
}

/// Document metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckMeta {
    /// Locale code written on every text run (e.g., "en-US", "it-IT")
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Author recorded in the package properties
    #[serde(default)]
    pub author: Option<String>,
}

fn default_locale() -> String {
    "en-US".to_string()
}

impl Default for DeckMeta {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            author: None,
        }
    }
}

/// Deck presentation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckOptions {
    /// Title-slide caption
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

fn default_subtitle() -> String {
    DEFAULT_SUBTITLE.to_string()
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            subtitle: default_subtitle(),
        }
    }
}

impl DeckSettings {
    /// Load settings from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse settings from a TOML string
    pub fn parse(toml_content: &str) -> Result<Self> {
        let settings: DeckSettings = toml::from_str(toml_content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.meta.author = Some(author.into());
        self
    }

    /// Set the title-slide caption
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.deck.subtitle = subtitle.into();
        self
    }

    /// Check values that would produce an invalid package
    pub fn validate(&self) -> Result<()> {
        let locale = &self.meta.locale;
        if locale.is_empty() {
            return Err(PptxError::invalid_settings("meta.locale is empty"));
        }
        if !locale.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(PptxError::invalid_settings(format!(
                "meta.locale '{}' is not a language tag",
                locale
            )));
        }
        Ok(())
    }
}
