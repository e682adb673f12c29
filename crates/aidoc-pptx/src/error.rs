//! Error types for PPTX generation.

use aidoc_ooxml::OoxmlError;
use thiserror::Error;

/// Result type for PPTX operations
pub type Result<T> = std::result::Result<T, PptxError>;

/// Errors that can occur during PPTX generation and reading
#[derive(Error, Debug)]
pub enum PptxError {
    /// Deck settings are unusable
    #[error("Invalid deck settings: {reason}")]
    InvalidSettings { reason: String },

    /// Package is not a presentation this crate can read
    #[error("Invalid presentation: {reason}")]
    InvalidPresentation { reason: String },

    /// A slide referenced by the presentation is absent
    #[error("Missing slide part: {path}")]
    MissingSlide { path: String },

    /// XML generation or parsing error
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// ZIP archive error
    #[error("Archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error (for DeckSettings)
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Package-level read error
    #[error("Package error: {0}")]
    Package(#[from] OoxmlError),
}

impl PptxError {
    /// Create an invalid settings error
    pub fn invalid_settings(reason: impl Into<String>) -> Self {
        Self::InvalidSettings {
            reason: reason.into(),
        }
    }

    /// Create an invalid presentation error
    pub fn invalid_presentation(reason: impl Into<String>) -> Self {
        Self::InvalidPresentation {
            reason: reason.into(),
        }
    }

    /// Create a missing slide error
    pub fn missing_slide(path: impl Into<String>) -> Self {
        Self::MissingSlide { path: path.into() }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSettings { .. } => "PPTX001",
            Self::InvalidPresentation { .. } => "PPTX002",
            Self::MissingSlide { .. } => "PPTX003",
            Self::XmlError(_) => "PPTX004",
            Self::ZipError(_) => "PPTX005",
            Self::IoError(_) => "PPTX006",
            Self::TomlError(_) => "PPTX007",
            Self::Package(_) => "PPTX008",
        }
    }
}
