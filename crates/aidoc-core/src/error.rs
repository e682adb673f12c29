//! Error types for content preparation

use aidoc_model::UnknownDocumentType;
use thiserror::Error;

use crate::generator::GenerationError;

/// Errors raised by the core library
#[derive(Error, Debug)]
pub enum CoreError {
    /// The request cannot be served as given
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The text generator failed
    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl From<UnknownDocumentType> for CoreError {
    fn from(err: UnknownDocumentType) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
