//! Errors raised while packing or unpacking Office documents

use thiserror::Error;

/// Result type for OOXML operations
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Failures of the package layer
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// The bytes are not a readable zip container
    #[error("Not a valid Office package: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A part could not be parsed as XML
    #[error("Malformed XML part: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A part the caller requires is absent
    #[error("Package has no part '{0}'")]
    MissingPart(String),
}

impl OoxmlError {
    /// Stable diagnostic code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Archive(_) => "OOXML001",
            Self::Io(_) => "OOXML002",
            Self::Xml(_) => "OOXML003",
            Self::MissingPart(_) => "OOXML004",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_part_message() {
        let err = OoxmlError::MissingPart("word/document.xml".to_string());
        assert_eq!(err.code(), "OOXML004");
        assert_eq!(err.to_string(), "Package has no part 'word/document.xml'");
    }
}
