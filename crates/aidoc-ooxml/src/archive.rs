//! Archive handling for OOXML packages
//!
//! DOCX and PPTX files are ZIP archives of XML parts. [`OoxmlArchive`]
//! unpacks one into memory so parts can be read by path.

use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};

use zip::read::ZipArchive;

use crate::error::{OoxmlError, Result};

/// An unpacked OOXML package
#[derive(Debug)]
pub struct OoxmlArchive {
    /// All parts in the archive, keyed by path
    files: HashMap<String, Vec<u8>>,
}

impl OoxmlArchive {
    /// Unpack a package held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    /// Create from any reader that implements Read + Seek
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut files = HashMap::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let name = file.name().to_string();

            // Skip directories
            if name.ends_with('/') {
                continue;
            }

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)?;
            files.insert(name, contents);
        }

        Ok(Self { files })
    }

    /// Get a part's contents by path
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(|v| v.as_slice())
    }

    /// Get a part's contents as a string
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Get a part that must be present
    pub fn require(&self, path: &str) -> Result<&[u8]> {
        self.get(path)
            .ok_or_else(|| OoxmlError::MissingPart(path.to_string()))
    }

    /// Get the main Word content (word/document.xml)
    pub fn document_xml(&self) -> Result<&[u8]> {
        self.require("word/document.xml")
    }

    /// Check if a part exists in the archive
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// List all parts, sorted by path
    pub fn file_list(&self) -> Vec<&str> {
        let mut paths: Vec<_> = self.files.keys().map(|s| s.as_str()).collect();
        paths.sort_unstable();
        paths
    }

    /// Whether this looks like a WordprocessingML package
    pub fn is_word(&self) -> bool {
        self.contains("word/document.xml")
    }

    /// Whether this looks like a PresentationML package
    pub fn is_presentation(&self) -> bool {
        self.contains("ppt/presentation.xml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn package(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (path, body) in parts {
            zip.start_file(*path, options).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_read_parts() {
        let bytes = package(&[
            ("[Content_Types].xml", "<Types/>"),
            ("word/document.xml", "<w:document/>"),
        ]);
        let archive = OoxmlArchive::from_bytes(&bytes).unwrap();

        assert!(archive.is_word());
        assert!(!archive.is_presentation());
        assert_eq!(archive.document_xml().unwrap(), b"<w:document/>");
        assert_eq!(
            archive.get_string("[Content_Types].xml"),
            Some("<Types/>".to_string())
        );
        assert_eq!(
            archive.file_list(),
            vec!["[Content_Types].xml", "word/document.xml"]
        );
    }

    #[test]
    fn test_missing_part() {
        let bytes = package(&[("ppt/presentation.xml", "<p:presentation/>")]);
        let archive = OoxmlArchive::from_bytes(&bytes).unwrap();

        assert!(archive.is_presentation());
        let err = archive.document_xml().unwrap_err();
        assert!(matches!(err, OoxmlError::MissingPart(ref p) if p == "word/document.xml"));
    }

    #[test]
    fn test_not_a_zip() {
        let err = OoxmlArchive::from_bytes(b"plain text").unwrap_err();
        assert!(matches!(err, OoxmlError::Archive(_)));
    }
}
