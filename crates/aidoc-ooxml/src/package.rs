//! OPC package assembly
//!
//! Both writers describe their output as a list of parts. [`Package`] turns
//! that list into a zip: `[Content_Types].xml` is derived from the parts
//! themselves, so a part can never be written without its content type.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::Result;
use crate::xml::{escape_xml, PACKAGE_TIMESTAMP};

/// Namespace of `[Content_Types].xml`
pub const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// Namespace of relationship parts
pub const NS_PACKAGE_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";

/// Content types used by the writers
pub mod content_type {
    /// Relationship parts (`*.rels`)
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    /// `docProps/core.xml`
    pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    /// `docProps/app.xml`
    pub const EXTENDED_PROPERTIES: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";
    /// `word/document.xml`
    pub const WORD_DOCUMENT: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    /// `word/styles.xml`
    pub const WORD_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    /// `ppt/presentation.xml`
    pub const PRESENTATION: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    /// `ppt/presProps.xml`
    pub const PRES_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
    /// `ppt/viewProps.xml`
    pub const VIEW_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";
    /// `ppt/tableStyles.xml`
    pub const TABLE_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
    /// `ppt/theme/themeN.xml`
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
    /// `ppt/slideMasters/slideMasterN.xml`
    pub const SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
    /// `ppt/slideLayouts/slideLayoutN.xml`
    pub const SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
    /// `ppt/slides/slideN.xml`
    pub const SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
}

/// Relationship types used by the writers
pub mod rel_type {
    /// Package to main part
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    /// Package to `docProps/core.xml`
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    /// Package to `docProps/app.xml`
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    /// Document to styles
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    /// Presentation to presProps
    pub const PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
    /// Presentation to viewProps
    pub const VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";
    /// Presentation to tableStyles
    pub const TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";
    /// Presentation or master to theme
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    /// Presentation or layout to master
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    /// Master or slide to layout
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    /// Presentation to slide
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
}

/// A relationship from one part to another; ids are assigned in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship<'a> {
    /// Relationship type URI
    pub rel_type: &'a str,
    /// Target, relative to the source part's folder
    pub target: &'a str,
}

impl<'a> Relationship<'a> {
    /// Create a relationship
    pub fn new(rel_type: &'a str, target: &'a str) -> Self {
        Self { rel_type, target }
    }
}

/// Relationship part XML; the n-th relationship gets `rId{n}` (1-based).
pub fn relationships_xml(relationships: &[Relationship]) -> String {
    let mut xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<Relationships xmlns=\"{}\">\n",
        NS_PACKAGE_RELATIONSHIPS
    );
    for (rel, n) in relationships.iter().zip(1u32..) {
        xml.push_str(&format!(
            "  <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"{}\"/>\n",
            n,
            rel.rel_type,
            escape_xml(rel.target)
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

/// `docProps/core.xml` with the fixed package timestamp
pub fn core_properties_xml(title: &str, creator: &str, language: Option<&str>) -> String {
    let language = language
        .map(|lang| format!("  <dc:language>{}</dc:language>\n", escape_xml(lang)))
        .unwrap_or_default();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{title}</dc:title>
  <dc:creator>{creator}</dc:creator>
{language}  <dcterms:created xsi:type="dcterms:W3CDTF">{ts}</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">{ts}</dcterms:modified>
</cp:coreProperties>"#,
        title = escape_xml(title),
        creator = escape_xml(creator),
        language = language,
        ts = PACKAGE_TIMESTAMP
    )
}

/// `docProps/app.xml` with extra `(element, value)` statistics
pub fn app_properties_xml(stats: &[(&str, String)]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\">\n\
         \x20 <Application>aidoc</Application>\n",
    );
    for (element, value) in stats {
        xml.push_str(&format!(
            "  <{0}>{1}</{0}>\n",
            element,
            escape_xml(value)
        ));
    }
    xml.push_str("</Properties>");
    xml
}

#[derive(Debug)]
struct Part {
    name: String,
    content_type: Option<&'static str>,
    xml: String,
}

/// Parts of a package in write order
#[derive(Debug, Default)]
pub struct Package {
    parts: Vec<Part>,
}

impl Package {
    /// Empty package
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an XML part with an explicit content type
    pub fn add_part(&mut self, name: impl Into<String>, content_type: &'static str, xml: String) {
        self.parts.push(Part {
            name: name.into(),
            content_type: Some(content_type),
            xml,
        });
    }

    /// Add a relationship part (typed by the `rels` extension default)
    pub fn add_relationships(&mut self, name: impl Into<String>, relationships: &[Relationship]) {
        self.parts.push(Part {
            name: name.into(),
            content_type: None,
            xml: relationships_xml(relationships),
        });
    }

    /// `[Content_Types].xml` for the current parts
    pub fn content_types_xml(&self) -> String {
        let mut xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<Types xmlns=\"{}\">\n\
             \x20 <Default Extension=\"rels\" ContentType=\"{}\"/>\n\
             \x20 <Default Extension=\"xml\" ContentType=\"application/xml\"/>\n",
            NS_CONTENT_TYPES,
            content_type::RELATIONSHIPS
        );
        for part in &self.parts {
            if let Some(content_type) = part.content_type {
                xml.push_str(&format!(
                    "  <Override PartName=\"/{}\" ContentType=\"{}\"/>\n",
                    part.name, content_type
                ));
            }
        }
        xml.push_str("</Types>");
        xml
    }

    /// Serialize into a zip; timestamps are fixed so output is reproducible
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(self.content_types_xml().as_bytes())?;

        for part in &self.parts {
            zip.start_file(part.name.as_str(), options)?;
            zip.write_all(part.xml.as_bytes())?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::OoxmlArchive;

    #[test]
    fn test_relationship_ids_follow_order() {
        let xml = relationships_xml(&[
            Relationship::new(rel_type::STYLES, "styles.xml"),
            Relationship::new(rel_type::THEME, "theme/theme1.xml"),
        ]);
        assert!(xml.contains(r#"Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml""#));
        assert!(xml.contains(r#"Id="rId2""#));
        assert!(xml.ends_with("</Relationships>"));
    }

    #[test]
    fn test_core_properties() {
        let xml = core_properties_xml("R&D", "Ada", Some("de-DE"));
        assert!(xml.contains("<dc:title>R&amp;D</dc:title>"));
        assert!(xml.contains("<dc:creator>Ada</dc:creator>"));
        assert!(xml.contains("<dc:language>de-DE</dc:language>"));
        assert!(xml.contains(PACKAGE_TIMESTAMP));

        assert!(!core_properties_xml("T", "A", None).contains("dc:language"));
    }

    #[test]
    fn test_app_properties() {
        let xml = app_properties_xml(&[("Slides", "3".to_string())]);
        assert!(xml.contains("<Application>aidoc</Application>"));
        assert!(xml.contains("  <Slides>3</Slides>\n"));
    }

    #[test]
    fn test_content_types_follow_parts() {
        let mut package = Package::new();
        package.add_relationships("_rels/.rels", &[]);
        package.add_part("word/document.xml", content_type::WORD_DOCUMENT, String::new());

        let types = package.content_types_xml();
        assert!(types.contains(r#"<Override PartName="/word/document.xml""#));
        assert!(!types.contains(r#"PartName="/_rels/.rels""#));
    }

    #[test]
    fn test_finish_writes_every_part() {
        let mut package = Package::new();
        package.add_part("a/b.xml", content_type::THEME, "<x/>".to_string());
        let bytes = package.finish().unwrap();

        let archive = OoxmlArchive::from_bytes(&bytes).unwrap();
        assert_eq!(archive.file_list(), vec!["[Content_Types].xml", "a/b.xml"]);
        assert_eq!(archive.get_string("a/b.xml").as_deref(), Some("<x/>"));
    }
}
