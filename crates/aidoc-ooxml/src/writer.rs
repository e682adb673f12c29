//! DOCX Writer
//!
//! Writes a topic and its sections as a self-contained WordprocessingML
//! package: a `Title` paragraph, then per section a `Heading1` paragraph and
//! its sanitized body as `Normal` paragraphs.
//!
//! # Example
//!
//! ```
//! use aidoc_model::Section;
//! use aidoc_ooxml::render_word;
//!
//! let sections = vec![Section::new(1, "Intro", "Hello")];
//! let bytes = render_word("Quarterly Report", &sections)?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), aidoc_ooxml::OoxmlError>(())
//! ```

use aidoc_core::sanitize;
use aidoc_model::Section;
use log::debug;

use crate::error::Result;
use crate::package::{
    app_properties_xml, content_type, core_properties_xml, rel_type, Package, Relationship,
};
use crate::xml::escape_xml;

/// Style id of the topic paragraph
pub const STYLE_TITLE: &str = "Title";
/// Style id of section headings
pub const STYLE_HEADING: &str = "Heading1";
/// Style id of body paragraphs
pub const STYLE_BODY: &str = "Normal";

const NS_WORD: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Render a Word document for `topic` and `sections`
pub fn render_word(topic: &str, sections: &[Section]) -> Result<Vec<u8>> {
    DocxWriter::new().generate(topic, sections)
}

/// DOCX Writer for generating Word packages from sections
#[derive(Debug, Default)]
pub struct DocxWriter {
    /// XML output buffer for word/document.xml
    output: String,
    /// Creator recorded in docProps/core.xml
    author: Option<String>,
}

impl DocxWriter {
    /// Create a new DocxWriter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Generate the DOCX as bytes
    pub fn generate(mut self, topic: &str, sections: &[Section]) -> Result<Vec<u8>> {
        let author = self.author.take().unwrap_or_else(|| "aidoc".to_string());
        let document_xml = self.generate_document_xml(topic, sections);
        // Text is escaped, so every "<w:p>" is a paragraph start
        let paragraph_count = document_xml.matches("<w:p>").count();

        let mut package = Package::new();
        package.add_relationships(
            "_rels/.rels",
            &[
                Relationship::new(rel_type::OFFICE_DOCUMENT, "word/document.xml"),
                Relationship::new(rel_type::CORE_PROPERTIES, "docProps/core.xml"),
                Relationship::new(rel_type::EXTENDED_PROPERTIES, "docProps/app.xml"),
            ],
        );
        package.add_part(
            "docProps/app.xml",
            content_type::EXTENDED_PROPERTIES,
            app_properties_xml(&[("Paragraphs", paragraph_count.to_string())]),
        );
        package.add_part(
            "docProps/core.xml",
            content_type::CORE_PROPERTIES,
            core_properties_xml(topic, &author, None),
        );
        package.add_part("word/document.xml", content_type::WORD_DOCUMENT, document_xml);
        package.add_part("word/styles.xml", content_type::WORD_STYLES, styles_xml());
        package.add_relationships(
            "word/_rels/document.xml.rels",
            &[Relationship::new(rel_type::STYLES, "styles.xml")],
        );

        package.finish()
    }

    fn generate_document_xml(&mut self, topic: &str, sections: &[Section]) -> String {
        self.output.clear();
        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(&format!(
            "<w:document xmlns:w=\"{}\" xmlns:r=\"{}\">\n",
            NS_WORD, NS_RELATIONSHIPS
        ));
        self.output.push_str("<w:body>\n");

        self.generate_paragraph(STYLE_TITLE, topic);
        for section in sections {
            self.generate_section(section);
        }

        self.output.push_str("<w:sectPr/>\n");
        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        std::mem::take(&mut self.output)
    }

    fn generate_section(&mut self, section: &Section) {
        self.generate_paragraph(STYLE_HEADING, &section.title);

        let body = sanitize(&section.content);
        debug!(
            "Word section {} '{}': {} body lines",
            section.id,
            section.title,
            body.lines().count()
        );

        if body.is_empty() {
            // The body block is kept even without text
            self.generate_paragraph(STYLE_BODY, "");
            return;
        }
        for line in body.lines() {
            self.generate_paragraph(STYLE_BODY, line);
        }
    }

    fn generate_paragraph(&mut self, style: &str, text: &str) {
        self.output.push_str("<w:p>");
        self.output.push_str(&format!(
            "<w:pPr><w:pStyle w:val=\"{}\"/></w:pPr>",
            escape_xml(style)
        ));
        if !text.is_empty() {
            self.output.push_str(&format!(
                "<w:r><w:t xml:space=\"preserve\">{}</w:t></w:r>",
                escape_xml(text)
            ));
        }
        self.output.push_str("</w:p>\n");
    }
}

/// word/styles.xml with the three paragraph styles the writer uses
fn styles_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{ns}">
  <w:docDefaults>
    <w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/><w:sz w:val="22"/><w:lang w:val="en-US"/></w:rPr></w:rPrDefault>
    <w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="{body}">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="{title}">
    <w:name w:val="Title"/>
    <w:basedOn w:val="{body}"/>
    <w:next w:val="{body}"/>
    <w:qFormat/>
    <w:pPr><w:spacing w:after="240"/></w:pPr>
    <w:rPr><w:rFonts w:ascii="Calibri Light" w:hAnsi="Calibri Light"/><w:kern w:val="28"/><w:sz w:val="56"/></w:rPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="{heading}">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="{body}"/>
    <w:next w:val="{body}"/>
    <w:qFormat/>
    <w:pPr><w:keepNext/><w:spacing w:before="360" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr>
    <w:rPr><w:b/><w:color w:val="2F5496"/><w:sz w:val="32"/></w:rPr>
  </w:style>
</w:styles>"#,
        ns = NS_WORD,
        body = STYLE_BODY,
        title = STYLE_TITLE,
        heading = STYLE_HEADING
    )
}
