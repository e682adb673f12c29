//! Reading a produced deck back.
//!
//! [`SlideReader`] walks the slides of a `.pptx` in presentation order and
//! summarises what each one shows: named text boxes, filled bars, bullet
//! paragraphs and the background gradient.

use std::collections::HashMap;

use aidoc_ooxml::xml::get_attr;
use aidoc_ooxml::OoxmlArchive;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::constants::ANGLE_UNITS_PER_DEGREE;
use crate::error::{PptxError, Result};

/// Text of one named text box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeText {
    /// Shape name
    pub name: String,
    /// Paragraph texts in order
    pub paragraphs: Vec<String>,
}

/// A filled shape without text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSummary {
    /// Shape name
    pub name: String,
    /// Fill color as upper-case hex
    pub color: String,
}

/// Background gradient
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradientSummary {
    /// Stop colors in order, upper-case hex
    pub stops: Vec<String>,
    /// Direction in degrees
    pub angle: Option<u32>,
}

/// What one slide shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideSummary {
    /// Part path inside the package
    pub path: String,
    /// Text boxes in z-order
    pub texts: Vec<ShapeText>,
    /// Bars in z-order
    pub bars: Vec<BarSummary>,
    /// Text of every bulleted paragraph
    pub bullets: Vec<String>,
    /// Gradient background, if the slide has one
    pub background: Option<GradientSummary>,
}

impl SlideSummary {
    /// Text of the named box, paragraphs joined by newlines
    pub fn text(&self, name: &str) -> Option<String> {
        self.texts
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.paragraphs.join("\n"))
    }

    /// Whether a bar with this name is present
    pub fn has_bar(&self, name: &str) -> bool {
        self.bars.iter().any(|b| b.name == name)
    }
}

/// Reads slides out of a `.pptx` package
#[derive(Debug)]
pub struct SlideReader {
    archive: OoxmlArchive,
}

impl SlideReader {
    /// Read a presentation held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let archive = OoxmlArchive::from_bytes(bytes)?;
        if !archive.is_presentation() {
            return Err(PptxError::invalid_presentation(
                "ppt/presentation.xml not found",
            ));
        }
        Ok(Self { archive })
    }

    /// Slide part paths in presentation order
    pub fn slide_paths(&self) -> Result<Vec<String>> {
        let presentation = self.archive.require("ppt/presentation.xml")?;
        let rels = self.archive.require("ppt/_rels/presentation.xml.rels")?;

        let targets = parse_relationships(rels)?;
        let mut paths = Vec::new();
        for rel_id in parse_slide_ids(presentation)? {
            let target = targets.get(&rel_id).ok_or_else(|| {
                PptxError::invalid_presentation(format!("slide relationship {} not found", rel_id))
            })?;
            paths.push(resolve_target(target));
        }
        Ok(paths)
    }

    /// Summaries of every slide in presentation order
    pub fn slides(&self) -> Result<Vec<SlideSummary>> {
        self.slide_paths()?
            .into_iter()
            .map(|path| {
                let xml = self
                    .archive
                    .get(&path)
                    .ok_or_else(|| PptxError::missing_slide(&path))?;
                let mut summary = parse_slide(xml)?;
                summary.path = path;
                Ok(summary)
            })
            .collect()
    }
}

/// Relationship id to target
fn parse_relationships(xml: &[u8]) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut targets = HashMap::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e)
                if e.local_name().as_ref() == b"Relationship" =>
            {
                if let (Some(id), Some(target)) = (get_attr(e, b"Id"), get_attr(e, b"Target")) {
                    targets.insert(id, target);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(targets)
}

/// `r:id` of every `p:sldId`, in order
fn parse_slide_ids(xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut ids = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) if e.local_name().as_ref() == b"sldId" => {
                if let Some(id) = get_attr(e, b"r:id") {
                    ids.push(id);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(ids)
}

/// Presentation-relative target to package path
fn resolve_target(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("ppt/{}", target),
    }
}

#[derive(Default)]
struct ShapeBuilder {
    name: String,
    in_sp_pr: bool,
    fill: Option<String>,
    has_text_body: bool,
    paragraphs: Vec<String>,
}

#[derive(Default)]
struct ParagraphBuilder {
    text: String,
    bullet: bool,
}

#[derive(Default)]
struct SlideParser {
    summary: SlideSummary,
    in_bg: bool,
    shape: Option<ShapeBuilder>,
    paragraph: Option<ParagraphBuilder>,
    in_text: bool,
}

impl SlideParser {
    fn open(&mut self, e: &BytesStart, empty: bool) {
        match e.local_name().as_ref() {
            b"bg" => self.in_bg = !empty,
            b"gradFill" if self.in_bg => {
                self.summary.background = Some(GradientSummary::default());
            }
            b"lin" if self.in_bg => {
                if let Some(ref mut gradient) = self.summary.background {
                    gradient.angle = get_attr(e, b"ang")
                        .and_then(|a| a.parse::<u32>().ok())
                        .map(|a| a / ANGLE_UNITS_PER_DEGREE);
                }
            }
            b"srgbClr" => {
                let Some(val) = get_attr(e, b"val") else {
                    return;
                };
                if self.in_bg {
                    if let Some(ref mut gradient) = self.summary.background {
                        gradient.stops.push(val);
                    }
                } else if let Some(ref mut shape) = self.shape {
                    if shape.in_sp_pr && shape.fill.is_none() {
                        shape.fill = Some(val);
                    }
                }
            }
            b"sp" if !empty => self.shape = Some(ShapeBuilder::default()),
            b"cNvPr" => {
                if let Some(ref mut shape) = self.shape {
                    shape.name = get_attr(e, b"name").unwrap_or_default();
                }
            }
            b"spPr" if !empty => {
                if let Some(ref mut shape) = self.shape {
                    shape.in_sp_pr = true;
                }
            }
            b"txBody" => {
                if let Some(ref mut shape) = self.shape {
                    shape.has_text_body = true;
                }
            }
            b"p" => {
                if let Some(ref mut shape) = self.shape {
                    if empty {
                        shape.paragraphs.push(String::new());
                    } else {
                        self.paragraph = Some(ParagraphBuilder::default());
                    }
                }
            }
            b"buChar" => {
                if let Some(ref mut paragraph) = self.paragraph {
                    paragraph.bullet = true;
                }
            }
            b"t" if !empty => self.in_text = true,
            _ => {}
        }
    }

    fn close(&mut self, local_name: &[u8]) {
        match local_name {
            b"bg" => self.in_bg = false,
            b"spPr" => {
                if let Some(ref mut shape) = self.shape {
                    shape.in_sp_pr = false;
                }
            }
            b"t" => self.in_text = false,
            b"p" => {
                if let (Some(paragraph), Some(shape)) = (self.paragraph.take(), self.shape.as_mut()) {
                    if paragraph.bullet {
                        self.summary.bullets.push(paragraph.text.clone());
                    }
                    shape.paragraphs.push(paragraph.text);
                }
            }
            b"sp" => {
                if let Some(shape) = self.shape.take() {
                    if shape.has_text_body {
                        self.summary.texts.push(ShapeText {
                            name: shape.name,
                            paragraphs: shape.paragraphs,
                        });
                    } else if let Some(color) = shape.fill {
                        self.summary.bars.push(BarSummary {
                            name: shape.name,
                            color,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_text {
            if let Some(ref mut paragraph) = self.paragraph {
                paragraph.text.push_str(text);
            }
        }
    }
}

/// Summarise one slide part
fn parse_slide(xml: &[u8]) -> Result<SlideSummary> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut parser = SlideParser::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => parser.open(e, false),
            Event::Empty(ref e) => parser.open(e, true),
            Event::End(ref e) => parser.close(e.local_name().as_ref()),
            Event::Text(ref e) => parser.text(&e.unescape().unwrap_or_default()),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(parser.summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLIDE: &[u8] = br#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld>
    <p:bg><p:bgPr><a:gradFill><a:gsLst>
      <a:gs pos="0"><a:srgbClr val="303030"/></a:gs>
      <a:gs pos="100000"><a:srgbClr val="212121"/></a:gs>
    </a:gsLst><a:lin ang="2700000" scaled="0"/></a:gradFill></p:bgPr></p:bg>
    <p:spTree>
      <p:sp>
        <p:nvSpPr><p:cNvPr id="2" name="Title"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
        <p:spPr><a:noFill/></p:spPr>
        <p:txBody><a:bodyPr/><a:p><a:r><a:rPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill></a:rPr><a:t>R&amp;D</a:t></a:r></a:p></p:txBody>
      </p:sp>
      <p:sp>
        <p:nvSpPr><p:cNvPr id="3" name="Title Bar"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>
        <p:spPr><a:solidFill><a:srgbClr val="667EEA"/></a:solidFill><a:ln><a:noFill/></a:ln></p:spPr>
      </p:sp>
      <p:sp>
        <p:nvSpPr><p:cNvPr id="4" name="Body"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
        <p:spPr/>
        <p:txBody><a:bodyPr/>
          <a:p><a:pPr><a:buChar char="&#x2022;"/></a:pPr><a:r><a:t>First</a:t></a:r></a:p>
          <a:p><a:pPr><a:buChar char="&#x2022;"/></a:pPr><a:r><a:t>Second</a:t></a:r></a:p>
          <a:p><a:pPr><a:buNone/></a:pPr><a:r><a:t>Plain</a:t></a:r></a:p>
        </p:txBody>
      </p:sp>
    </p:spTree>
  </p:cSld>
</p:sld>"#;

    #[test]
    fn test_parse_slide() {
        let summary = parse_slide(SLIDE).unwrap();

        let background = summary.background.clone().unwrap();
        assert_eq!(background.stops, vec!["303030", "212121"]);
        assert_eq!(background.angle, Some(45));

        assert_eq!(summary.text("Title"), Some("R&D".to_string()));
        assert_eq!(summary.text("Body"), Some("First\nSecond\nPlain".to_string()));
        assert_eq!(summary.bullets, vec!["First", "Second"]);
        assert_eq!(
            summary.bars,
            vec![BarSummary {
                name: "Title Bar".to_string(),
                color: "667EEA".to_string()
            }]
        );
        assert!(summary.has_bar("Title Bar"));
        assert!(!summary.has_bar("Bottom Bar"));
    }

    #[test]
    fn test_parse_slide_without_background() {
        let summary = parse_slide(br#"<p:sld xmlns:p="urn:p"><p:cSld><p:spTree/></p:cSld></p:sld>"#)
            .unwrap();
        assert_eq!(summary, SlideSummary::default());
    }

    #[test]
    fn test_relationships_and_order() {
        let rels = br#"<Relationships xmlns="urn:r">
  <Relationship Id="rId4" Type="slide" Target="slides/slide2.xml"/>
  <Relationship Id="rId5" Type="slide" Target="/ppt/slides/slide1.xml"/>
</Relationships>"#;
        let targets = parse_relationships(rels).unwrap();
        assert_eq!(resolve_target(&targets["rId4"]), "ppt/slides/slide2.xml");
        assert_eq!(resolve_target(&targets["rId5"]), "ppt/slides/slide1.xml");

        let presentation = br#"<p:presentation xmlns:p="urn:p" xmlns:r="urn:r"><p:sldIdLst>
  <p:sldId id="256" r:id="rId5"/>
  <p:sldId id="257" r:id="rId4"/>
</p:sldIdLst></p:presentation>"#;
        assert_eq!(parse_slide_ids(presentation).unwrap(), vec!["rId5", "rId4"]);
    }

    #[test]
    fn test_not_a_presentation() {
        let bytes = aidoc_ooxml::render_word("Doc", &[]).unwrap();
        let err = SlideReader::from_bytes(&bytes).unwrap_err();
        assert_eq!(err.code(), "PPTX002");
    }
}
