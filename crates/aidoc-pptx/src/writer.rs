//! PPTX generation from slide data.
//!
//! Writes a complete PresentationML package: one master, one blank layout
//! and absolutely positioned shapes on every slide. The package theme
//! carries the deck palette so that editors offer matching colors.

use crate::constants::*;
use crate::error::Result;
use crate::slide::{Bar, Gradient, Shape, Slide, TextBox, TextParagraph};
use aidoc_core::theme::{default_theme, Theme};
use aidoc_ooxml::package::{
    app_properties_xml, content_type, core_properties_xml, rel_type, Package, Relationship,
};
use aidoc_ooxml::xml::escape_xml;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Shape tree root shared by master, layout and slides
const GROUP_ROOT: &str = r#"      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
"#;

const MASTER_PART: &str = "ppt/slideMasters/slideMaster1.xml";
const LAYOUT_PART: &str = "ppt/slideLayouts/slideLayout1.xml";
const THEME_PART: &str = "ppt/theme/theme1.xml";

/// PPTX document writer
#[derive(Debug)]
pub struct PptxWriter {
    /// Language tag written on every run
    locale: String,

    /// Slides to render
    slides: Vec<Slide>,

    /// Presentation title
    title: Option<String>,

    /// Presentation author
    author: Option<String>,

    /// Palette for the package theme
    theme: Theme,
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new("en-US")
    }
}

impl PptxWriter {
    /// Create a new PPTX writer for a locale
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            slides: Vec::new(),
            title: None,
            author: None,
            theme: *default_theme(),
        }
    }

    /// Set the presentation title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Use a theme's colors for the package color scheme
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.theme = *theme;
        self
    }

    /// Add a slide
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Number of slides queued
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Generate the PPTX as bytes
    pub fn generate(&self) -> Result<Vec<u8>> {
        let mut package = Package::new();
        let author = self.author.as_deref().unwrap_or("aidoc");
        let title = self.title.as_deref().unwrap_or("Presentation");

        package.add_relationships(
            "_rels/.rels",
            &[
                Relationship::new(rel_type::OFFICE_DOCUMENT, "ppt/presentation.xml"),
                Relationship::new(rel_type::CORE_PROPERTIES, "docProps/core.xml"),
                Relationship::new(rel_type::EXTENDED_PROPERTIES, "docProps/app.xml"),
            ],
        );
        package.add_part(
            "docProps/app.xml",
            content_type::EXTENDED_PROPERTIES,
            app_properties_xml(&[
                ("PresentationFormat", "Widescreen".to_string()),
                ("Slides", self.slides.len().to_string()),
            ]),
        );
        package.add_part(
            "docProps/core.xml",
            content_type::CORE_PROPERTIES,
            core_properties_xml(title, author, Some(&self.locale)),
        );

        // rId1 master, rId2 presProps, rId3 theme, then one per slide
        let slide_targets: Vec<String> = (1..=self.slides.len())
            .map(|n| format!("slides/slide{}.xml", n))
            .collect();
        let mut presentation_rels = vec![
            Relationship::new(rel_type::SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
            Relationship::new(rel_type::PRES_PROPS, "presProps.xml"),
            Relationship::new(rel_type::THEME, "theme/theme1.xml"),
        ];
        presentation_rels.extend(
            slide_targets
                .iter()
                .map(|target| Relationship::new(rel_type::SLIDE, target)),
        );
        presentation_rels.push(Relationship::new(rel_type::VIEW_PROPS, "viewProps.xml"));
        presentation_rels.push(Relationship::new(rel_type::TABLE_STYLES, "tableStyles.xml"));

        package.add_part(
            "ppt/presentation.xml",
            content_type::PRESENTATION,
            self.presentation_xml(),
        );
        package.add_relationships("ppt/_rels/presentation.xml.rels", &presentation_rels);

        package.add_part(
            "ppt/presProps.xml",
            content_type::PRES_PROPS,
            format!("{}\n<p:presentationPr {}/>", XML_DECL, namespaces()),
        );
        package.add_part(
            "ppt/viewProps.xml",
            content_type::VIEW_PROPS,
            format!(
                "{}\n<p:viewPr {}><p:normalViewPr><p:restoredLeft sz=\"15620\"/><p:restoredTop sz=\"94660\"/></p:normalViewPr></p:viewPr>",
                XML_DECL,
                namespaces()
            ),
        );
        package.add_part(
            "ppt/tableStyles.xml",
            content_type::TABLE_STYLES,
            format!(
                "{}\n<a:tblStyleLst xmlns:a=\"{}\" def=\"{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}\"/>",
                XML_DECL, NS_DRAWING
            ),
        );
        package.add_part(THEME_PART, content_type::THEME, theme_xml(&self.theme));

        package.add_part(MASTER_PART, content_type::SLIDE_MASTER, master_xml());
        package.add_relationships(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &[
                Relationship::new(rel_type::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"),
                Relationship::new(rel_type::THEME, "../theme/theme1.xml"),
            ],
        );
        package.add_part(LAYOUT_PART, content_type::SLIDE_LAYOUT, layout_xml());
        package.add_relationships(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            &[Relationship::new(
                rel_type::SLIDE_MASTER,
                "../slideMasters/slideMaster1.xml",
            )],
        );

        let layout_rel = [Relationship::new(
            rel_type::SLIDE_LAYOUT,
            "../slideLayouts/slideLayout1.xml",
        )];
        for (slide, n) in self.slides.iter().zip(1usize..) {
            package.add_part(
                format!("ppt/slides/slide{}.xml", n),
                content_type::SLIDE,
                self.generate_slide_xml(slide),
            );
            package.add_relationships(format!("ppt/slides/_rels/slide{}.xml.rels", n), &layout_rel);
        }

        Ok(package.finish()?)
    }

    /// ppt/presentation.xml
    fn presentation_xml(&self) -> String {
        let slide_ids: String = (1..=self.slides.len())
            .map(|n| format!("<p:sldId id=\"{}\" r:id=\"rId{}\"/>", 255 + n, n + 3))
            .collect();

        // notesSz is portrait, so width and height swap
        format!(
            "{decl}\n<p:presentation {ns} saveSubsetFonts=\"1\">\
             <p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/></p:sldMasterIdLst>\
             <p:sldIdLst>{ids}</p:sldIdLst>\
             <p:sldSz cx=\"{w}\" cy=\"{h}\"/>\
             <p:notesSz cx=\"{h}\" cy=\"{w}\"/>\
             </p:presentation>",
            decl = XML_DECL,
            ns = namespaces(),
            ids = slide_ids,
            w = WIDESCREEN_SLIDE_WIDTH_EMU,
            h = WIDESCREEN_SLIDE_HEIGHT_EMU,
        )
    }

    /// Generate slide XML content
    fn generate_slide_xml(&self, slide: &Slide) -> String {
        let background = slide
            .background
            .as_ref()
            .map(generate_background)
            .unwrap_or_default();

        let mut shapes = String::new();
        // id 1 is the group shape
        for (shape, id) in slide.shapes.iter().zip(2u32..) {
            match shape {
                Shape::Text(text_box) => shapes.push_str(&self.generate_text_shape(id, text_box)),
                Shape::Bar(bar) => shapes.push_str(&generate_bar_shape(id, bar)),
            }
        }

        format!(
            "{}\n<p:sld {}>\n  <p:cSld>\n{}    <p:spTree>\n{}{}    </p:spTree>\n  </p:cSld>\n  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\n</p:sld>",
            XML_DECL,
            namespaces(),
            background,
            GROUP_ROOT,
            shapes
        )
    }

    /// Generate a text box shape
    fn generate_text_shape(&self, id: u32, text_box: &TextBox) -> String {
        let frame = text_box.frame;
        let wrap = if text_box.wrap { "square" } else { "none" };

        let mut paragraphs = String::new();
        for paragraph in &text_box.paragraphs {
            paragraphs.push_str(&self.generate_paragraph(paragraph));
        }

        format!(
            r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="{}" name="{}"/>
          <p:cNvSpPr txBox="1"/>
          <p:nvPr/>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm>
            <a:off x="{}" y="{}"/>
            <a:ext cx="{}" cy="{}"/>
          </a:xfrm>
          <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
          <a:noFill/>
        </p:spPr>
        <p:txBody>
          <a:bodyPr wrap="{}" rtlCol="0"/>
          <a:lstStyle/>
{}        </p:txBody>
      </p:sp>
"#,
            id,
            escape_xml(&text_box.name),
            frame.x,
            frame.y,
            frame.cx,
            frame.cy,
            wrap,
            paragraphs
        )
    }

    /// Generate one paragraph with a single run
    fn generate_paragraph(&self, paragraph: &TextParagraph) -> String {
        let mut ppr = String::new();
        if let Some(line_spacing) = paragraph.line_spacing {
            ppr.push_str(&format!(
                "<a:lnSpc><a:spcPct val=\"{}\"/></a:lnSpc>",
                line_spacing * PERCENT_UNITS
            ));
        }
        if let Some(spacing) = paragraph.spacing {
            let points = spacing * CENTIPOINTS_PER_POINT;
            ppr.push_str(&format!(
                "<a:spcBef><a:spcPts val=\"{}\"/></a:spcBef><a:spcAft><a:spcPts val=\"{}\"/></a:spcAft>",
                points, points
            ));
        }

        let indent = match paragraph.bullet {
            Some(bullet) => {
                ppr.push_str(&format!(
                    "<a:buFont typeface=\"Arial\"/><a:buChar char=\"{}\"/>",
                    escape_xml(&bullet.to_string())
                ));
                r#" marL="342900" indent="-342900""#
            }
            None => {
                ppr.push_str("<a:buNone/>");
                ""
            }
        };

        let bold = if paragraph.bold { r#" b="1""# } else { "" };

        format!(
            r#"          <a:p>
            <a:pPr algn="{}"{}>{}</a:pPr>
            <a:r>
              <a:rPr lang="{}" sz="{}"{} dirty="0"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:rPr>
              <a:t>{}</a:t>
            </a:r>
          </a:p>
"#,
            paragraph.align.as_ooxml(),
            indent,
            ppr,
            escape_xml(&self.locale),
            paragraph.size * CENTIPOINTS_PER_POINT,
            bold,
            paragraph.color.hex(),
            escape_xml(&paragraph.text)
        )
    }
}

/// `xmlns` declarations for PresentationML parts
fn namespaces() -> String {
    format!(
        "xmlns:a=\"{}\" xmlns:r=\"{}\" xmlns:p=\"{}\"",
        NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION
    )
}

/// Master with a plain background and the default color map
fn master_xml() -> String {
    format!(
        "{}\n<p:sldMaster {}>\n  <p:cSld>\n    <p:bg><p:bgRef idx=\"1001\"><a:schemeClr val=\"bg1\"/></p:bgRef></p:bg>\n    <p:spTree>\n{}    </p:spTree>\n  </p:cSld>\n  \
         <p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" accent1=\"accent1\" accent2=\"accent2\" accent3=\"accent3\" accent4=\"accent4\" accent5=\"accent5\" accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>\n  \
         <p:sldLayoutIdLst><p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/></p:sldLayoutIdLst>\n</p:sldMaster>",
        XML_DECL,
        namespaces(),
        GROUP_ROOT
    )
}

fn layout_xml() -> String {
    format!(
        "{}\n<p:sldLayout {} type=\"blank\" preserve=\"1\">\n  <p:cSld name=\"Blank\">\n    <p:spTree>\n{}    </p:spTree>\n  </p:cSld>\n  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\n</p:sldLayout>",
        XML_DECL,
        namespaces(),
        GROUP_ROOT
    )
}

/// Package theme whose color scheme follows the deck palette
fn theme_xml(theme: &Theme) -> String {
    let palette = [
        ("dk1", theme.body_color),
        ("lt1", aidoc_model::Rgb(255, 255, 255)),
        ("dk2", theme.title_color),
        ("lt2", theme.bg_start),
        ("accent1", theme.accent_color),
        ("accent2", theme.title_color),
        ("accent3", theme.bg_end),
        ("accent4", theme.body_color),
        ("accent5", theme.bg_start),
        ("accent6", theme.accent_color),
        ("hlink", theme.title_color),
        ("folHlink", theme.accent_color),
    ];
    let colors: String = palette
        .iter()
        .map(|(slot, color)| {
            format!(
                "      <a:{0}><a:srgbClr val=\"{1}\"/></a:{0}>\n",
                slot,
                color.hex()
            )
        })
        .collect();

    let fill = "<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>";
    let lines: String = [6350, 12700, 19050]
        .iter()
        .map(|w| format!("<a:ln w=\"{}\">{}</a:ln>", w, fill))
        .collect();
    let fonts = |latin: &str| {
        format!(
            "<a:latin typeface=\"{}\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/>",
            latin
        )
    };

    format!(
        "{decl}\n<a:theme xmlns:a=\"{ns}\" name=\"{name}\">\n  <a:themeElements>\n    <a:clrScheme name=\"{name}\">\n{colors}    </a:clrScheme>\n    \
         <a:fontScheme name=\"aidoc\"><a:majorFont>{major}</a:majorFont><a:minorFont>{minor}</a:minorFont></a:fontScheme>\n    \
         <a:fmtScheme name=\"aidoc\"><a:fillStyleLst>{fills}</a:fillStyleLst><a:lnStyleLst>{lines}</a:lnStyleLst>\
         <a:effectStyleLst>{effects}</a:effectStyleLst><a:bgFillStyleLst>{fills}</a:bgFillStyleLst></a:fmtScheme>\n  \
         </a:themeElements>\n</a:theme>",
        decl = XML_DECL,
        ns = NS_DRAWING,
        name = escape_xml(theme.name),
        colors = colors,
        major = fonts("Calibri Light"),
        minor = fonts("Calibri"),
        fills = fill.repeat(3),
        lines = lines,
        effects = "<a:effectStyle><a:effectLst/></a:effectStyle>".repeat(3),
    )
}

/// Generate a gradient slide background
fn generate_background(gradient: &Gradient) -> String {
    format!(
        r#"    <p:bg>
      <p:bgPr>
        <a:gradFill rotWithShape="1">
          <a:gsLst>
            <a:gs pos="0"><a:srgbClr val="{}"/></a:gs>
            <a:gs pos="100000"><a:srgbClr val="{}"/></a:gs>
          </a:gsLst>
          <a:lin ang="{}" scaled="0"/>
        </a:gradFill>
        <a:effectLst/>
      </p:bgPr>
    </p:bg>
"#,
        gradient.start.hex(),
        gradient.end.hex(),
        gradient.angle * ANGLE_UNITS_PER_DEGREE
    )
}

/// Generate a filled rectangle without text
fn generate_bar_shape(id: u32, bar: &Bar) -> String {
    let frame = bar.frame;
    format!(
        r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="{}" name="{}"/>
          <p:cNvSpPr/>
          <p:nvPr/>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm>
            <a:off x="{}" y="{}"/>
            <a:ext cx="{}" cy="{}"/>
          </a:xfrm>
          <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
          <a:solidFill><a:srgbClr val="{}"/></a:solidFill>
          <a:ln><a:noFill/></a:ln>
        </p:spPr>
      </p:sp>
"#,
        id,
        escape_xml(&bar.name),
        frame.x,
        frame.y,
        frame.cx,
        frame.cy,
        bar.color.hex()
    )
}
