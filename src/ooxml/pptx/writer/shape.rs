/// Shape types and implementation for PPTX presentations.
use crate::common::unit::{pt_to_centipoints, pt_to_emu_f64};
use crate::common::xml::{push_escaped, push_escaped_text};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::super::format::{LineFormat, RgbColor, TextAlignment, TextFormat, VerticalAnchor};

/// A paragraph of text inside a text frame.
///
/// A `\n` or vertical tab in the text is a line break within the paragraph
/// (`<a:br/>`), not a paragraph boundary. Other control characters are kept
/// in Office's `_xHHHH_` form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    text: String,
    format: TextFormat,
    alignment: Option<TextAlignment>,
    /// Space before the paragraph, in points
    space_before: Option<f64>,
    /// Space after the paragraph, in points
    space_after: Option<f64>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: TextFormat) -> Self {
        self.format = format;
        self
    }

    pub fn align(mut self, alignment: TextAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn space_before(mut self, pt: f64) -> Self {
        self.space_before = Some(pt);
        self
    }

    pub fn space_after(mut self, pt: f64) -> Self {
        self.space_after = Some(pt);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    pub fn alignment(&self) -> Option<TextAlignment> {
        self.alignment
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        if self.alignment.is_some() || self.space_before.is_some() || self.space_after.is_some() {
            xml.push_str("<a:pPr");
            if let Some(alignment) = self.alignment {
                write!(xml, r#" algn="{}""#, alignment.as_str())?;
            }
            xml.push('>');
            if let Some(pt) = self.space_before {
                write!(xml, r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#, pt_to_centipoints(pt))?;
            }
            if let Some(pt) = self.space_after {
                write!(xml, r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#, pt_to_centipoints(pt))?;
            }
            xml.push_str("</a:pPr>");
        }

        if !self.text.is_empty() {
            for (i, line) in self.text.split(['\n', '\u{0B}']).enumerate() {
                if i > 0 {
                    xml.push_str("<a:br>");
                    write_run_properties(xml, "a:rPr", &self.format)?;
                    xml.push_str("</a:br>");
                }
                if line.is_empty() {
                    continue;
                }
                xml.push_str("<a:r>");
                write_run_properties(xml, "a:rPr", &self.format)?;
                xml.push_str("<a:t>");
                push_escaped_text(xml, line);
                xml.push_str("</a:t>");
                xml.push_str("</a:r>");
            }
        }

        write_run_properties(xml, "a:endParaRPr", &self.format)?;
        xml.push_str("</a:p>");
        Ok(())
    }
}

/// Write `a:rPr`-shaped run properties under the given element name.
fn write_run_properties(xml: &mut String, tag: &str, format: &TextFormat) -> Result<()> {
    write!(xml, "<{}", tag)?;

    if let Some(size) = format.size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
    }
    if let Some(bold) = format.bold {
        write!(xml, r#" b="{}""#, u8::from(bold))?;
    }
    if let Some(italic) = format.italic {
        write!(xml, r#" i="{}""#, u8::from(italic))?;
    }
    if let Some(underline) = format.underline {
        xml.push_str(if underline { r#" u="sng""# } else { r#" u="none""# });
    }
    xml.push_str(r#" dirty="0""#);

    if format.color.is_none() && format.font.is_none() {
        xml.push_str("/>");
        return Ok(());
    }

    xml.push('>');
    if let Some(color) = format.color {
        write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)?;
    }
    if let Some(ref font) = format.font {
        xml.push_str(r#"<a:latin typeface=""#);
        push_escaped(xml, font);
        xml.push_str(r#""/><a:ea typeface=""#);
        push_escaped(xml, font);
        xml.push_str(r#""/>"#);
    }
    write!(xml, "</{}>", tag)?;
    Ok(())
}

/// The text body of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    paragraphs: Vec<Paragraph>,
    word_wrap: bool,
    anchor: Option<VerticalAnchor>,
    auto_fit: bool,
}

impl TextFrame {
    /// Frame for a text box: no wrapping, shape grows to fit the text.
    pub(crate) fn for_text_box() -> Self {
        Self {
            paragraphs: Vec::new(),
            word_wrap: false,
            anchor: None,
            auto_fit: true,
        }
    }

    /// Frame for an auto shape: wrapping, text centered vertically.
    pub(crate) fn for_auto_shape() -> Self {
        Self {
            paragraphs: Vec::new(),
            word_wrap: true,
            anchor: Some(VerticalAnchor::Middle),
            auto_fit: false,
        }
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn set_word_wrap(&mut self, word_wrap: bool) -> &mut Self {
        self.word_wrap = word_wrap;
        self
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn word_wrap(&self) -> bool {
        self.word_wrap
    }

    /// All paragraph text joined with newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:txBody>");
        write!(
            xml,
            r#"<a:bodyPr wrap="{}" rtlCol="0""#,
            if self.word_wrap { "square" } else { "none" }
        )?;
        if let Some(anchor) = self.anchor {
            write!(xml, r#" anchor="{}""#, anchor.as_str())?;
        }
        if self.auto_fit {
            xml.push_str("><a:spAutoFit/></a:bodyPr>");
        } else {
            xml.push_str("/>");
        }
        xml.push_str("<a:lstStyle/>");

        if self.paragraphs.is_empty() {
            // A text body needs at least one paragraph
            xml.push_str("<a:p/>");
        }
        for paragraph in &self.paragraphs {
            paragraph.write_xml(xml)?;
        }

        xml.push_str("</p:txBody>");
        Ok(())
    }
}

/// Preset geometry of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoShapeType {
    Rectangle,
    RoundedRectangle,
    Ellipse,
}

impl AutoShapeType {
    fn preset(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
            Self::Ellipse => "ellipse",
        }
    }

    fn base_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Ellipse => "Oval",
        }
    }
}

/// A shape on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShapeType {
    TextBox {
        frame: TextFrame,
    },
    AutoShape {
        kind: AutoShapeType,
        fill: Option<RgbColor>,
        line: LineFormat,
        frame: Option<TextFrame>,
    },
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            shape_id,
            x,
            y,
            width,
            height,
            shape_type: ShapeType::TextBox {
                frame: TextFrame::for_text_box(),
            },
        }
    }

    pub(crate) fn new_auto_shape(
        shape_id: u32,
        kind: AutoShapeType,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> Self {
        Self {
            shape_id,
            x,
            y,
            width,
            height,
            shape_type: ShapeType::AutoShape {
                kind,
                fill: None,
                line: LineFormat::Default,
                frame: None,
            },
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Display name, numbered like PowerPoint does ("TextBox 1", "Rectangle 2").
    pub fn name(&self) -> String {
        let base = match &self.shape_type {
            ShapeType::TextBox { .. } => "TextBox",
            ShapeType::AutoShape { kind, .. } => kind.base_name(),
        };
        format!("{} {}", base, self.shape_id.saturating_sub(1))
    }

    /// Position and size in EMU: `(x, y, width, height)`.
    pub fn geometry(&self) -> (i64, i64, i64, i64) {
        (self.x, self.y, self.width, self.height)
    }

    /// The shape's text frame, if it has one.
    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.shape_type {
            ShapeType::TextBox { frame } => Some(frame),
            ShapeType::AutoShape { frame, .. } => frame.as_ref(),
        }
    }

    /// The shape's text frame, created on first access for auto shapes.
    pub fn text_frame_mut(&mut self) -> &mut TextFrame {
        match &mut self.shape_type {
            ShapeType::TextBox { frame } => frame,
            ShapeType::AutoShape { frame, .. } => frame.get_or_insert_with(TextFrame::for_auto_shape),
        }
    }

    /// Builder method: append a paragraph to the text frame.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.text_frame_mut().add_paragraph(paragraph);
        self
    }

    /// Builder method: set word wrap on the text frame.
    pub fn word_wrap(&mut self, word_wrap: bool) -> &mut Self {
        self.text_frame_mut().set_word_wrap(word_wrap);
        self
    }

    /// Builder method: solid fill (auto shapes only).
    pub fn fill(&mut self, color: RgbColor) -> &mut Self {
        if let ShapeType::AutoShape { fill, .. } = &mut self.shape_type {
            *fill = Some(color);
        }
        self
    }

    /// Builder method: outline (auto shapes only).
    pub fn line(&mut self, format: LineFormat) -> &mut Self {
        if let ShapeType::AutoShape { line, .. } = &mut self.shape_type {
            *line = format;
        }
        self
    }

    pub fn fill_color(&self) -> Option<RgbColor> {
        match &self.shape_type {
            ShapeType::AutoShape { fill, .. } => *fill,
            ShapeType::TextBox { .. } => None,
        }
    }

    pub fn line_format(&self) -> Option<LineFormat> {
        match &self.shape_type {
            ShapeType::AutoShape { line, .. } => Some(*line),
            ShapeType::TextBox { .. } => None,
        }
    }

    /// Generate the `p:sp` XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(xml, r#"<p:cNvPr id="{}" name=""#, self.shape_id)?;
        push_escaped(xml, &self.name());
        xml.push_str(r#""/>"#);
        match self.shape_type {
            ShapeType::TextBox { .. } => xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#),
            ShapeType::AutoShape { .. } => xml.push_str("<p:cNvSpPr/>"),
        }
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.x, self.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.width, self.height)?;
        xml.push_str("</a:xfrm>");

        match &self.shape_type {
            ShapeType::TextBox { frame } => {
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");
                frame.write_xml(xml)?;
            },
            ShapeType::AutoShape {
                kind,
                fill,
                line,
                frame,
            } => {
                write!(xml, r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#, kind.preset())?;
                if let Some(color) = fill {
                    write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)?;
                }
                write_line(xml, line)?;
                xml.push_str("</p:spPr>");
                if let Some(frame) = frame {
                    frame.write_xml(xml)?;
                }
            },
        }

        xml.push_str("</p:sp>");
        Ok(())
    }
}

fn write_line(xml: &mut String, line: &LineFormat) -> Result<()> {
    match line {
        LineFormat::Default => {},
        LineFormat::NoLine => xml.push_str("<a:ln><a:noFill/></a:ln>"),
        LineFormat::Solid { color, width_pt } => {
            write!(
                xml,
                r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                pt_to_emu_f64(*width_pt),
                color
            )?;
        },
    }
    Ok(())
}
