/// Slide types and implementation for PPTX presentations.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;

use super::super::backgrounds::SlideBackground;
use super::super::template::push_group_shape_header;
use super::shape::{AutoShapeType, MutableShape};

/// A mutable slide in a presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableSlide {
    /// Slide ID written to `p:sldIdLst`
    pub(crate) slide_id: u32,
    /// Index into the presentation's slide layouts
    pub(crate) layout_index: usize,
    pub(crate) background: SlideBackground,
    /// Shapes in z-order
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32, layout_index: usize) -> Self {
        Self {
            slide_id,
            layout_index,
            background: SlideBackground::None,
            shapes: Vec::new(),
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn layout_index(&self) -> usize {
        self.layout_index
    }

    /// Set a background for the slide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kickoff_deck::ooxml::pptx::{MutablePresentation, RgbColor, SlideBackground};
    ///
    /// let mut pres = MutablePresentation::new();
    /// let slide = pres.add_slide(6).unwrap();
    /// slide.set_background(SlideBackground::solid(RgbColor::new(10, 25, 50)));
    /// ```
    pub fn set_background(&mut self, background: SlideBackground) -> &mut Self {
        self.background = background;
        self
    }

    pub fn background(&self) -> SlideBackground {
        self.background
    }

    /// Next free shape ID. ID 1 belongs to the shape tree itself.
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 2) as u32
    }

    /// Add an empty text box and return it for filling in.
    pub fn add_text_box(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut MutableShape {
        let shape = MutableShape::new_text_box(self.next_shape_id(), x, y, width, height);
        self.push_shape(shape)
    }

    /// Add a preset-geometry shape.
    pub fn add_auto_shape(
        &mut self,
        kind: AutoShapeType,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    ) -> &mut MutableShape {
        let shape = MutableShape::new_auto_shape(self.next_shape_id(), kind, x, y, width, height);
        self.push_shape(shape)
    }

    pub fn add_rectangle(&mut self, x: i64, y: i64, width: i64, height: i64) -> &mut MutableShape {
        self.add_auto_shape(AutoShapeType::Rectangle, x, y, width, height)
    }

    fn push_shape(&mut self, shape: MutableShape) -> &mut MutableShape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<p:sld xmlns:a=""#);
        xml.push_str(namespace::DML_MAIN);
        xml.push_str(r#"" xmlns:r=""#);
        xml.push_str(namespace::OFC_RELATIONSHIPS);
        xml.push_str(r#"" xmlns:p=""#);
        xml.push_str(namespace::PML_MAIN);
        xml.push_str(r#"">"#);

        xml.push_str("<p:cSld>");
        // p:bg must precede p:spTree
        self.background.write_xml(&mut xml);

        xml.push_str("<p:spTree>");
        push_group_shape_header(&mut xml);
        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }
        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");

        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}
