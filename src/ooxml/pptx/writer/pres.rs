/// Presentation writer for PPTX.
use crate::ooxml::common::{AppProperties, DocumentProperties};
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::{BlobPart, OpcPackage, PackURI, Part};
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::super::template::{self, SLIDE_LAYOUTS, SLIDE_MASTER_ID};
use super::slide::MutableSlide;

/// Slide IDs start here; lower values are reserved.
const FIRST_SLIDE_ID: u32 = 256;

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add slides, set dimensions and document metadata, and
/// to serialize the whole thing as a `.pptx` package.
#[derive(Debug, Clone)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    properties: DocumentProperties,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
            properties: DocumentProperties::default(),
        }
    }

    /// Names of the available slide layouts; `add_slide` takes an index
    /// into this list.
    pub fn slide_layouts(&self) -> impl Iterator<Item = &'static str> {
        SLIDE_LAYOUTS.iter().map(|(name, _)| *name)
    }

    /// Add a new slide based on the layout at `layout_index`.
    pub fn add_slide(&mut self, layout_index: usize) -> Result<&mut MutableSlide> {
        if layout_index >= SLIDE_LAYOUTS.len() {
            return Err(OoxmlError::InvalidLayout {
                index: layout_index,
                available: SLIDE_LAYOUTS.len(),
            });
        }

        let slide_id = FIRST_SLIDE_ID + self.slides.len() as u32;
        log::debug!(
            "adding slide {} on layout \"{}\"",
            self.slides.len() + 1,
            SLIDE_LAYOUTS[layout_index].0
        );
        self.slides.push(MutableSlide::new(slide_id, layout_index));
        let last = self.slides.len() - 1;
        Ok(&mut self.slides[last])
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the slide width in EMUs.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide height in EMUs.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.properties = properties;
    }

    /// PowerPoint's label for the slide size, recorded in app.xml.
    fn presentation_format(&self) -> &'static str {
        if self.slide_height == 0 {
            return "Custom";
        }
        let ratio = self.slide_width as f64 / self.slide_height as f64;
        if (ratio - 16.0 / 9.0).abs() < 0.01 {
            "On-screen Show (16:9)"
        } else if (ratio - 4.0 / 3.0).abs() < 0.01 {
            "On-screen Show (4:3)"
        } else {
            "Custom"
        }
    }

    /// Generate presentation.xml content.
    ///
    /// `slide_r_ids` are the presentation part's relationship IDs for its
    /// slides, in slide order.
    pub(crate) fn generate_presentation_xml(
        &self,
        master_r_id: &str,
        slide_r_ids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(1024 + slide_r_ids.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            namespace::DML_MAIN,
            namespace::OFC_RELATIONSHIPS,
            namespace::PML_MAIN
        )?;

        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID, master_r_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, r_id) in self.slides.iter().zip(slide_r_ids) {
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), r_id)?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble every part of the presentation into an OPC package.
    pub fn build_package(&self) -> Result<OpcPackage> {
        let mut package = OpcPackage::new();

        let pres_uri = PackURI::new("/ppt/presentation.xml")?;
        let master_uri = PackURI::new("/ppt/slideMasters/slideMaster1.xml")?;
        let theme_uri = PackURI::new("/ppt/theme/theme1.xml")?;
        let pres_props_uri = PackURI::new("/ppt/presProps.xml")?;
        let view_props_uri = PackURI::new("/ppt/viewProps.xml")?;
        let table_styles_uri = PackURI::new("/ppt/tableStyles.xml")?;
        let core_uri = PackURI::new("/docProps/core.xml")?;
        let app_uri = PackURI::new("/docProps/app.xml")?;

        let layout_uris = (1..=SLIDE_LAYOUTS.len())
            .map(|i| PackURI::indexed("/ppt/slideLayouts/slideLayout", i, "xml"))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let slide_uris = (1..=self.slides.len())
            .map(|i| PackURI::indexed("/ppt/slides/slide", i, "xml"))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        // Presentation part: relate first, the XML needs the rIds
        let mut pres_part = BlobPart::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_r_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        let slide_r_ids: Vec<String> = slide_uris
            .iter()
            .map(|uri| pres_part.relate_to(uri, rt::SLIDE))
            .collect();
        pres_part.relate_to(&pres_props_uri, rt::PRES_PROPS);
        pres_part.relate_to(&view_props_uri, rt::VIEW_PROPS);
        pres_part.relate_to(&theme_uri, rt::THEME);
        pres_part.relate_to(&table_styles_uri, rt::TABLE_STYLES);
        pres_part.set_blob(
            self.generate_presentation_xml(&master_r_id, &slide_r_ids)?
                .into_bytes(),
        );
        package.add_part(Box::new(pres_part));

        let mut master_part = BlobPart::new(master_uri.clone(), ct::PML_SLIDE_MASTER, Vec::new());
        let layout_r_ids: Vec<String> = layout_uris
            .iter()
            .map(|uri| master_part.relate_to(uri, rt::SLIDE_LAYOUT))
            .collect();
        master_part.relate_to(&theme_uri, rt::THEME);
        master_part.set_blob(template::slide_master_xml(&layout_r_ids).into_bytes());
        package.add_part(Box::new(master_part));

        for (uri, xml) in layout_uris.iter().zip(template::all_slide_layouts()) {
            let mut layout_part = BlobPart::from_xml(uri.clone(), ct::PML_SLIDE_LAYOUT, xml);
            layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
            package.add_part(Box::new(layout_part));
        }

        for (slide, uri) in self.slides.iter().zip(&slide_uris) {
            let layout_uri =
                layout_uris
                    .get(slide.layout_index())
                    .ok_or(OoxmlError::InvalidLayout {
                        index: slide.layout_index(),
                        available: layout_uris.len(),
                    })?;
            let mut slide_part = BlobPart::from_xml(uri.clone(), ct::PML_SLIDE, slide.to_xml()?);
            slide_part.relate_to(layout_uri, rt::SLIDE_LAYOUT);
            log::debug!("serialized {} ({} shapes)", uri, slide.shape_count());
            package.add_part(Box::new(slide_part));
        }

        package.add_part(Box::new(BlobPart::from_xml(
            theme_uri,
            ct::OFC_THEME,
            template::default_theme_xml(),
        )));
        package.add_part(Box::new(BlobPart::from_xml(
            pres_props_uri,
            ct::PML_PRES_PROPS,
            template::default_pres_props_xml(),
        )));
        package.add_part(Box::new(BlobPart::from_xml(
            view_props_uri,
            ct::PML_VIEW_PROPS,
            template::default_view_props_xml(),
        )));
        package.add_part(Box::new(BlobPart::from_xml(
            table_styles_uri,
            ct::PML_TABLE_STYLES,
            template::default_table_styles_xml(),
        )));

        let mut app = AppProperties::new(env!("CARGO_PKG_NAME"));
        app.presentation_format = Some(self.presentation_format().to_string());
        app.slides = self.slides.len();
        package.add_part(Box::new(BlobPart::from_xml(
            core_uri.clone(),
            ct::OPC_CORE_PROPERTIES,
            self.properties.to_xml(),
        )));
        package.add_part(Box::new(BlobPart::from_xml(
            app_uri.clone(),
            ct::OFC_EXTENDED_PROPERTIES,
            app.to_xml(),
        )));

        package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        log::debug!("package assembled with {} parts", package.part_count());
        Ok(package)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.build_package()?.to_bytes()?)
    }

    /// Serialize the presentation and write it to `path`.
    ///
    /// Nothing is written unless serialization succeeds.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.build_package()?.save(path)?;
        log::info!("saved {} slides to {}", self.slides.len(), path.display());
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::template::BLANK_LAYOUT_INDEX;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn read_member(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut out = String::new();
        archive.by_name(name).unwrap().read_to_string(&mut out).unwrap();
        out
    }

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 9144000);
        assert_eq!(pres.slide_height(), 6858000);
        assert_eq!(pres.slide_layouts().nth(BLANK_LAYOUT_INDEX), Some("Blank"));
    }

    #[test]
    fn test_add_slide_ids() {
        let mut pres = MutablePresentation::new();
        assert_eq!(pres.add_slide(6).unwrap().slide_id(), 256);
        assert_eq!(pres.add_slide(0).unwrap().slide_id(), 257);
        assert_eq!(pres.slide_count(), 2);
    }

    #[test]
    fn test_add_slide_invalid_layout() {
        let mut pres = MutablePresentation::new();
        let err = pres.add_slide(11).unwrap_err();
        assert!(matches!(
            err,
            OoxmlError::InvalidLayout {
                index: 11,
                available: 11
            }
        ));
        assert_eq!(pres.slide_count(), 0);
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(6).unwrap();
        pres.add_slide(6).unwrap();

        let xml = pres
            .generate_presentation_xml("rId1", &["rId2".to_string(), "rId3".to_string()])
            .unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
    }

    #[test]
    fn test_build_package_parts() {
        let mut pres = MutablePresentation::new();
        pres.add_slide(6).unwrap();

        let package = pres.build_package().unwrap();
        // presentation, master, 11 layouts, 1 slide, theme, 3 props parts, core, app
        assert_eq!(package.part_count(), 20);
        assert_eq!(
            package.main_document_part().unwrap().content_type(),
            ct::PML_PRESENTATION_MAIN
        );

        let slide = package
            .get_part(&PackURI::new("/ppt/slides/slide1.xml").unwrap())
            .unwrap();
        let layout_rel = slide.rels().part_with_reltype(rt::SLIDE_LAYOUT).unwrap();
        assert_eq!(layout_rel.target_ref(), "../slideLayouts/slideLayout7.xml");
    }

    #[test]
    fn test_to_bytes_app_properties() {
        let mut pres = MutablePresentation::new();
        pres.set_slide_width(12_192_000);
        pres.set_slide_height(6_858_000);
        pres.add_slide(6).unwrap();
        pres.add_slide(6).unwrap();

        let bytes = pres.to_bytes().unwrap();
        let app = read_member(&bytes, "docProps/app.xml");
        assert!(app.contains("<PresentationFormat>On-screen Show (16:9)</PresentationFormat>"));
        assert!(app.contains("<Slides>2</Slides>"));

        let rels = read_member(&bytes, "ppt/_rels/presentation.xml.rels");
        assert!(rels.contains(r#"Target="slideMasters/slideMaster1.xml""#));
        assert!(rels.contains(r#"Target="tableStyles.xml""#));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        let mut pres = MutablePresentation::new();
        pres.add_slide(6).unwrap();
        pres.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let content_types = read_member(&bytes, "[Content_Types].xml");
        assert!(content_types.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
        assert!(content_types.contains(r#"<Override PartName="/docProps/core.xml""#));
    }
}
