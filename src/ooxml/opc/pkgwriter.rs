//! Package writer for OPC packages.
//!
//! Serializes an [`OpcPackage`] into its ZIP form: `[Content_Types].xml`
//! first, then the package relationships, then every part followed by its
//! own `.rels` part when it has relationships. A package with a relationship
//! to a missing part is refused before anything is written.

use crate::common::xml::push_escaped;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::package::OpcPackage;
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgWriter;
use std::collections::BTreeMap;
use std::path::Path;

/// Package writer that serializes an OPC package to a ZIP file.
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file.
    ///
    /// The archive is built completely in memory first, so the file is only
    /// created once serialization has succeeded.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path.as_ref(), &bytes)?;
        log::debug!(
            "wrote {} bytes to {}",
            bytes.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        Self::check_targets(package)?;
        let mut phys_writer = PhysPkgWriter::new();

        Self::write_content_types(&mut phys_writer, package)?;
        Self::write_pkg_rels(&mut phys_writer, package)?;
        Self::write_parts(&mut phys_writer, package)?;

        log::trace!("package has {} zip members", phys_writer.len());
        phys_writer.finish()
    }

    /// Every relationship, package-level or part-level, must resolve to a
    /// part in the package.
    fn check_targets(package: &OpcPackage) -> Result<()> {
        let sources = std::iter::once((PACKAGE_URI, package.rels())).chain(
            package
                .iter_parts()
                .map(|part| (part.partname().as_str(), part.rels())),
        );

        for (source, rels) in sources {
            for rel in rels.iter() {
                let target = PackURI::from_rel_ref(rels.base_uri(), rel.target_ref())?;
                if !package.contains(&target) {
                    return Err(OpcError::DanglingRelationship {
                        source_part: source.to_string(),
                        r_id: rel.r_id().to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Write the [Content_Types].xml part.
    fn write_content_types(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        let cti = ContentTypesItem::from_package(package);
        let content_types_uri = PackURI::new(CONTENT_TYPES_URI)?;
        phys_writer.write(&content_types_uri, cti.to_xml().as_bytes())
    }

    /// Write package-level relationships.
    fn write_pkg_rels(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        let rels_uri = PackURI::new(PACKAGE_URI)?.rels_uri()?;
        phys_writer.write(&rels_uri, package.rels().to_xml().as_bytes())
    }

    /// Write all parts and their relationships.
    fn write_parts(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        for part in package.iter_parts() {
            phys_writer.write(part.partname(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_uri = part.partname().rels_uri()?;
                phys_writer.write(&rels_uri, part.rels().to_xml().as_bytes())?;
            }
        }

        Ok(())
    }
}

/// Helper for building [Content_Types].xml content.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();
        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.content_type());
        }
        cti
    }

    /// Record a part's content type, as a Default when the extension already
    /// maps to it and as an Override otherwise.
    fn add_content_type(&mut self, partname: &PackURI, content_type: &str) {
        let ext = partname.ext();
        if self.defaults.get(ext).map(String::as_str) == Some(content_type) {
            return;
        }
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.overrides.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        for (ext, content_type) in &self.defaults {
            xml.push_str(r#"<Default Extension=""#);
            push_escaped(&mut xml, ext);
            xml.push_str(r#"" ContentType=""#);
            push_escaped(&mut xml, content_type);
            xml.push_str(r#""/>"#);
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(r#"<Override PartName=""#);
            push_escaped(&mut xml, partname);
            xml.push_str(r#"" ContentType=""#);
            push_escaped(&mut xml, content_type);
            xml.push_str(r#""/>"#);
        }

        xml.push_str("</Types>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use crate::ooxml::opc::part::{BlobPart, Part};
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::new();
        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        cti.add_content_type(&slide, ct::PML_SLIDE);
        let plain = PackURI::new("/customXml/item1.xml").unwrap();
        cti.add_content_type(&plain, ct::XML);

        let xml = cti.to_xml();
        assert!(xml.contains(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
        assert!(!xml.contains("/customXml/item1.xml"));
    }

    #[test]
    fn test_dangling_relationship_is_refused() {
        let mut pkg = OpcPackage::new();
        let slide_uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        let layout_uri = PackURI::new("/ppt/slideLayouts/slideLayout7.xml").unwrap();

        let mut slide = BlobPart::from_xml(slide_uri.clone(), ct::PML_SLIDE, "<p:sld/>".to_string());
        slide.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        pkg.add_part(Box::new(slide));
        pkg.relate_to(&slide_uri, rt::OFFICE_DOCUMENT);

        match pkg.to_bytes() {
            Err(OpcError::DanglingRelationship {
                source_part,
                r_id,
                target,
            }) => {
                assert_eq!(source_part, "/ppt/slides/slide1.xml");
                assert_eq!(r_id, "rId1");
                assert_eq!(target, "/ppt/slideLayouts/slideLayout7.xml");
            },
            other => panic!("expected a dangling relationship, got {:?}", other.map(|b| b.len())),
        }

        // The package-level relationship is checked too
        let mut pkg = OpcPackage::new();
        pkg.relate_to(&slide_uri, rt::OFFICE_DOCUMENT);
        assert!(matches!(
            pkg.to_bytes(),
            Err(OpcError::DanglingRelationship { ref source_part, .. }) if source_part == "/"
        ));
    }

    #[test]
    fn test_to_bytes_layout() {
        let mut pkg = OpcPackage::new();
        let pres_uri = PackURI::new("/ppt/presentation.xml").unwrap();
        let slide_uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();

        let mut pres = BlobPart::from_xml(
            pres_uri.clone(),
            ct::PML_PRESENTATION_MAIN,
            "<p:presentation/>".to_string(),
        );
        pres.relate_to(&slide_uri, rt::SLIDE);
        pkg.add_part(Box::new(pres));
        pkg.add_part(Box::new(BlobPart::from_xml(
            slide_uri,
            ct::PML_SLIDE,
            "<p:sld/>".to_string(),
        )));
        pkg.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);

        let bytes = pkg.to_bytes().unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "[Content_Types].xml",
                "_rels/.rels",
                "ppt/presentation.xml",
                "ppt/_rels/presentation.xml.rels",
                "ppt/slides/slide1.xml",
            ]
        );

        let mut rels = String::new();
        archive
            .by_name("ppt/_rels/presentation.xml.rels")
            .unwrap()
            .read_to_string(&mut rels)
            .unwrap();
        assert!(rels.contains(r#"Target="slides/slide1.xml""#));
    }
}
