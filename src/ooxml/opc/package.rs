/// In-memory OPC package.
///
/// OpcPackage owns the package-level relationships and every part, keyed by
/// partname. Parts are kept in partname order so serialization is
/// deterministic.
use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::pkgwriter::PackageWriter;
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug)]
pub struct OpcPackage {
    /// Package-level relationships (`/_rels/.rels`)
    rels: Relationships,

    /// All parts in the package, indexed by partname
    parts: BTreeMap<PackURI, Box<dyn Part>>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: BTreeMap::new(),
        }
    }

    /// Add a part to the package, replacing any part with the same partname.
    pub fn add_part(&mut self, part: Box<dyn Part>) {
        let partname = part.partname().clone();
        log::trace!("adding part {}", partname);
        self.parts.insert(partname, part);
    }

    /// Get a part by its partname.
    pub fn get_part(&self, partname: &PackURI) -> Result<&dyn Part> {
        self.parts
            .get(partname)
            .map(|b| &**b as &dyn Part)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Check whether a part exists.
    pub fn contains(&self, partname: &PackURI) -> bool {
        self.parts.contains_key(partname)
    }

    /// Get the part the package-level officeDocument relationship points at.
    ///
    /// For a presentation this is `/ppt/presentation.xml`.
    pub fn main_document_part(&self) -> Result<&dyn Part> {
        let rel = self.rels.part_with_reltype(relationship_type::OFFICE_DOCUMENT)?;
        let partname = PackURI::new(format!("/{}", rel.target_ref()))?;
        self.get_part(&partname)
    }

    /// Iterate all parts in partname order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.values().map(|b| &**b as &dyn Part)
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part and return the relationship ID.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels.relate_to(target, reltype)
    }

    /// Serialize the package to ZIP bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }

    /// Serialize and write the package to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, self)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::content_type as ct;
    use crate::ooxml::opc::part::BlobPart;

    fn pres_part() -> Box<dyn Part> {
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        Box::new(BlobPart::from_xml(
            uri,
            ct::PML_PRESENTATION_MAIN,
            "<p:presentation/>".to_string(),
        ))
    }

    #[test]
    fn test_main_document_part() {
        let mut pkg = OpcPackage::new();
        let part = pres_part();
        let uri = part.partname().clone();
        pkg.add_part(part);
        let r_id = pkg.relate_to(&uri, relationship_type::OFFICE_DOCUMENT);

        assert_eq!(r_id, "rId1");
        assert_eq!(pkg.rels().get("rId1").unwrap().target_ref(), "ppt/presentation.xml");
        assert_eq!(
            pkg.main_document_part().unwrap().content_type(),
            ct::PML_PRESENTATION_MAIN
        );
    }

    #[test]
    fn test_parts_in_partname_order() {
        let mut pkg = OpcPackage::new();
        for name in ["/ppt/slides/slide2.xml", "/docProps/app.xml", "/ppt/slides/slide1.xml"] {
            let uri = PackURI::new(name).unwrap();
            pkg.add_part(Box::new(BlobPart::new(uri, ct::PML_SLIDE, Vec::new())));
        }

        let names: Vec<&str> = pkg.iter_parts().map(|p| p.partname().as_str()).collect();
        assert_eq!(
            names,
            ["/docProps/app.xml", "/ppt/slides/slide1.xml", "/ppt/slides/slide2.xml"]
        );
    }

    #[test]
    fn test_missing_part() {
        let pkg = OpcPackage::new();
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        assert!(!pkg.contains(&uri));
        assert!(matches!(pkg.get_part(&uri), Err(OpcError::PartNotFound(_))));
        assert!(pkg.main_document_part().is_err());
    }
}
