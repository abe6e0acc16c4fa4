use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;
/// Open Packaging Convention (OPC) objects related to package parts.
///
/// Parts are the fundamental units of content in an OPC package, each with a
/// unique partname, a content type and optional relationships.
use std::fmt;

/// Trait representing a part in an OPC package.
pub trait Part: fmt::Debug {
    /// Get the partname of this part.
    fn partname(&self) -> &PackURI;

    /// Get the content type of this part.
    fn content_type(&self) -> &str;

    /// Get the serialized content of this part.
    fn blob(&self) -> &[u8];

    /// Get the relationships for this part.
    fn rels(&self) -> &Relationships;

    /// Get mutable access to the relationships for this part.
    fn rels_mut(&mut self) -> &mut Relationships;

    /// Add or get a relationship to another part, returning its rId.
    fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        self.rels_mut().relate_to(target, reltype)
    }

    /// Get the target reference for a relationship ID.
    fn target_ref(&self, r_id: &str) -> Result<&str> {
        self.rels()
            .get(r_id)
            .map(|rel| rel.target_ref())
            .ok_or_else(|| OpcError::RelationshipNotFound(format!("rId: {}", r_id)))
    }
}

/// A part holding its serialized content as bytes.
///
/// Every part this crate writes is generated XML, so a single owned-bytes
/// part type covers the whole package.
pub struct BlobPart {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl BlobPart {
    /// Create a new part with no relationships.
    pub fn new(partname: PackURI, content_type: &str, blob: Vec<u8>) -> Self {
        let rels = Relationships::new(partname.base_uri().to_string());
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels,
        }
    }

    /// Create a part from generated XML text.
    pub fn from_xml(partname: PackURI, content_type: &str, xml: String) -> Self {
        Self::new(partname, content_type, xml.into_bytes())
    }

    /// Replace the part content.
    ///
    /// Used when a part's XML can only be generated after its relationships
    /// have been assigned ids.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }
}

impl fmt::Debug for BlobPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlobPart")
            .field("partname", &self.partname)
            .field("content_type", &self.content_type)
            .field("len", &self.blob.len())
            .field("rels", &self.rels.len())
            .finish()
    }
}

impl Part for BlobPart {
    fn partname(&self) -> &PackURI {
        &self.partname
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn blob(&self) -> &[u8] {
        &self.blob
    }

    fn rels(&self) -> &Relationships {
        &self.rels
    }

    fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }
}
