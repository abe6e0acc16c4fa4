use crate::common::xml::push_escaped;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
/// Relationship-related objects for OPC packages.
///
/// A part (or the package itself) reaches every other part through
/// relationships stored in its `.rels` companion part.
use std::collections::HashMap;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source's base URI
    target_ref: String,
}

impl Relationship {
    pub fn new(r_id: String, reltype: String, target_ref: String) -> Self {
        Self {
            r_id,
            reltype,
            target_ref,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Numeric part of the rId, used for ordering. Non-standard ids sort last.
    fn ordinal(&self) -> u32 {
        parse_r_id(&self.r_id).unwrap_or(u32::MAX)
    }
}

fn parse_r_id(r_id: &str) -> Option<u32> {
    if r_id.len() > 3 && r_id.starts_with("rId") {
        atoi_simd::parse_pos::<u32, false>(&r_id.as_bytes()[3..]).ok()
    } else {
        None
    }
}

/// Collection of relationships from a single source.
#[derive(Debug)]
pub struct Relationships {
    /// Base URI the target references are relative to
    base_uri: String,

    /// Map of relationship ID to Relationship
    rels: HashMap<String, Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection for a source at `base_uri`.
    pub fn new(base_uri: String) -> Self {
        Self {
            base_uri,
            rels: HashMap::new(),
        }
    }

    /// Base URI of the source part.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Add a relationship with an explicit rId.
    ///
    /// Fails if the rId is already taken.
    pub fn add_relationship(
        &mut self,
        reltype: &str,
        target_ref: &str,
        r_id: &str,
    ) -> Result<&Relationship> {
        if self.rels.contains_key(r_id) {
            return Err(OpcError::InvalidRelationship(format!(
                "duplicate relationship id '{}' in {}",
                r_id, self.base_uri
            )));
        }
        let rel = Relationship::new(r_id.to_string(), reltype.to_string(), target_ref.to_string());
        Ok(self.rels.entry(r_id.to_string()).or_insert(rel))
    }

    /// Get a relationship by its ID.
    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.get(r_id)
    }

    /// Get or add a relationship of `reltype` to `target_ref` and return its rId.
    ///
    /// An existing relationship with the same type and target is reused.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(rel) = self
            .rels
            .values()
            .find(|rel| rel.reltype() == reltype && rel.target_ref() == target_ref)
        {
            return rel.r_id().to_string();
        }

        let r_id = self.next_r_id();
        let rel = Relationship::new(r_id.clone(), reltype.to_string(), target_ref.to_string());
        self.rels.insert(r_id.clone(), rel);
        r_id
    }

    /// Relate to a part by its partname, computing the relative target reference.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(&self.base_uri);
        self.get_or_add(reltype, &target_ref)
    }

    /// Get the next available relationship ID, filling gaps first.
    fn next_r_id(&self) -> String {
        let mut used_numbers: Vec<u32> = self.rels.keys().filter_map(|k| parse_r_id(k)).collect();
        used_numbers.sort_unstable();

        let mut next_num = 1u32;
        for &num in &used_numbers {
            match num.cmp(&next_num) {
                std::cmp::Ordering::Equal => next_num += 1,
                std::cmp::Ordering::Greater => break,
                std::cmp::Ordering::Less => {},
            }
        }

        format!("rId{}", next_num)
    }

    /// Get the single relationship of a given type.
    pub fn part_with_reltype(&self, reltype: &str) -> Result<&Relationship> {
        let mut matching = self.rels.values().filter(|rel| rel.reltype() == reltype);
        match (matching.next(), matching.next()) {
            (Some(rel), None) => Ok(rel),
            (None, _) => Err(OpcError::RelationshipNotFound(format!(
                "No relationship of type '{}'",
                reltype
            ))),
            (Some(_), Some(_)) => Err(OpcError::InvalidRelationship(format!(
                "Multiple relationships of type '{}'",
                reltype
            ))),
        }
    }

    /// Iterate relationships in rId order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        let mut rels: Vec<&Relationship> = self.rels.values().collect();
        rels.sort_by_key(|rel| (rel.ordinal(), rel.r_id().to_string()));
        rels.into_iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to the XML of a `.rels` part, ordered by rId.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in self.iter() {
            xml.push_str(r#"<Relationship Id=""#);
            push_escaped(&mut xml, rel.r_id());
            xml.push_str(r#"" Type=""#);
            push_escaped(&mut xml, rel.reltype());
            xml.push_str(r#"" Target=""#);
            push_escaped(&mut xml, rel.target_ref());
            xml.push_str(r#""/>"#);
        }

        xml.push_str("</Relationships>");
        xml
    }
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new("/".to_string())
    }
}
