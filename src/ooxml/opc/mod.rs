/// Open Packaging Conventions (OPC) writer.
///
/// This module provides the write side of Open Packaging Conventions (ECMA-376 Part 2), the
/// container format shared by every Office Open XML document:
///
/// - Package structure (parts, relationships)
/// - Content type management (`[Content_Types].xml`)
/// - ZIP-based physical packaging
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{BlobPart, Part};
pub use rel::{Relationship, Relationships};
