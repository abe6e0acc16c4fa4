/// Errors raised while assembling or serializing an OPC package.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    /// A relationship whose target part was never added to the package.
    /// Writing it would leave readers with a broken reference.
    #[error("{source_part} {r_id} points at {target}, which is not in the package")]
    DanglingRelationship {
        source_part: String,
        r_id: String,
        target: String,
    },

    #[error("Invalid pack URI: {0}")]
    InvalidPackUri(String),

    #[error("Part not found: {0}")]
    PartNotFound(String),

    #[error("Relationship not found: {0}")]
    RelationshipNotFound(String),

    #[error("Invalid relationship: {0}")]
    InvalidRelationship(String),

    #[error("ZIP error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OpcError>;
