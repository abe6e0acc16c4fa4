/// Error types for OOXML operations.
use thiserror::Error;

/// Result type for OOXML operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// OPC package error
    #[error("OPC error: {0}")]
    Opc(#[from] crate::ooxml::opc::error::OpcError),

    /// Failure while generating part XML
    #[error("XML error: {0}")]
    Xml(String),

    /// Slide layout index outside the presentation's layout list
    #[error("Invalid slide layout index {index}: presentation has {available} layouts")]
    InvalidLayout { index: usize, available: usize },

    /// Malformed RGB color value
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for OoxmlError {
    fn from(err: std::fmt::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}
