//! Parts shared by all OOXML formats.

pub mod properties;

pub use properties::{AppProperties, DocumentProperties};
