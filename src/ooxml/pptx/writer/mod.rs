//! Mutable presentation writer components for PPTX.

pub mod pres;
pub mod shape;
pub mod slide;

// Re-export main types
pub use pres::MutablePresentation;
pub use shape::{AutoShapeType, MutableShape, Paragraph, TextFrame};
pub use slide::MutableSlide;
