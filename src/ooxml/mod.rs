//! Office Open XML (OOXML) writer.
//!
//! The module is organized into layers:
//!
//! 1. **OPC Layer** (`opc`): package structure, relationships, content types, ZIP
//! 2. **Shared Parts** (`common`): document properties shared by every format
//! 3. **PresentationML** (`pptx`): presentation, slide and shape model
//!
//! # Example
//!
//! ```rust,no_run
//! use kickoff_deck::ooxml::pptx::MutablePresentation;
//!
//! let mut pres = MutablePresentation::new();
//! pres.add_slide(6)?.add_text_box(914400, 914400, 4572000, 914400);
//! pres.save("hello.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod common;
pub mod error;
pub mod opc;
pub mod pptx;

// Re-export commonly used types from OPC layer
pub use opc::{OpcPackage, PackURI};

pub use common::{AppProperties, DocumentProperties};

pub use error::{OoxmlError, Result};
