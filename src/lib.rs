//! Kickoff-deck - builds a PowerPoint kick-off presentation as Office Open XML
//!
//! The crate is split into a small, general `.pptx` writer and the deck that
//! is written with it.
//!
//! # Features
//!
//! - **OPC Writer**: parts, relationships, content types and deflated ZIP output
//! - **PresentationML**: slides, text boxes, rectangles, fills, outlines and run formatting
//! - **Document Properties**: `docProps/core.xml` and `docProps/app.xml`
//! - **Kick-off Deck**: the literal outline and its title, content and closing renderers
//!
//! # Example - Writing the deck
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pres = kickoff_deck::kickoff::build_presentation()?;
//! assert_eq!(pres.slide_count(), 30);
//! pres.save("Kickoff_Presentation.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Writing any presentation
//!
//! ```no_run
//! use kickoff_deck::ooxml::pptx::{MutablePresentation, Paragraph, TextFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = MutablePresentation::new();
//! pres.add_slide(6)?
//!     .add_text_box(914400, 914400, 4572000, 914400)
//!     .add_paragraph(Paragraph::new("Agenda").with_format(TextFormat::new().size(32.0)));
//! let bytes = pres.to_bytes()?;
//! assert!(!bytes.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod kickoff;
pub mod ooxml;

pub use ooxml::error::{OoxmlError, Result};
pub use ooxml::pptx::MutablePresentation;
