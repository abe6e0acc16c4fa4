//! PowerPoint (.pptx) presentation writer.
//!
//! Builds PresentationML documents in memory and serializes them as Office
//! Open XML packages:
//!
//! - `MutablePresentation`: slide size, document properties, the slide list
//! - `MutableSlide`: background and shape tree of one slide
//! - `MutableShape`: text boxes and preset-geometry shapes with their text
//! - `template`: the slide master, layouts and theme every package carries
//!
//! # Example
//!
//! ```rust,no_run
//! use kickoff_deck::ooxml::pptx::{
//!     MutablePresentation, Paragraph, RgbColor, SlideBackground, TextAlignment, TextFormat,
//! };
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide(6)?;
//! slide.set_background(SlideBackground::solid(RgbColor::new(10, 25, 50)));
//! slide.add_text_box(914400, 914400, 4572000, 914400).add_paragraph(
//!     Paragraph::new("Hello")
//!         .with_format(TextFormat::new().size(40.0).color(RgbColor::new(255, 255, 255)))
//!         .align(TextAlignment::Center),
//! );
//! pres.save("hello.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backgrounds;
pub mod format;
pub mod template;
pub mod writer;

pub use backgrounds::SlideBackground;
pub use format::{LineFormat, RgbColor, TextAlignment, TextFormat, VerticalAnchor};
pub use template::BLANK_LAYOUT_INDEX;
pub use writer::{
    AutoShapeType, MutablePresentation, MutableShape, MutableSlide, Paragraph, TextFrame,
};
