//! Slide background support for PowerPoint presentations.

use super::format::RgbColor;

/// Slide background configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideBackground {
    /// No background element; the slide inherits the master background
    #[default]
    None,
    /// Solid color background
    Solid {
        color: RgbColor,
    },
}

impl SlideBackground {
    /// Create a solid color background.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kickoff_deck::ooxml::pptx::{RgbColor, SlideBackground};
    ///
    /// let bg = SlideBackground::solid(RgbColor::new(10, 25, 50));
    /// assert_eq!(bg.solid_color(), Some(RgbColor::new(10, 25, 50)));
    /// ```
    pub fn solid(color: RgbColor) -> Self {
        SlideBackground::Solid { color }
    }

    /// The fill color, if this is a solid background.
    pub fn solid_color(&self) -> Option<RgbColor> {
        match self {
            SlideBackground::Solid { color } => Some(*color),
            SlideBackground::None => None,
        }
    }

    /// Append the `p:bg` element for this background (nothing for `None`).
    pub(crate) fn write_xml(&self, xml: &mut String) {
        match self {
            SlideBackground::None => {},
            SlideBackground::Solid { color } => {
                xml.push_str("<p:bg>");
                xml.push_str("<p:bgPr>");
                xml.push_str("<a:solidFill>");
                xml.push_str("<a:srgbClr val=\"");
                xml.push_str(&color.to_hex());
                xml.push_str("\"/>");
                xml.push_str("</a:solidFill>");
                xml.push_str("<a:effectLst/>");
                xml.push_str("</p:bgPr>");
                xml.push_str("</p:bg>");
            },
        }
    }
}
