//! Format types for PPTX presentations.

use crate::ooxml::error::{OoxmlError, Result};
use std::fmt;

/// A 24-bit sRGB color, serialized as `a:srgbClr/@val`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex color such as `"0A1932"` (an optional leading `#`
    /// is accepted).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(OoxmlError::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| OoxmlError::InvalidColor(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Upper-case hex form used in DrawingML.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Run-level text formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Underline text
    pub underline: Option<bool>,
    /// Text color
    pub color: Option<RgbColor>,
}

impl TextFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, pt: f64) -> Self {
        self.size = Some(pt);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn color(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }
}

/// Horizontal paragraph alignment (`a:pPr/@algn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }
}

/// Vertical anchoring of text inside its frame (`a:bodyPr/@anchor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
}

impl VerticalAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Outline of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LineFormat {
    /// Inherit the outline from the shape style
    #[default]
    Default,
    /// Explicitly no outline
    NoLine,
    /// Solid outline
    Solid {
        color: RgbColor,
        /// Width in points
        width_pt: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex() {
        assert_eq!(RgbColor::new(10, 25, 50).to_hex(), "0A1932");
        assert_eq!(RgbColor::new(255, 165, 0).to_string(), "FFA500");
    }

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(RgbColor::from_hex("008080").unwrap(), RgbColor::new(0, 128, 128));
        assert_eq!(RgbColor::from_hex("#f0f0f0").unwrap(), RgbColor::new(240, 240, 240));
    }

    #[test]
    fn test_rgb_from_hex_rejects_malformed() {
        for bad in ["", "12345", "1234567", "GG0000", "#12 456"] {
            assert!(matches!(
                RgbColor::from_hex(bad),
                Err(OoxmlError::InvalidColor(_))
            ));
        }
    }

    #[test]
    fn test_text_format_builder() {
        let format = TextFormat::new().size(54.0).bold(true).color(RgbColor::new(255, 255, 255));
        assert_eq!(format.size, Some(54.0));
        assert_eq!(format.bold, Some(true));
        assert_eq!(format.italic, None);
        assert_eq!(format.color, Some(RgbColor::new(255, 255, 255)));
    }

    #[test]
    fn test_alignment_tokens() {
        assert_eq!(TextAlignment::Center.as_str(), "ctr");
        assert_eq!(VerticalAnchor::Middle.as_str(), "ctr");
    }
}
