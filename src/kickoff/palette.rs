//! Deck color palette.

use crate::ooxml::pptx::RgbColor;

pub const TEAL: RgbColor = RgbColor::new(0, 128, 128);
pub const DARK_BLUE: RgbColor = RgbColor::new(10, 25, 50);
pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);
pub const LIGHT_GRAY: RgbColor = RgbColor::new(240, 240, 240);
pub const ACCENT_ORANGE: RgbColor = RgbColor::new(255, 165, 0);

/// Body text of the bullet list.
pub const BODY_TEXT: RgbColor = RgbColor::new(50, 50, 50);
/// Caption text inside the image placeholder.
pub const GUIDE_TEXT: RgbColor = RgbColor::new(100, 100, 100);
