//! Helpers shared by the OOXML writer layers.

pub mod unit;
pub mod xml;
