//! XML text helpers shared by the part writers.

mod escape;

pub use escape::{escape_xml, push_escaped, push_escaped_text};
