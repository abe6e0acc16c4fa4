use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::fmt::Write as FmtWrite;

// Built once on first use, shared across threads
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("static XML escape patterns are valid")
});

const XML_ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

/// Escape the five XML special characters for use in text or attribute values.
///
/// # Examples
///
/// ```
/// use kickoff_deck::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hi\"</tag>"), "&lt;tag&gt;&quot;hi&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &XML_ENTITIES)
}

/// Append the escaped form of `s` to `out` without an intermediate allocation
/// when nothing needs escaping.
pub fn push_escaped(out: &mut String, s: &str) {
    if XML_ESCAPER.is_match(s) {
        out.push_str(&escape_xml(s));
    } else {
        out.push_str(s);
    }
}

/// C0 controls other than tab are not allowed in XML 1.0 character data.
#[inline]
fn is_restricted_control(b: u8) -> bool {
    b < 0x20 && b != b'\t'
}

/// Append `s` as run text: XML-escaped, with C0 control characters written
/// in the `_xHHHH_` form Office uses for characters XML cannot carry.
///
/// ```
/// use kickoff_deck::common::xml::push_escaped_text;
/// let mut out = String::new();
/// push_escaped_text(&mut out, "a\u{1}<b");
/// assert_eq!(out, "a_x0001_&lt;b");
/// ```
pub fn push_escaped_text(out: &mut String, s: &str) {
    let mut rest = s;
    // Control bytes are ASCII, so every split lands on a char boundary
    while let Some(pos) = rest.bytes().position(is_restricted_control) {
        push_escaped(out, &rest[..pos]);
        let _ = write!(out, "_x{:04X}_", rest.as_bytes()[pos]);
        rest = &rest[pos + 1..];
    }
    push_escaped(out, rest);
}
