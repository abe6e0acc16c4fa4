//! Presentation template module.
//!
//! Generates the fixed parts every new presentation carries: one slide
//! master, the eleven standard slide layouts, the theme and the small
//! presentation-level property parts. Everything here is static apart from
//! the relationship IDs the master uses to point at its layouts.

use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// The standard layouts as `(name, ST_SlideLayoutType)`, in PowerPoint's
/// default order.
///
/// Layouts carry only their name and type. Their shape trees are empty, so
/// no layout contributes placeholders: a slide on "Title Slide" starts as
/// bare as one on "Blank" and draws every shape itself.
pub const SLIDE_LAYOUTS: [(&str, &str); 11] = [
    ("Title Slide", "title"),
    ("Title and Content", "obj"),
    ("Section Header", "secHead"),
    ("Two Content", "twoObj"),
    ("Comparison", "twoTxTwoObj"),
    ("Title Only", "titleOnly"),
    ("Blank", "blank"),
    ("Content with Caption", "objTx"),
    ("Picture with Caption", "picTx"),
    ("Title and Vertical Text", "vertTx"),
    ("Vertical Title and Text", "vertTitleAndTx"),
];

/// Index of the "Blank" layout in [`SLIDE_LAYOUTS`].
pub const BLANK_LAYOUT_INDEX: usize = 6;

/// ID of the single slide master in `p:sldMasterIdLst`.
pub(crate) const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// Root element open tag with the DrawingML, relationship and PresentationML
/// namespaces declared.
fn pml_root(xml: &mut String, element: &str) {
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push('<');
    xml.push_str(element);
    xml.push_str(r#" xmlns:a=""#);
    xml.push_str(namespace::DML_MAIN);
    xml.push_str(r#"" xmlns:r=""#);
    xml.push_str(namespace::OFC_RELATIONSHIPS);
    xml.push_str(r#"" xmlns:p=""#);
    xml.push_str(namespace::PML_MAIN);
    xml.push('"');
}

/// The empty group shape properties every shape tree starts with.
pub(crate) fn push_group_shape_header(xml: &mut String) {
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str("<a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm>");
    xml.push_str("</p:grpSpPr>");
}

/// Generate slideMaster1.xml.
///
/// `layout_r_ids` are the master's relationship IDs for its layouts, in
/// layout order.
pub fn slide_master_xml(layout_r_ids: &[String]) -> String {
    let mut xml = String::with_capacity(2048);
    pml_root(&mut xml, "p:sldMaster");
    xml.push('>');

    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    push_group_shape_header(&mut xml);
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");

    xml.push_str(r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#);

    xml.push_str("<p:sldLayoutIdLst>");
    for (i, r_id) in layout_r_ids.iter().enumerate() {
        // Layout IDs continue after the master ID
        let _ = write!(
            xml,
            r#"<p:sldLayoutId id="{}" r:id="{}"/>"#,
            SLIDE_MASTER_ID as usize + 1 + i,
            r_id
        );
    }
    xml.push_str("</p:sldLayoutIdLst>");

    xml.push_str("<p:txStyles>");
    for (style, size) in [("p:titleStyle", 4400), ("p:bodyStyle", 2800), ("p:otherStyle", 1800)] {
        let _ = write!(
            xml,
            r#"<{style}><a:lvl1pPr><a:defRPr sz="{size}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl1pPr></{style}>"#
        );
    }
    xml.push_str("</p:txStyles>");

    xml.push_str("</p:sldMaster>");
    xml
}

/// Generate the slideLayout XML for one entry of [`SLIDE_LAYOUTS`].
pub fn slide_layout_xml(name: &str, layout_type: &str) -> String {
    let mut xml = String::with_capacity(1024);
    pml_root(&mut xml, "p:sldLayout");
    let _ = write!(xml, r#" type="{}" preserve="1">"#, layout_type);

    xml.push_str(r#"<p:cSld name=""#);
    crate::common::xml::push_escaped(&mut xml, name);
    xml.push_str(r#"">"#);
    xml.push_str("<p:spTree>");
    push_group_shape_header(&mut xml);
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    xml
}

/// Get all slide layout XMLs, in layout order.
pub fn all_slide_layouts() -> Vec<String> {
    SLIDE_LAYOUTS
        .iter()
        .map(|(name, layout_type)| slide_layout_xml(name, layout_type))
        .collect()
}

/// Generate theme1.xml: the Office color, font and format schemes.
pub fn default_theme_xml() -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(r#"<a:theme xmlns:a=""#);
    xml.push_str(namespace::DML_MAIN);
    xml.push_str(r#"" name="Office Theme">"#);
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="Office">"#);
    xml.push_str(r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#);
    xml.push_str(r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#);
    for (slot, hex) in [
        ("dk2", "44546A"),
        ("lt2", "E7E6E6"),
        ("accent1", "4472C4"),
        ("accent2", "ED7D31"),
        ("accent3", "A5A5A5"),
        ("accent4", "FFC000"),
        ("accent5", "5B9BD5"),
        ("accent6", "70AD47"),
        ("hlink", "0563C1"),
        ("folHlink", "954F72"),
    ] {
        let _ = write!(xml, r#"<a:{slot}><a:srgbClr val="{hex}"/></a:{slot}>"#);
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(r#"<a:fontScheme name="Office">"#);
    for (element, latin) in [("a:majorFont", "Calibri Light"), ("a:minorFont", "Calibri")] {
        let _ = write!(
            xml,
            r#"<{element}><a:latin typeface="{latin}"/><a:ea typeface=""/><a:cs typeface=""/><a:font script="Hang" typeface="맑은 고딕"/></{element}>"#
        );
    }
    xml.push_str("</a:fontScheme>");

    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    xml.push_str("<a:fillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:fillStyleLst>");
    xml.push_str("<a:lnStyleLst>");
    for width in [6350, 12700, 19050] {
        let _ = write!(
            xml,
            r#"<a:ln w="{width}" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/><a:miter lim="800000"/></a:ln>"#
        );
    }
    xml.push_str("</a:lnStyleLst>");
    xml.push_str("<a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst>");
    xml.push_str("<a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:bgFillStyleLst>");
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements>");
    xml.push_str("<a:objectDefaults/>");
    xml.push_str("<a:extraClrSchemeLst/>");
    xml.push_str("</a:theme>");
    xml
}

/// Generate tableStyles.xml with the default medium style selected.
pub fn default_table_styles_xml() -> String {
    let mut xml = String::with_capacity(256);
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(r#"<a:tblStyleLst xmlns:a=""#);
    xml.push_str(namespace::DML_MAIN);
    xml.push_str(r#"" def="{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}"/>"#);
    xml
}

/// Generate viewProps.xml.
pub fn default_view_props_xml() -> String {
    let mut xml = String::with_capacity(512);
    pml_root(&mut xml, "p:viewPr");
    xml.push_str(r#" lastView="sldView">"#);
    xml.push_str(r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#);
    xml.push_str(r#"<p:gridSpacing cx="76200" cy="76200"/>"#);
    xml.push_str("</p:viewPr>");
    xml
}

/// Generate presProps.xml.
pub fn default_pres_props_xml() -> String {
    let mut xml = String::with_capacity(256);
    pml_root(&mut xml, "p:presentationPr");
    xml.push_str("/>");
    xml
}
