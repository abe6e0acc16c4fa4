//! Document properties for OOXML packages.
//!
//! Core properties live in `docProps/core.xml`, extended (application)
//! properties in `docProps/app.xml`.

use crate::common::xml::push_escaped;
use chrono::{DateTime, SecondsFormat, Utc};

/// Document core properties (metadata).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    /// Document keywords (comma-separated)
    pub keywords: Option<String>,
    /// Document description
    pub description: Option<String>,
    /// Last modified by
    pub last_modified_by: Option<String>,
    /// Document category
    pub category: Option<String>,
    /// Content status (e.g., "Draft", "Final")
    pub content_status: Option<String>,
    /// Document language
    pub language: Option<String>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    pub fn keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn last_modified_by(mut self, name: &str) -> Self {
        self.last_modified_by = Some(name.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn content_status(mut self, status: &str) -> Self {
        self.content_status = Some(status.to_string());
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    /// Set both creation and modification time.
    pub fn timestamped(mut self, at: DateTime<Utc>) -> Self {
        self.created = Some(at);
        self.modified = Some(at);
        self
    }

    /// Generate core.xml content for this properties set.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        let text_elements = [
            ("dc:title", &self.title),
            ("dc:subject", &self.subject),
            ("dc:creator", &self.creator),
            ("cp:keywords", &self.keywords),
            ("dc:description", &self.description),
            ("cp:lastModifiedBy", &self.last_modified_by),
            ("cp:category", &self.category),
            ("cp:contentStatus", &self.content_status),
            ("dc:language", &self.language),
        ];
        for (tag, value) in text_elements {
            if let Some(value) = value {
                xml.push('<');
                xml.push_str(tag);
                xml.push('>');
                push_escaped(&mut xml, value);
                xml.push_str("</");
                xml.push_str(tag);
                xml.push('>');
            }
        }

        for (tag, value) in [("dcterms:created", &self.created), ("dcterms:modified", &self.modified)] {
            if let Some(at) = value {
                xml.push('<');
                xml.push_str(tag);
                xml.push_str(r#" xsi:type="dcterms:W3CDTF">"#);
                xml.push_str(&at.to_rfc3339_opts(SecondsFormat::Secs, true));
                xml.push_str("</");
                xml.push_str(tag);
                xml.push('>');
            }
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// Extended (application) properties written to `docProps/app.xml`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppProperties {
    /// Producing application name
    pub application: String,
    /// Presentation format label, e.g. "On-screen Show (16:9)"
    pub presentation_format: Option<String>,
    /// Number of slides in the package
    pub slides: usize,
}

impl AppProperties {
    pub fn new(application: &str) -> Self {
        Self {
            application: application.to_string(),
            presentation_format: None,
            slides: 0,
        }
    }

    /// Generate app.xml content.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
        xml.push_str("<Application>");
        push_escaped(&mut xml, &self.application);
        xml.push_str("</Application>");
        if let Some(ref format) = self.presentation_format {
            xml.push_str("<PresentationFormat>");
            push_escaped(&mut xml, format);
            xml.push_str("</PresentationFormat>");
        }
        xml.push_str("<Slides>");
        xml.push_str(&self.slides.to_string());
        xml.push_str("</Slides>");
        xml.push_str("</Properties>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_properties_builder() {
        let props = DocumentProperties::new()
            .title("서서울문화플라자 건립 설계공모")
            .creator("kickoff-deck")
            .language("ko-KR");

        assert_eq!(props.title.as_deref(), Some("서서울문화플라자 건립 설계공모"));
        assert_eq!(props.creator.as_deref(), Some("kickoff-deck"));
        assert_eq!(props.language.as_deref(), Some("ko-KR"));
        assert!(props.created.is_none());
    }

    #[test]
    fn test_core_xml() {
        let at = Utc.with_ymd_and_hms(2026, 2, 2, 9, 30, 0).unwrap();
        let props = DocumentProperties::new()
            .title("Kick-off")
            .creator("Design Team")
            .timestamped(at);

        let xml = props.to_xml();
        assert!(xml.contains("<dc:title>Kick-off</dc:title>"));
        assert!(xml.contains("<dc:creator>Design Team</dc:creator>"));
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2026-02-02T09:30:00Z</dcterms:created>"#
        ));
        assert!(xml.contains("<dcterms:modified"));
        assert!(!xml.contains("<dc:subject>"));
    }

    #[test]
    fn test_core_xml_escaping() {
        let props = DocumentProperties::new().title("Q&A <draft>");
        let xml = props.to_xml();
        assert!(xml.contains("<dc:title>Q&amp;A &lt;draft&gt;</dc:title>"));
    }

    #[test]
    fn test_app_xml() {
        let mut app = AppProperties::new("kickoff-deck");
        app.presentation_format = Some("On-screen Show (16:9)".to_string());
        app.slides = 30;

        let xml = app.to_xml();
        assert!(xml.contains("<Application>kickoff-deck</Application>"));
        assert!(xml.contains("<PresentationFormat>On-screen Show (16:9)</PresentationFormat>"));
        assert!(xml.contains("<Slides>30</Slides>"));
    }
}
