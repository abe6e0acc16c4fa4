//! End-to-end checks on the generated kick-off deck, read back from the
//! saved `.pptx` archive.

use chrono::{TimeZone, Utc};
use kickoff_deck::kickoff::{self, ContentSlide, DeckBuilder, DeckSlide, OUTPUT_FILE};
use kickoff_deck::ooxml::pptx::MutablePresentation;
use kickoff_deck::OoxmlError;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashSet;
use std::io::{Cursor, Read};
use zip::ZipArchive;

struct Deck {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl Deck {
    fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            archive: ZipArchive::new(Cursor::new(bytes)).unwrap(),
        }
    }

    fn names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    fn read(&mut self, name: &str) -> String {
        let mut out = String::new();
        self.archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        out
    }

    fn slide(&mut self, number: usize) -> String {
        self.read(&format!("ppt/slides/slide{}.xml", number))
    }
}

fn build_deck() -> Deck {
    let pres = kickoff::build_presentation().unwrap();
    Deck::from_bytes(pres.to_bytes().unwrap())
}

fn count_elements(xml: &str, name: &[u8]) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut count = 0;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == name => count += 1,
            Event::Eof => break,
            _ => {},
        }
    }
    count
}

/// The `a:srgbClr/@val` inside the slide's `p:bg`, if any.
fn background_color(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    let mut in_bg = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"p:bg" => in_bg = true,
            Event::End(e) if e.name().as_ref() == b"p:bg" => in_bg = false,
            Event::Empty(e) if in_bg && e.name().as_ref() == b"a:srgbClr" => {
                let attr = e.try_get_attribute("val").unwrap()?;
                return Some(String::from_utf8(attr.value.to_vec()).unwrap());
            },
            Event::Eof => return None,
            _ => {},
        }
    }
}

/// Paragraph count of every `p:sp`, in shape order.
fn paragraphs_per_shape(xml: &str) -> Vec<usize> {
    let mut reader = Reader::from_str(xml);
    let mut counts = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"p:sp" => counts.push(0),
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"a:p" => {
                if let Some(last) = counts.last_mut() {
                    *last += 1;
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }
    counts
}

fn attribute_values(xml: &str, element: &[u8], attribute: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut values = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == element => {
                if let Some(attr) = e.try_get_attribute(attribute).unwrap() {
                    values.push(String::from_utf8(attr.value.to_vec()).unwrap());
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }
    values
}

#[test]
fn saves_exactly_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE);

    kickoff::build_presentation().unwrap().save(&path).unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
    Deck::from_bytes(bytes);
}

#[test]
fn deck_has_thirty_slides() {
    let mut deck = build_deck();

    let slides = deck
        .names()
        .into_iter()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count();
    assert_eq!(slides, 30);

    let presentation = deck.read("ppt/presentation.xml");
    assert_eq!(count_elements(&presentation, b"p:sldId"), 30);
    assert!(deck.read("docProps/app.xml").contains("<Slides>30</Slides>"));
}

#[test]
fn slide_size_is_widescreen() {
    let mut deck = build_deck();
    let presentation = deck.read("ppt/presentation.xml");
    assert!(presentation.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));
}

#[test]
fn bullet_paragraphs_match_outline() {
    let mut deck = build_deck();
    for (i, slide) in kickoff::outline().iter().enumerate() {
        if let DeckSlide::Content(content) = slide {
            let xml = deck.slide(i + 1);
            let paragraphs = paragraphs_per_shape(&xml);
            // title bar, title, bullet list, placeholder[, footer]
            assert_eq!(paragraphs[2], content.bullets.len(), "slide {}", i + 1);
            assert_eq!(paragraphs[3], 1);
        }
    }
}

#[test]
fn background_colors() {
    let mut deck = build_deck();
    for (i, slide) in kickoff::outline().iter().enumerate() {
        let expected = match slide {
            DeckSlide::Title(_) | DeckSlide::Closing(_) => "0A1932",
            DeckSlide::Content(_) => "FFFFFF",
        };
        let xml = deck.slide(i + 1);
        assert_eq!(background_color(&xml).as_deref(), Some(expected), "slide {}", i + 1);
    }
}

#[test]
fn footer_only_where_note_given() {
    let mut deck = build_deck();
    for (i, slide) in kickoff::outline().iter().enumerate() {
        if let DeckSlide::Content(content) = slide {
            let xml = deck.slide(i + 1);
            let shapes = count_elements(&xml, b"p:sp");
            match content.note.as_deref() {
                Some(note) => {
                    assert_eq!(shapes, 5, "slide {}", i + 1);
                    assert!(xml.contains(&format!("NOTE: {}", note)));
                },
                None => {
                    assert_eq!(shapes, 4, "slide {}", i + 1);
                    assert!(!xml.contains("NOTE: "));
                },
            }
        }
    }
}

#[test]
fn closing_message_breaks_line_within_one_paragraph() {
    let mut deck = build_deck();
    let xml = deck.slide(30);
    assert_eq!(paragraphs_per_shape(&xml), [1]);
    assert_eq!(count_elements(&xml, b"a:br"), 1);
    assert!(xml.contains("<a:t>감사합니다.</a:t>"));
    assert!(xml.contains("<a:t>Thank You</a:t>"));
}

#[test]
fn rebuilding_gives_identical_slides() {
    let first = kickoff::build_presentation_at(Utc.with_ymd_and_hms(2026, 2, 2, 9, 0, 0).unwrap())
        .unwrap()
        .to_bytes()
        .unwrap();
    let second = kickoff::build_presentation_at(Utc.with_ymd_and_hms(2026, 2, 3, 9, 0, 0).unwrap())
        .unwrap()
        .to_bytes()
        .unwrap();

    let mut first = Deck::from_bytes(first);
    let mut second = Deck::from_bytes(second);
    assert_eq!(first.names(), second.names());

    for name in first.names() {
        let (a, b) = (first.read(&name), second.read(&name));
        if name == "docProps/core.xml" {
            assert_ne!(a, b);
        } else {
            assert_eq!(a, b, "{}", name);
        }
    }
}

#[test]
fn content_types_cover_every_part() {
    let mut deck = build_deck();
    let content_types = deck.read("[Content_Types].xml");
    let overrides: HashSet<String> = attribute_values(&content_types, b"Override", "PartName")
        .into_iter()
        .collect();

    for name in deck.names() {
        if name == "[Content_Types].xml" || name.ends_with(".rels") {
            continue;
        }
        assert!(overrides.contains(&format!("/{}", name)), "{}", name);
    }
}

#[test]
fn relationship_ids_unique_per_part() {
    let mut deck = build_deck();
    for name in deck.names().into_iter().filter(|n| n.ends_with(".rels")) {
        let xml = deck.read(&name);
        let ids = attribute_values(&xml, b"Relationship", "Id");
        let unique: HashSet<&String> = ids.iter().collect();
        assert!(!ids.is_empty(), "{}", name);
        assert_eq!(unique.len(), ids.len(), "{}", name);
    }
}

#[test]
fn every_part_is_well_formed() {
    let mut deck = build_deck();
    for name in deck.names() {
        let xml = deck.read(&name);
        let mut reader = Reader::from_str(&xml);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {},
                Err(err) => panic!("{}: {}", name, err),
            }
        }
    }
}

#[test]
fn core_properties() {
    let mut deck = build_deck();
    let core = deck.read("docProps/core.xml");
    assert!(core.contains("<dc:title>서서울문화플라자 건립 설계공모</dc:title>"));
    assert!(core.contains("<dc:creator>kickoff-deck</dc:creator>"));
    assert!(core.contains("<dc:language>ko-KR</dc:language>"));
}

#[test]
fn ampersands_are_escaped() {
    let mut deck = build_deck();
    // "2. Context & Site Analysis (대지 분석)" on the table of contents
    let xml = deck.slide(2);
    assert!(xml.contains("2. Context &amp; Site Analysis (대지 분석)"));
}

#[test]
fn control_characters_never_reach_the_part() {
    let pres = DeckBuilder::new(MutablePresentation::new())
        .content_slide(&ContentSlide::new("t\u{1}", &["a\u{0B}b"], "g\u{1B}").with_note("n\u{0}"))
        .unwrap()
        .finish();
    let mut deck = Deck::from_bytes(pres.to_bytes().unwrap());
    let xml = deck.slide(1);

    let mut reader = Reader::from_str(&xml);
    loop {
        match reader.read_event().unwrap() {
            Event::Text(e) => assert!(
                e.iter().all(|&b| b >= 0x20 || b == b'\t'),
                "raw control character in {:?}",
                String::from_utf8_lossy(&e)
            ),
            Event::Eof => break,
            _ => {},
        }
    }

    // Vertical tab is a line break inside the bullet paragraph
    assert_eq!(paragraphs_per_shape(&xml)[2], 1);
    assert!(xml.contains("<a:t>\u{2022} a</a:t>"));
    assert!(xml.contains("<a:t>t_x0001_</a:t>"));
    assert!(xml.contains("<a:t>g_x001B_</a:t>"));
    assert!(xml.contains("<a:t>NOTE: n_x0000_</a:t>"));
}

#[test]
fn unknown_layout_is_rejected() {
    let mut pres = MutablePresentation::new();
    let err = pres.add_slide(42).unwrap_err();
    assert!(matches!(
        err,
        OoxmlError::InvalidLayout {
            index: 42,
            available: 11
        }
    ));
}
