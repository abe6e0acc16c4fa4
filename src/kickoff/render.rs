//! Slide renderers for the kick-off deck.
//!
//! Every slide sits on the blank layout and is drawn from absolute
//! coordinates in inches, converted to EMU at the call site.

use crate::common::unit::inches;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::{
    BLANK_LAYOUT_INDEX, LineFormat, MutablePresentation, Paragraph, SlideBackground,
    TextAlignment, TextFormat,
};

use super::palette::{
    ACCENT_ORANGE, BODY_TEXT, DARK_BLUE, GUIDE_TEXT, LIGHT_GRAY, TEAL, WHITE,
};

/// Opening slide: project name and meeting subtitle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSlide {
    pub title: String,
    pub subtitle: String,
}

impl TitleSlide {
    pub fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

/// A bullet list on the left, an image placeholder on the right and an
/// optional footer note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSlide {
    pub title: String,
    pub bullets: Vec<String>,
    /// Describes the image someone has to place into the placeholder later
    pub image_guide: String,
    pub note: Option<String>,
}

impl ContentSlide {
    pub fn new(title: &str, bullets: &[&str], image_guide: &str) -> Self {
        Self {
            title: title.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            image_guide: image_guide.to_string(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    /// The footer text, if this slide shows one. An empty note shows none.
    pub fn footer(&self) -> Option<String> {
        self.note
            .as_deref()
            .filter(|note| !note.is_empty())
            .map(|note| format!("NOTE: {}", note))
    }
}

/// Final "thank you" slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosingSlide {
    pub message: String,
}

impl Default for ClosingSlide {
    fn default() -> Self {
        Self {
            message: "감사합니다.\nThank You".to_string(),
        }
    }
}

/// One entry of the deck outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSlide {
    Title(TitleSlide),
    Content(ContentSlide),
    Closing(ClosingSlide),
}

/// Threads a presentation through the renderers, one slide per call, in
/// call order.
#[derive(Debug)]
pub struct DeckBuilder {
    pres: MutablePresentation,
}

impl DeckBuilder {
    pub fn new(pres: MutablePresentation) -> Self {
        Self { pres }
    }

    /// Render any outline entry.
    pub fn slide(self, slide: &DeckSlide) -> Result<Self> {
        match slide {
            DeckSlide::Title(s) => self.title_slide(s),
            DeckSlide::Content(s) => self.content_slide(s),
            DeckSlide::Closing(s) => self.closing_slide(s),
        }
    }

    pub fn title_slide(mut self, data: &TitleSlide) -> Result<Self> {
        let slide = self.pres.add_slide(BLANK_LAYOUT_INDEX)?;
        slide.set_background(SlideBackground::solid(DARK_BLUE));

        slide
            .add_text_box(inches(1.0), inches(2.5), inches(11.333), inches(2.0))
            .add_paragraph(
                Paragraph::new(data.title.as_str())
                    .with_format(TextFormat::new().size(54.0).bold(true).color(WHITE))
                    .align(TextAlignment::Center),
            );

        slide
            .add_text_box(inches(1.0), inches(4.5), inches(11.333), inches(1.0))
            .add_paragraph(
                Paragraph::new(data.subtitle.as_str())
                    .with_format(TextFormat::new().size(24.0).color(ACCENT_ORANGE))
                    .align(TextAlignment::Center),
            );

        // Decorative bar under the title
        slide
            .add_rectangle(inches(4.0), inches(4.2), inches(5.333), inches(0.05))
            .fill(TEAL)
            .line(LineFormat::NoLine);

        Ok(self)
    }

    pub fn content_slide(mut self, data: &ContentSlide) -> Result<Self> {
        let slide = self.pres.add_slide(BLANK_LAYOUT_INDEX)?;
        slide.set_background(SlideBackground::solid(WHITE));

        slide
            .add_rectangle(inches(0.5), inches(0.4), inches(12.333), inches(0.8))
            .fill(WHITE)
            .line(LineFormat::Solid {
                color: DARK_BLUE,
                width_pt: 1.5,
            });

        slide
            .add_text_box(inches(0.6), inches(0.5), inches(10.0), inches(0.6))
            .add_paragraph(
                Paragraph::new(data.title.as_str())
                    .with_format(TextFormat::new().size(32.0).bold(true).color(DARK_BLUE)),
            );

        let list = slide.add_text_box(inches(0.8), inches(1.5), inches(7.5), inches(5.0));
        list.word_wrap(true);
        for item in &data.bullets {
            list.add_paragraph(
                Paragraph::new(format!("\u{2022} {}", item))
                    .with_format(TextFormat::new().size(18.0).color(BODY_TEXT))
                    .space_before(6.0)
                    .space_after(14.0),
            );
        }

        slide
            .add_rectangle(inches(8.5), inches(1.5), inches(4.333), inches(5.0))
            .fill(LIGHT_GRAY)
            .line(LineFormat::Solid {
                color: TEAL,
                width_pt: 1.0,
            })
            .word_wrap(true)
            .add_paragraph(
                Paragraph::new(format!("[IMAGE GUIDE]\n{}", data.image_guide))
                    .with_format(TextFormat::new().size(14.0).color(GUIDE_TEXT))
                    .align(TextAlignment::Center),
            );

        if let Some(footer) = data.footer() {
            slide
                .add_text_box(inches(0.8), inches(6.8), inches(11.0), inches(0.5))
                .add_paragraph(
                    Paragraph::new(footer)
                        .with_format(TextFormat::new().size(12.0).italic(true).color(TEAL)),
                );
        }

        Ok(self)
    }

    pub fn closing_slide(mut self, data: &ClosingSlide) -> Result<Self> {
        let slide = self.pres.add_slide(BLANK_LAYOUT_INDEX)?;
        slide.set_background(SlideBackground::solid(DARK_BLUE));

        slide
            .add_text_box(inches(2.0), inches(3.0), inches(9.333), inches(2.0))
            .add_paragraph(
                Paragraph::new(data.message.as_str())
                    .with_format(TextFormat::new().size(40.0).bold(true).color(WHITE))
                    .align(TextAlignment::Center),
            );

        Ok(self)
    }

    pub fn finish(self) -> MutablePresentation {
        self.pres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(slide: DeckSlide) -> MutablePresentation {
        DeckBuilder::new(MutablePresentation::new())
            .slide(&slide)
            .unwrap()
            .finish()
    }

    #[test]
    fn test_title_slide_shapes() {
        let pres = render(DeckSlide::Title(TitleSlide::new(
            "서서울문화플라자 건립 설계공모",
            "Kick-off Meeting | 2026. 02.",
        )));
        let slide = &pres.slides()[0];

        assert_eq!(slide.layout_index(), BLANK_LAYOUT_INDEX);
        assert_eq!(slide.background().solid_color(), Some(DARK_BLUE));
        assert_eq!(slide.shape_count(), 3);

        let bar = &slide.shapes()[2];
        assert_eq!(bar.fill_color(), Some(TEAL));
        assert_eq!(bar.line_format(), Some(LineFormat::NoLine));
        assert_eq!(bar.geometry(), (3_657_600, 3_840_480, 4_876_495, 45_720));
    }

    #[test]
    fn test_content_slide_one_paragraph_per_bullet() {
        let data = ContentSlide::new("공모 일정", &["a", "b", "c"], "timeline");
        let pres = render(DeckSlide::Content(data));
        let slide = &pres.slides()[0];

        assert_eq!(slide.background().solid_color(), Some(WHITE));
        // title bar, title, bullets, placeholder
        assert_eq!(slide.shape_count(), 4);

        let list = slide.shapes()[2].text_frame().unwrap();
        assert!(list.word_wrap());
        assert_eq!(list.paragraphs().len(), 3);
        assert_eq!(list.paragraphs()[0].text(), "\u{2022} a");

        let guide = slide.shapes()[3].text_frame().unwrap();
        assert_eq!(guide.text(), "[IMAGE GUIDE]\ntimeline");
        assert_eq!(guide.paragraphs().len(), 1);
    }

    #[test]
    fn test_footer_only_with_note() {
        let plain = ContentSlide::new("목차", &["1"], "map");
        assert_eq!(plain.footer(), None);
        assert_eq!(render(DeckSlide::Content(plain)).slides()[0].shape_count(), 4);

        let noted = ContentSlide::new("SWOT 분석", &["1"], "map").with_note("전략 도출의 근거");
        assert_eq!(noted.footer().as_deref(), Some("NOTE: 전략 도출의 근거"));
        let pres = render(DeckSlide::Content(noted));
        let footer = &pres.slides()[0].shapes()[4];
        assert_eq!(footer.text_frame().unwrap().text(), "NOTE: 전략 도출의 근거");
        assert_eq!(footer.text_frame().unwrap().paragraphs()[0].format().italic, Some(true));

        let empty = ContentSlide::new("x", &[], "y").with_note("");
        assert_eq!(empty.footer(), None);
    }

    #[test]
    fn test_closing_slide() {
        let pres = render(DeckSlide::Closing(ClosingSlide::default()));
        let slide = &pres.slides()[0];
        assert_eq!(slide.background().solid_color(), Some(DARK_BLUE));
        assert_eq!(slide.shape_count(), 1);
        let frame = slide.shapes()[0].text_frame().unwrap();
        assert_eq!(frame.paragraphs().len(), 1);
        assert_eq!(frame.text(), "감사합니다.\nThank You");
    }

    #[test]
    fn test_slides_follow_call_order() {
        let pres = DeckBuilder::new(MutablePresentation::new())
            .title_slide(&TitleSlide::new("t", "s"))
            .and_then(|b| b.content_slide(&ContentSlide::new("c", &["x"], "g")))
            .and_then(|b| b.closing_slide(&ClosingSlide::default()))
            .unwrap()
            .finish();

        let ids: Vec<u32> = pres.slides().iter().map(|s| s.slide_id()).collect();
        assert_eq!(ids, [256, 257, 258]);
        assert_eq!(pres.slides()[1].shape_count(), 4);
    }
}
