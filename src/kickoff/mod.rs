//! Kick-off meeting deck for the 서서울문화플라자 design competition.
//!
//! [`outline`] is the literal slide list; [`build_presentation`] renders it
//! onto a 16:9 presentation through a [`DeckBuilder`].
//!
//! ```rust,no_run
//! let pres = kickoff_deck::kickoff::build_presentation()?;
//! pres.save(kickoff_deck::kickoff::OUTPUT_FILE)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod content;
pub mod palette;
mod render;

pub use content::outline;
pub use render::{ClosingSlide, ContentSlide, DeckBuilder, DeckSlide, TitleSlide};

use crate::common::unit::inches;
use crate::ooxml::common::DocumentProperties;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::MutablePresentation;
use chrono::{DateTime, Utc};

/// Default output path, relative to the working directory.
pub const OUTPUT_FILE: &str = "Kickoff_Presentation.pptx";

/// Widescreen 16:9 slide size in inches.
pub const SLIDE_WIDTH_IN: f64 = 13.333;
pub const SLIDE_HEIGHT_IN: f64 = 7.5;

/// Build the whole deck, stamped with the current time.
pub fn build_presentation() -> Result<MutablePresentation> {
    build_presentation_at(Utc::now())
}

/// Build the whole deck with the given creation time in its properties.
pub fn build_presentation_at(at: DateTime<Utc>) -> Result<MutablePresentation> {
    let outline = outline();

    let mut pres = MutablePresentation::new();
    pres.set_slide_width(inches(SLIDE_WIDTH_IN));
    pres.set_slide_height(inches(SLIDE_HEIGHT_IN));

    let title = outline
        .iter()
        .find_map(|slide| match slide {
            DeckSlide::Title(t) => Some(t.title.as_str()),
            _ => None,
        })
        .unwrap_or_default();
    pres.set_properties(
        DocumentProperties::new()
            .title(title)
            .creator(env!("CARGO_PKG_NAME"))
            .language("ko-KR")
            .timestamped(at),
    );

    let pres = outline
        .iter()
        .try_fold(DeckBuilder::new(pres), DeckBuilder::slide)?
        .finish();

    log::debug!("rendered {} slides", pres.slide_count());
    Ok(pres)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_build_presentation() {
        let at = Utc.with_ymd_and_hms(2026, 2, 2, 9, 0, 0).unwrap();
        let pres = build_presentation_at(at).unwrap();

        assert_eq!(pres.slide_count(), 30);
        assert_eq!(pres.slide_width(), 12_191_695);
        assert_eq!(pres.slide_height(), 6_858_000);

        let props = pres.properties();
        assert_eq!(props.title.as_deref(), Some("서서울문화플라자 건립 설계공모"));
        assert_eq!(props.creator.as_deref(), Some("kickoff-deck"));
        assert_eq!(props.language.as_deref(), Some("ko-KR"));
        assert_eq!(props.created, Some(at));
    }

    #[test]
    fn test_slide_xml_is_reproducible() {
        let first = build_presentation().unwrap();
        let second = build_presentation().unwrap();
        for (a, b) in first.slides().iter().zip(second.slides()) {
            assert_eq!(a.to_xml().unwrap(), b.to_xml().unwrap());
        }
    }
}
