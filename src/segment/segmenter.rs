//! Document segmentation: from the text of a document to the paragraphs of one bulletin.
use log::trace;

use crate::config::Markers;
use crate::skip::SkipReason;

use super::{Locator, Normalizer, Splitter};

/// Extracts the paragraphs of the bulletin opened by a given hour title.
///
/// Segmentation only depends on the provided text,
/// so a single [Segmenter] can be shared between threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    start_marker: String,
    locator: Locator,
    normalizer: Normalizer,
    splitter: Splitter,
}

impl Segmenter {
    pub fn new(start_marker: &str, markers: &Markers) -> Self {
        Self {
            start_marker: start_marker.to_string(),
            locator: Locator::new(&markers.end_notes),
            normalizer: Normalizer::new(&markers.annotations),
            splitter: Splitter::new(&markers.separator),
        }
    }

    pub fn from_parts(
        start_marker: &str,
        locator: Locator,
        normalizer: Normalizer,
        splitter: Splitter,
    ) -> Self {
        Self {
            start_marker: start_marker.to_string(),
            locator,
            normalizer,
            splitter,
        }
    }

    pub fn start_marker(&self) -> &str {
        &self.start_marker
    }

    /// Paragraphs of the bulletin, or the reason why there are none.
    pub fn try_segment(&self, text: &str) -> Result<Vec<String>, SkipReason> {
        let span = self.locator.try_locate(text, &self.start_marker)?;
        trace!("bulletin {} spans {:?}", self.start_marker, span.range());

        let normalized = self.normalizer.normalize(&text[span.range()]);
        self.splitter.split(&normalized)
    }

    /// Paragraphs of the bulletin, empty if the document has none.
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.try_segment(text).unwrap_or_default()
    }
}

/// Segment a document with the default annotation markers.
pub fn segment<S: AsRef<str>>(
    raw_text: &str,
    paragraph_separator: &str,
    start_marker: &str,
    end_markers: &[S],
) -> Vec<String> {
    let markers = Markers {
        separator: paragraph_separator.to_string(),
        end_notes: end_markers.iter().map(|m| m.as_ref().to_string()).collect(),
        ..Default::default()
    };
    Segmenter::new(start_marker, &markers).segment(raw_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{END_NOTES, PARAGRAPH_SEPARATOR};

    const BULLETIN: &str = "Header\nTemplate\n0800\nParaOne אות מעבר ParaTwo אות מעבר ParaThree\nאות ס י ו ם\n";

    #[test]
    fn inline_separators() {
        let paragraphs = segment(BULLETIN, PARAGRAPH_SEPARATOR, "0800", &END_NOTES);
        assert_eq!(paragraphs, vec!["ParaOne", "ParaTwo", "ParaThree"]);
    }

    #[test]
    fn without_separator() {
        let text = BULLETIN.replace("אות מעבר ", "");
        assert!(!text.contains(PARAGRAPH_SEPARATOR));
        let paragraphs = segment(&text, PARAGRAPH_SEPARATOR, "0800", &END_NOTES);
        assert!(paragraphs.is_empty());

        let s = Segmenter::new("0800", &Markers::default());
        assert_eq!(s.try_segment(&text), Err(SkipReason::NoSeparator));
    }

    #[test]
    fn missing_start() {
        let s = Segmenter::new("2100", &Markers::default());
        assert!(s.segment(BULLETIN).is_empty());
        assert_eq!(s.try_segment(BULLETIN), Err(SkipReason::MissingStartMarker));
    }

    #[test]
    fn sign_off_at_start() {
        let markers = Markers {
            end_notes: vec!["08".to_string()],
            ..Default::default()
        };
        let s = Segmenter::new("0800", &markers);
        assert_eq!(s.try_segment(BULLETIN), Err(SkipReason::EmptySpan));
    }

    #[test]
    fn empty_end_note() {
        let markers = Markers {
            end_notes: vec![String::new(), "אות ס י ו ם".to_string()],
            ..Default::default()
        };
        let s = Segmenter::new("0800", &markers);
        assert_eq!(s.segment(BULLETIN), vec!["ParaOne", "ParaTwo", "ParaThree"]);
    }

    #[test]
    fn full_bulletin() {
        let text = "\
גלי צה\"ל 0800
חדשות הבוקר
1 ראש הממשלה נפגש הבוקר עם שר האוצר.

אות מעבר
2 בצפון נמשכים הגשמים.
(-- לבדוק עם הכתב --)
אות מעבר
3 ובספורט, ניצחון לנבחרת.
אלה החדשות
אות סיום
גלי צה\"ל 0900
מהדורה הבאה
";
        let s = Segmenter::new("0800", &Markers::default());
        assert_eq!(
            s.try_segment(text).unwrap(),
            vec![
                "ראש הממשלה נפגש הבוקר עם שר האוצר.",
                "בצפון נמשכים הגשמים.",
                "ובספורט, ניצחון לנבחרת.",
            ]
        );
    }

    #[test]
    fn next_bulletin_ends_span() {
        let text = "\
0800
template
first paragraph
אות מעבר
second paragraph
trailer
גלי צה\"ל 0900
template
third paragraph
אות מעבר
fourth paragraph
אות סיום
";
        let s = Segmenter::new("0800", &Markers::default());
        assert_eq!(
            s.try_segment(text).unwrap(),
            vec!["first paragraph", "second paragraph\ntrailer"]
        );
    }
}
