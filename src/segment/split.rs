//! Paragraph splitting.
//!
//! Before splitting, the structural overhead of the span is removed:
//! the two first lines (headline, template line) and the last one (trailing boilerplate).
//! Lines holding a separator are content and are never considered overhead.
use itertools::Itertools;

use crate::config::PARAGRAPH_SEPARATOR;
use crate::skip::SkipReason;

/// Leading overhead lines: headline and template line.
const HEADER_LINES: usize = 2;

#[derive(Debug, Clone)]
pub struct Splitter {
    separator: String,
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(PARAGRAPH_SEPARATOR)
    }
}

impl Splitter {
    pub fn new(separator: &str) -> Self {
        Self {
            separator: separator.to_string(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    fn is_content(&self, line: &str) -> bool {
        !self.separator.is_empty() && line.contains(self.separator.as_str())
    }

    /// Removes headline, template and trailing lines.
    pub fn strip_overhead(&self, text: &str) -> String {
        let lines: Vec<&str> = text.split('\n').filter(|l| !l.is_empty()).collect();
        let header = lines
            .iter()
            .take(HEADER_LINES)
            .take_while(|l| !self.is_content(l))
            .count();

        let mut body = &lines[header..];
        if let Some(last) = body.last() {
            if !self.is_content(last) {
                body = &body[..body.len() - 1];
            }
        }

        body.iter().join("\n")
    }

    /// Split a normalized span into trimmed, non-empty paragraphs.
    pub fn split(&self, text: &str) -> Result<Vec<String>, SkipReason> {
        if self.separator.is_empty() {
            return Err(SkipReason::NoSeparator);
        }

        let body = self.strip_overhead(text);
        let segments: Vec<&str> = body.split(self.separator.as_str()).collect();
        if segments.len() < 2 {
            return Err(SkipReason::NoSeparator);
        }

        let paragraphs: Vec<String> = segments
            .into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();

        if paragraphs.is_empty() {
            return Err(SkipReason::Empty);
        }
        Ok(paragraphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overhead() {
        let s = Splitter::default();
        let text = "0800\nגלי צה\"ל השעה שמונה\nfirst\nsecond\nלהתראות";
        assert_eq!(s.strip_overhead(text), "first\nsecond");
    }

    #[test]
    fn short_spans_lose_everything() {
        let s = Splitter::default();
        assert_eq!(s.strip_overhead("0800\ntemplate\ntrailer"), "");
        assert_eq!(s.strip_overhead("0800"), "");
        assert_eq!(s.strip_overhead(""), "");
    }

    #[test]
    fn separator_lines_are_content() {
        let s = Splitter::default();
        let text = "0800\nfirst אות מעבר second";
        assert_eq!(s.strip_overhead(text), "first אות מעבר second");
    }

    #[test]
    fn split_paragraphs() {
        let s = Splitter::default();
        let text = "0800\ntemplate\nfirst one\nאות מעבר\nsecond one\nאות מעבר\nthird\none\ntrailer";
        assert_eq!(
            s.split(text).unwrap(),
            vec!["first one", "second one", "third\none"]
        );
    }

    #[test]
    fn no_separator() {
        let s = Splitter::default();
        let text = "0800\ntemplate\nfirst one\nsecond one\ntrailer";
        assert_eq!(s.split(text), Err(SkipReason::NoSeparator));
    }

    #[test]
    fn only_separators() {
        let s = Splitter::default();
        let text = "0800\ntemplate\nאות מעבר\n \nאות מעבר\ntrailer";
        assert_eq!(s.split(text), Err(SkipReason::Empty));
    }
}
