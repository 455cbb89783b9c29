//! paragraph-level filtering
use super::Filter;

/// Simple length filter.
/// Returns `false` if provided paragraph has [MinWords::min_words] whitespace-separated words or less.
///
/// [MinWords::min_words] is 5 by default.
pub struct MinWords {
    min_words: usize,
}

impl MinWords {
    /// specify a minimum word count
    pub fn with_min_words(min_words: usize) -> Self {
        Self { min_words }
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }
}

impl Filter<&str> for MinWords {
    fn detect(&self, paragraph: &str) -> bool {
        paragraph.split_whitespace().count() > self.min_words
    }
}

impl Default for MinWords {
    fn default() -> Self {
        MinWords { min_words: 5 }
    }
}

/// Rejects paragraphs that are only made of whitespace.
#[derive(Default)]
pub struct NotBlank;

impl Filter<&str> for NotBlank {
    fn detect(&self, paragraph: &str) -> bool {
        !paragraph.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_words_default() {
        let f = MinWords::default();
        assert!(f.detect("אחת שתיים שלוש ארבע חמש שש"));
        assert!(!f.detect("אחת שתיים שלוש ארבע חמש"));
        assert!(!f.detect("   "));
    }

    #[test]
    fn not_blank() {
        let f = NotBlank;
        assert!(f.detect(" a "));
        assert!(!f.detect(" \n\t"));
        assert!(!f.detect(""));
    }
}
