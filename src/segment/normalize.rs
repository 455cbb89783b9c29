//! Text normalization of a bulletin span.
//!
//! - lines holding an editorial insert marker are dropped entirely,
//! - numbers injected at the start of lines are removed,
//! - blank lines are removed.
//!
//! Normalizing an already normalized text does not change it.
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::ANNOTATION_TOKENS;

lazy_static! {
    static ref LEADING_NUMERALS: Regex = Regex::new(r"\n\d+").unwrap();
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    annotations: Vec<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&ANNOTATION_TOKENS)
    }
}

impl Normalizer {
    pub fn new<S: AsRef<str>>(annotations: &[S]) -> Self {
        Self {
            annotations: annotations
                .iter()
                .map(|a| a.as_ref().to_string())
                .filter(|a| !a.is_empty())
                .collect(),
        }
    }

    /// true if the line holds an editorial insert.
    pub fn is_annotation(&self, line: &str) -> bool {
        self.annotations.iter().any(|a| line.contains(a.as_str()))
    }

    pub fn normalize(&self, text: &str) -> String {
        let kept = text
            .split('\n')
            .filter(|line| !self.is_annotation(line))
            .join("\n");
        let kept = LEADING_NUMERALS.replace_all(&kept, "\n");
        kept.split('\n')
            .filter(|line| !line.trim().is_empty())
            .join("\n")
    }
}
