/*! Bulletin boundaries

A bulletin starts at its hour title and ends at whichever comes first of:
- a sign-off phrase ([Terminator::Literal]),
- the headline of the next bulletin ([Terminator::NextHeadline]).

Every terminator proposes a candidate end offset, and the nearest one wins.

Offsets are byte offsets into the document text, always on `char` boundaries.
!*/
use std::ops::Range;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::skip::SkipReason;

lazy_static! {
    /// hour title of a bulletin headline (`2200`, `0730`...) ending its line.
    static ref NEXT_HEADLINE: Regex = Regex::new(r"\d\d\d0\s*\n").unwrap();
}

/// Characters after the start marker where headline search begins,
/// so that the current bulletin's own headline is not matched.
const HEADLINE_SKIP: usize = 10;

/// Characters between the matched hour title and the candidate end.
/// This lands the end on the line holding the next headline.
const HEADLINE_BACKTRACK: usize = 7;

/// Content region of a bulletin inside its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundarySpan {
    start: usize,
    end: usize,
}

impl BoundarySpan {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Something that can end a bulletin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminator {
    /// First occurrence of the phrase at or after the start.
    Literal(String),
    /// Next bulletin headline, or the last character of the text if there is none.
    NextHeadline,
}

impl Terminator {
    /// Candidate end offset for a bulletin starting at `start`.
    pub fn candidate(&self, text: &str, start: usize) -> Option<usize> {
        match self {
            Terminator::Literal(phrase) => text[start..].find(phrase.as_str()).map(|i| start + i),
            Terminator::NextHeadline => {
                let from = advance(text, start, HEADLINE_SKIP);
                let found = NEXT_HEADLINE
                    .find(&text[from..])
                    .map(|m| retreat(text, from + m.start(), HEADLINE_BACKTRACK));
                Some(found.unwrap_or_else(|| last_char(text)))
            }
        }
    }
}

/// byte offset `n` chars after `from`, clamped to the text length.
fn advance(text: &str, from: usize, n: usize) -> usize {
    text[from..]
        .char_indices()
        .map(|(i, _)| from + i)
        .chain(std::iter::once(text.len()))
        .nth(n)
        .unwrap_or(text.len())
}

/// byte offset `n` chars before `at`, clamped to 0.
fn retreat(text: &str, at: usize, n: usize) -> usize {
    text[..at]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map_or(at, |(i, _)| i)
}

fn last_char(text: &str) -> usize {
    text.char_indices().last().map_or(0, |(i, _)| i)
}

/// Finds bulletin boundaries using a set of [Terminator]s.
#[derive(Debug, Clone)]
pub struct Locator {
    terminators: Vec<Terminator>,
}

impl Locator {
    /// Locator ending bulletins at the provided sign-off phrases or at the next headline.
    ///
    /// Empty phrases are ignored.
    pub fn new<S: AsRef<str>>(end_markers: &[S]) -> Self {
        let mut terminators: Vec<Terminator> = end_markers
            .iter()
            .map(|m| Terminator::Literal(m.as_ref().to_string()))
            .collect();
        terminators.push(Terminator::NextHeadline);
        Self::with_terminators(terminators)
    }

    /// Empty [Terminator::Literal]s are ignored, as they would end every bulletin at its start.
    pub fn with_terminators(terminators: Vec<Terminator>) -> Self {
        Self {
            terminators: terminators
                .into_iter()
                .filter(|t| !matches!(t, Terminator::Literal(phrase) if phrase.is_empty()))
                .collect(),
        }
    }

    pub fn terminators(&self) -> &[Terminator] {
        &self.terminators
    }

    /// Locate the bulletin opened by `start_marker`.
    ///
    /// Fails with [SkipReason::MissingStartMarker] if the marker is absent,
    /// and with [SkipReason::EmptySpan] if the nearest terminator leaves no room for content.
    pub fn try_locate(&self, text: &str, start_marker: &str) -> Result<BoundarySpan, SkipReason> {
        let start = text
            .find(start_marker)
            .ok_or(SkipReason::MissingStartMarker)?;
        let end = self
            .terminators
            .iter()
            .filter_map(|t| t.candidate(text, start))
            .min()
            .unwrap_or(text.len());

        if end <= start {
            debug!("empty bulletin span at {}", start);
            return Err(SkipReason::EmptySpan);
        }

        Ok(BoundarySpan { start, end })
    }

    /// Same as [Locator::try_locate], without the reason.
    pub fn locate(&self, text: &str, start_marker: &str) -> Option<BoundarySpan> {
        self.try_locate(text, start_marker).ok()
    }
}

/// Locate a bulletin using sign-off phrases and the next headline as terminators.
pub fn locate<S: AsRef<str>>(
    text: &str,
    start_marker: &str,
    end_markers: &[S],
) -> Option<BoundarySpan> {
    Locator::new(end_markers).locate(text, start_marker)
}
