//! Reasons for a document not contributing any paragraph.
//!
//! None of these stop a run: they are logged and reported.
use std::fmt;

use crate::corpus::DateHourKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// the hour title is not in the document (bulletin of another hour).
    MissingStartMarker,
    /// the hour title is found, but a terminator leaves no text after it.
    EmptySpan,
    /// no paragraph separator in the bulletin.
    NoSeparator,
    /// separators were found but only delimit blank text.
    Empty,
    NoDateInName,
    /// filename date does not belong to the year directory.
    YearMismatch { date: String, year: String },
    /// another document already provided this bulletin.
    Duplicate(DateHourKey),
    /// the archive could not be opened or decoded.
    MalformedArchive(String),
}

impl SkipReason {
    /// Short, stable name used when counting skips.
    pub fn kind(&self) -> &'static str {
        match self {
            SkipReason::MissingStartMarker => "missing_start_marker",
            SkipReason::EmptySpan => "empty_span",
            SkipReason::NoSeparator => "no_separator",
            SkipReason::Empty => "empty",
            SkipReason::NoDateInName => "no_date_in_name",
            SkipReason::YearMismatch { .. } => "year_mismatch",
            SkipReason::Duplicate(_) => "duplicate",
            SkipReason::MalformedArchive(_) => "malformed_archive",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingStartMarker => write!(f, "start marker not found"),
            SkipReason::EmptySpan => write!(f, "nothing after start marker"),
            SkipReason::NoSeparator => write!(f, "no paragraph separator"),
            SkipReason::Empty => write!(f, "no content between separators"),
            SkipReason::NoDateInName => write!(f, "no date in name"),
            SkipReason::YearMismatch { date, year } => {
                write!(f, "date {} does not belong to year {}", date, year)
            }
            SkipReason::Duplicate(key) => write!(f, "duplicate of bulletin {}", key),
            SkipReason::MalformedArchive(e) => write!(f, "malformed archive: {}", e),
        }
    }
}
