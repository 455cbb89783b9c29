//! Paragraph records and their temporal metadata.
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// `DDMMYY` date in bulletin filenames.
    static ref FILENAME_DATE: Regex = Regex::new(r"[0-9]{6}").unwrap();
}

/// One paragraph of a bulletin, with the time of its broadcast.
///
/// This is the unit of the output artifact, serialized as a flat object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    pub paragraph: String,
    /// two-digit hour (`"08"`).
    pub hour: String,
    pub day: String,
    pub month: String,
    /// four-digit year, from the year directory.
    pub year: String,
    /// path of the source document.
    pub filename: String,
}

/// `DDMMYY` date found in a bulletin filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BulletinDate(String);

impl BulletinDate {
    /// First run of six digits in `name`.
    pub fn from_filename(name: &str) -> Option<Self> {
        FILENAME_DATE
            .find(name)
            .map(|m| BulletinDate(m.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn day(&self) -> &str {
        &self.0[..2]
    }

    pub fn month(&self) -> &str {
        &self.0[2..4]
    }

    /// two last digits of the year.
    pub fn short_year(&self) -> &str {
        &self.0[4..]
    }
}

impl fmt::Display for BulletinDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a bulletin: at most one document provides the paragraphs of a given key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateHourKey {
    date: BulletinDate,
    hour: String,
}

impl DateHourKey {
    pub fn new(date: BulletinDate, hour: &str) -> Self {
        Self {
            date,
            hour: hour.to_string(),
        }
    }

    pub fn date(&self) -> &BulletinDate {
        &self.date
    }

    pub fn hour(&self) -> &str {
        &self.hour
    }
}

impl fmt::Display for DateHourKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.hour)
    }
}

/// Attach broadcast metadata to each paragraph, keeping their order.
pub fn assemble(
    paragraphs: Vec<String>,
    hour: &str,
    day: &str,
    month: &str,
    year: &str,
    filename: &str,
) -> Vec<ParagraphRecord> {
    paragraphs
        .into_iter()
        .map(|paragraph| ParagraphRecord {
            paragraph,
            hour: hour.to_string(),
            day: day.to_string(),
            month: month.to_string(),
            year: year.to_string(),
            filename: filename.to_string(),
        })
        .collect()
}
