/*! Noise removal

Bulletins embed recurring blocks that carry no news: weather forecasts, traffic updates,
station templates. [NoiseFilter] removes them from paragraphs, along with editorial inserts
and (optionally) stopwords, and drops the paragraphs that end up empty or too short.

Cleaned records also get their broadcast time.
!*/
use std::collections::HashSet;
use std::fs;

use chrono::NaiveDate;
use itertools::Itertools;
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{Markers, NoiseSettings};
use crate::corpus::ParagraphRecord;
use crate::error::Error;
use crate::segment::Normalizer;

use super::{Filter, MinWords, NotBlank};

/// A paragraph record after noise removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanRecord {
    #[serde(flatten)]
    pub record: ParagraphRecord,
    /// broadcast time (`YYYY-MM-DDTHH:MM:SS`), `null` if metadata is not a valid date.
    pub time: Option<String>,
}

/// Broadcast time of a record.
pub fn broadcast_time(record: &ParagraphRecord) -> Option<String> {
    let year = record.year.parse::<i32>().ok()?;
    let month = record.month.parse::<u32>().ok()?;
    let day = record.day.parse::<u32>().ok()?;
    let hour = record.hour.parse::<u32>().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_opt(hour, 0, 0)
        .map(|time| time.format("%Y-%m-%dT%H:%M:%S").to_string())
}

pub struct NoiseFilter {
    patterns: Vec<Regex>,
    annotations: Normalizer,
    stopwords: HashSet<String>,
    remove_stopwords: bool,
    min_words: Option<MinWords>,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        // default patterns are constants known to compile.
        Self::from_settings(&NoiseSettings::default(), &Markers::default()).unwrap()
    }
}

impl NoiseFilter {
    /// Build a filter, compiling patterns and loading the stopwords file if any.
    pub fn from_settings(settings: &NoiseSettings, markers: &Markers) -> Result<Self, Error> {
        let patterns = settings
            .patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let mut stopwords: HashSet<String> = settings.stopwords.iter().cloned().collect();
        if let Some(path) = &settings.stopwords_file {
            let content = fs::read_to_string(path)?;
            stopwords.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(String::from),
            );
            debug!("{} stopwords after loading {:?}", stopwords.len(), path);
        }

        Ok(Self {
            patterns,
            annotations: Normalizer::new(&markers.annotations),
            stopwords,
            remove_stopwords: settings.remove_stopwords,
            min_words: settings.min_words.map(MinWords::with_min_words),
        })
    }

    /// each pattern match is replaced by a space.
    fn remove_patterns(&self, paragraph: &str) -> String {
        let mut s = paragraph.to_string();
        for pattern in &self.patterns {
            s = pattern.replace_all(&s, " ").into_owned();
        }
        s
    }

    fn remove_annotations(&self, paragraph: &str) -> String {
        paragraph
            .split('\n')
            .filter(|line| !line.is_empty() && !self.annotations.is_annotation(line))
            .join("\n")
    }

    fn remove_stopwords(&self, paragraph: &str) -> String {
        paragraph
            .split_whitespace()
            .filter(|w| !self.stopwords.contains(*w))
            .join(" ")
    }

    /// Clean a paragraph.
    pub fn clean(&self, paragraph: &str) -> String {
        let s = self.remove_patterns(paragraph);
        let s = self.remove_annotations(&s);
        if self.remove_stopwords {
            self.remove_stopwords(&s)
        } else {
            s
        }
    }

    /// Whether a cleaned paragraph is worth keeping.
    pub fn keep(&self, cleaned: &str) -> bool {
        NotBlank.detect(cleaned) && self.min_words.as_ref().map_or(true, |f| f.detect(cleaned))
    }

    /// Clean records, dropping the ones with nothing left.
    pub fn clean_records(&self, records: Vec<ParagraphRecord>) -> Vec<CleanRecord> {
        let nb_records = records.len();
        let cleaned: Vec<CleanRecord> = records
            .into_iter()
            .filter_map(|mut record| {
                record.paragraph = self.clean(&record.paragraph);
                if !self.keep(&record.paragraph) {
                    return None;
                }
                let time = broadcast_time(&record);
                Some(CleanRecord { record, time })
            })
            .collect();

        info!(
            "kept {}/{} paragraphs after noise removal",
            cleaned.len(),
            nb_records
        );
        cleaned
    }
}
