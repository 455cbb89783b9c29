/*! Corpus walking

Walks `<year>/<hour bucket>/<month>/<document>` and gathers the paragraphs of every bulletin.

# Processing
1. Documents are listed for each year and hour bucket (in configuration order),
   then sorted by `(year, hour bucket, path)`.
1. Each document is checked (date in filename, year), read and segmented, in parallel.
1. Results are merged in the sorted order: the first document providing a [DateHourKey] wins,
   the following ones are skipped.

Nothing here stops the walk: every issue with a document ends up in [WalkReport::skipped].
!*/
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, error, info, warn};
use rayon::prelude::*;

use crate::config::{HourBucket, Layout, Markers, YearDir};
use crate::error::Error;
use crate::filtering::FilterMut;
use crate::io::docx;
use crate::segment::Segmenter;
use crate::skip::SkipReason;

use super::{assemble, BulletinDate, DateHourKey, DedupIndex, ParagraphRecord};

/// A document to process, with the position of its year and hour bucket in the layout.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    year: usize,
    hour: usize,
    path: PathBuf,
}

impl Candidate {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Result of a walk.
#[derive(Debug, Default)]
pub struct WalkReport {
    pub records: Vec<ParagraphRecord>,
    /// documents that did not contribute, in processing order.
    pub skipped: Vec<(PathBuf, SkipReason)>,
    /// number of documents that contributed records.
    pub documents: usize,
}

impl WalkReport {
    /// number of skipped documents per [SkipReason::kind].
    pub fn skip_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for (_, reason) in &self.skipped {
            *counts.entry(reason.kind()).or_insert(0) += 1;
        }
        counts
    }
}

type Segmented = Result<(BulletinDate, Vec<String>), SkipReason>;

pub struct Walker {
    layout: Layout,
    extension: String,
    /// one per hour bucket, opening on the bucket's hour title.
    segmenters: Vec<Segmenter>,
}

impl Walker {
    pub fn new(layout: Layout, markers: &Markers) -> Self {
        let segmenters = layout
            .hours
            .iter()
            .map(|bucket| Segmenter::new(&bucket.title, markers))
            .collect();
        Self {
            layout,
            extension: markers.extension.clone(),
            segmenters,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// List documents, sorted in processing order.
    ///
    /// Unreadable entries are logged and ignored.
    pub fn candidates(&self) -> Result<Vec<Candidate>, Error> {
        let mut candidates = Vec::new();
        for (year_idx, year) in self.layout.years.iter().enumerate() {
            if !year.path.is_dir() {
                warn!("[{}] year directory {:?} does not exist", year.label, year.path);
                continue;
            }
            for (hour_idx, bucket) in self.layout.hours.iter().enumerate() {
                let pattern = format!(
                    "{}/{}/*/*.{}",
                    Pattern::escape(&year.path.to_string_lossy()),
                    Pattern::escape(&bucket.dir),
                    Pattern::escape(&self.extension),
                );
                debug!("listing {}", pattern);

                let paths = glob::glob(&pattern)?.filter_map(|entry| {
                    entry.map_or_else(
                        |e| {
                            error!("error listing documents: {}", e);
                            None
                        },
                        Some,
                    )
                });

                candidates.extend(paths.filter(|p| p.is_file()).map(|path| Candidate {
                    year: year_idx,
                    hour: hour_idx,
                    path,
                }));
            }
        }

        candidates.sort();
        Ok(candidates)
    }

    /// Date checks, reading and segmentation of a single document.
    fn process(&self, candidate: &Candidate) -> Segmented {
        let year = &self.layout.years[candidate.year];
        let name = candidate
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        let date = BulletinDate::from_filename(&name).ok_or(SkipReason::NoDateInName)?;
        check_year(&date, year)?;

        let text = docx::read_docx(&candidate.path)
            .map_err(|e| SkipReason::MalformedArchive(e.to_string()))?;

        let paragraphs = self.segmenters[candidate.hour].try_segment(&text)?;
        Ok((date, paragraphs))
    }

    /// Merge a processed document into the report.
    fn merge(
        &self,
        report: &mut WalkReport,
        index: &mut DedupIndex,
        candidate: Candidate,
        segmented: Segmented,
    ) {
        let bucket: &HourBucket = &self.layout.hours[candidate.hour];
        let year: &YearDir = &self.layout.years[candidate.year];

        let skipped = match segmented {
            Ok((date, paragraphs)) => {
                let key = DateHourKey::new(date.clone(), &bucket.title);
                if index.detect_mut(&key) {
                    let filename = candidate.path.to_string_lossy();
                    report.records.extend(assemble(
                        paragraphs,
                        bucket.hour(),
                        date.day(),
                        date.month(),
                        &year.label,
                        &filename,
                    ));
                    report.documents += 1;
                    None
                } else {
                    Some(SkipReason::Duplicate(key))
                }
            }
            Err(reason) => Some(reason),
        };

        if let Some(reason) = skipped {
            match &reason {
                SkipReason::NoDateInName => {
                    warn!("Skipped file {:?} - no date in name", candidate.path)
                }
                SkipReason::MalformedArchive(_) => {
                    warn!("Skipped file {:?} - {}", candidate.path, reason)
                }
                _ => debug!("Skipped file {:?} - {}", candidate.path, reason),
            }
            report.skipped.push((candidate.path, reason));
        }
    }

    /// Walk the corpus.
    ///
    /// Only fails if the document listing cannot be built.
    pub fn walk(&self) -> Result<WalkReport, Error> {
        let candidates = self.candidates()?;
        info!("{} documents to process", candidates.len());

        // indexed parallel iterator: results keep the candidates order.
        let segmented: Vec<Segmented> = candidates.par_iter().map(|c| self.process(c)).collect();

        let mut report = WalkReport::default();
        let mut index = DedupIndex::default();
        for (candidate, segmented) in candidates.into_iter().zip(segmented) {
            self.merge(&mut report, &mut index, candidate, segmented);
        }

        info!(
            "Got {} paragraphs from {} documents, skipped {} ({:?})",
            report.records.len(),
            report.documents,
            report.skipped.len(),
            report.skip_counts()
        );
        Ok(report)
    }
}

/// Checks that the document date belongs to its year directory.
fn check_year(date: &BulletinDate, year: &YearDir) -> Result<(), SkipReason> {
    if date.short_year() == year.short() {
        Ok(())
    } else {
        Err(SkipReason::YearMismatch {
            date: date.to_string(),
            year: year.label.clone(),
        })
    }
}
