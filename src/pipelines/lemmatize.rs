//! Lemmatization pipeline.
//!
//! Two modes:
//! - default: cleaned records in, lemmatized records out,
//! - repair: lemmatized records in, failed ones re-submitted.
use std::path::PathBuf;

use crate::error::Error;
use crate::filtering::CleanRecord;
use crate::io::{read_records, write_records};
use crate::lemmatize::{self, LemmatizedRecord, Lemmatizer};

use super::Pipeline;

pub struct Lemmatize<L: Lemmatizer> {
    src: PathBuf,
    dst: PathBuf,
    lemmatizer: L,
    repair: bool,
}

impl<L: Lemmatizer> Lemmatize<L> {
    pub fn new(src: PathBuf, dst: PathBuf, lemmatizer: L, repair: bool) -> Self {
        Self {
            src,
            dst,
            lemmatizer,
            repair,
        }
    }
}

impl<L: Lemmatizer> Pipeline<usize> for Lemmatize<L> {
    /// Returns the number of records that still have no lemmas.
    fn run(&self) -> Result<usize, Error> {
        let lemmatized = if self.repair {
            let records: Vec<LemmatizedRecord> = read_records(&self.src)?;
            lemmatize::repair(&self.lemmatizer, records)
        } else {
            let records: Vec<CleanRecord> = read_records(&self.src)?;
            lemmatize::lemmatize_all(&self.lemmatizer, records)
        };

        write_records(&self.dst, &lemmatized)?;
        Ok(lemmatized.iter().filter(|r| !r.nemo_status).count())
    }
}
