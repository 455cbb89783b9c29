//! Noise removal pipeline: parsed records in, cleaned records out.
use std::path::PathBuf;

use crate::config::Config;
use crate::corpus::ParagraphRecord;
use crate::error::Error;
use crate::filtering::NoiseFilter;
use crate::io::{read_records, write_records};

use super::Pipeline;

pub struct Clean {
    src: PathBuf,
    dst: PathBuf,
    config: Config,
}

impl Clean {
    pub fn new(src: PathBuf, dst: PathBuf, config: Config) -> Self {
        Self { src, dst, config }
    }
}

impl Pipeline<usize> for Clean {
    /// Returns the number of kept records.
    fn run(&self) -> Result<usize, Error> {
        let filter = NoiseFilter::from_settings(&self.config.noise, &self.config.markers)?;
        let records: Vec<ParagraphRecord> = read_records(&self.src)?;
        let cleaned = filter.clean_records(records);
        write_records(&self.dst, &cleaned)?;
        Ok(cleaned.len())
    }
}
