//! Bulletin parsing pipeline.
//!
//! Walks the archive and writes every paragraph record into a single JSON file.
use std::path::PathBuf;

use log::warn;

use crate::config::Config;
use crate::corpus::{WalkReport, Walker};
use crate::error::Error;
use crate::io::write_records;

use super::Pipeline;

pub struct Parse {
    config: Config,
    dst: PathBuf,
}

impl Parse {
    pub fn new(config: Config, dst: PathBuf) -> Self {
        if config.layout.years.is_empty() {
            warn!("No year directory configured! Nothing will be parsed.");
        }
        Self { config, dst }
    }
}

impl Pipeline<WalkReport> for Parse {
    fn run(&self) -> Result<WalkReport, Error> {
        let walker = Walker::new(self.config.layout.clone(), &self.config.markers);
        let report = walker.walk()?;
        write_records(&self.dst, &report.records)?;
        Ok(report)
    }
}
