//! # Bulletins
//!
//! Extraction of paragraph records from news bulletin transcripts,
//! and preparation of these records for linguistic annotation.
//!
//! ## Getting started
//!
//! ```sh
//! bulletins 0.1.0
//! news bulletin paragraph extraction tool.
//!
//! USAGE:
//!     bulletins <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     clean        Remove noise from paragraph records
//!     help         Prints this message or the help of the given subcommand(s)
//!     lemmatize    Lemmatize cleaned records
//!     parse        Extract paragraph records from a bulletin archive
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=info bulletins parse ...`).
use std::path::Path;

use structopt::StructOpt;

use bulletins::config::{Config, Layout, DEFAULT_YEARS};
use bulletins::error::Error;
use bulletins::lemmatize::Nemo;
use bulletins::pipelines::{self, Pipeline};

#[macro_use]
extern crate log;

mod cli;

fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    match path {
        Some(path) => Config::from_path(path),
        None => Ok(Config::default()),
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Bulletins::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Bulletins::Parse(p) => {
            let mut config = load_config(p.config.as_deref())?;
            if let Some(root) = &p.root {
                let years = if p.years.is_empty() {
                    DEFAULT_YEARS.iter().map(|y| y.to_string()).collect()
                } else {
                    p.years
                };
                config.layout = Layout {
                    hours: config.layout.hours,
                    ..Layout::from_root(root, &years)
                };
            }
            if config.layout.years.is_empty() {
                return Err(Error::Custom(
                    "no year directory: provide --root or a configuration with years".to_string(),
                ));
            }

            let report = pipelines::Parse::new(config, p.dst).run()?;
            for (reason, count) in report.skip_counts() {
                info!("skipped {} documents: {}", count, reason);
            }
        }

        cli::Bulletins::Clean(c) => {
            let mut config = load_config(c.config.as_deref())?;
            config.noise.remove_stopwords |= c.stopwords;
            if c.stopwords_file.is_some() {
                config.noise.stopwords_file = c.stopwords_file;
            }
            if c.min_words.is_some() {
                config.noise.min_words = c.min_words;
            }

            let kept = pipelines::Clean::new(c.src, c.dst, config).run()?;
            info!("{} cleaned records", kept);
        }

        cli::Bulletins::Lemmatize(l) => {
            let nemo = Nemo::new(&l.endpoint)?;
            let failed = pipelines::Lemmatize::new(l.src, l.dst, nemo, l.repair).run()?;
            if failed > 0 {
                warn!("{} records have no lemmas, run again with --repair", failed);
            }
        }
    };
    Ok(())
}
