/*! Lemmatization

Cleaned paragraphs are sent to a morphological analysis service to get their lemmas.
The service is known to fail on some inputs: failures are recorded per paragraph
(`nemo_status: false`) and never stop a batch. A repair pass re-submits failed paragraphs only.
!*/
mod bridge;
pub mod lattice;
mod nemo;

use crate::error::Error;

pub use bridge::{lemmatize_all, prepare, repair, LemmatizedRecord};
pub use nemo::{Nemo, DEFAULT_ENDPOINT};

/// Something that gives the lemmas of a text.
pub trait Lemmatizer {
    fn lemmatize(&self, text: &str) -> Result<Vec<String>, Error>;
}
