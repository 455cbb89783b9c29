//! Lemmatization of record batches.
use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::filtering::CleanRecord;

use super::Lemmatizer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LemmatizedRecord {
    #[serde(flatten)]
    pub record: CleanRecord,
    /// space-separated lemmas, empty if analysis failed.
    pub lemmatized_text: String,
    pub nemo_status: bool,
}

/// Remove characters the analysis service chokes on.
pub fn prepare(text: &str) -> String {
    text.replace(['<', '>'], "")
}

fn lemmatize_one(lemmatizer: &impl Lemmatizer, record: CleanRecord) -> LemmatizedRecord {
    let text = prepare(&record.record.paragraph);
    let (lemmatized_text, nemo_status) = match lemmatizer.lemmatize(&text) {
        Ok(lemmas) => (lemmas.join(" "), true),
        Err(e) => {
            error!("Error in text {:?}: {}", text, e);
            (String::new(), false)
        }
    };

    LemmatizedRecord {
        record,
        lemmatized_text,
        nemo_status,
    }
}

/// Lemmatize every record.
pub fn lemmatize_all(
    lemmatizer: &impl Lemmatizer,
    records: Vec<CleanRecord>,
) -> Vec<LemmatizedRecord> {
    let nb_records = records.len();
    let lemmatized: Vec<LemmatizedRecord> = records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            debug!("lemmatizing {}/{}", idx + 1, nb_records);
            lemmatize_one(lemmatizer, record)
        })
        .collect();

    info!(
        "lemmatized {}/{} paragraphs",
        lemmatized.iter().filter(|r| r.nemo_status).count(),
        nb_records
    );
    lemmatized
}

/// Re-submit records whose lemmatization failed, keeping the others as they are.
pub fn repair(
    lemmatizer: &impl Lemmatizer,
    records: Vec<LemmatizedRecord>,
) -> Vec<LemmatizedRecord> {
    let nb_failed = records.iter().filter(|r| !r.nemo_status).count();
    info!("{} paragraphs to repair", nb_failed);

    let repaired: Vec<LemmatizedRecord> = records
        .into_iter()
        .map(|r| {
            if r.nemo_status {
                r
            } else {
                lemmatize_one(lemmatizer, r.record)
            }
        })
        .collect();

    let nb_still_failed = repaired.iter().filter(|r| !r.nemo_status).count();
    info!("fixed {}/{} paragraphs", nb_failed - nb_still_failed, nb_failed);
    repaired
}
