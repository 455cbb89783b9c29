//! Client of a NEMO morphological analysis service.
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::Error;

use super::lattice;
use super::Lemmatizer;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8090";
const MORPH_ROUTE: &str = "morph_hybrid_align_tokens";

#[derive(Serialize)]
struct MorphRequest<'a> {
    sentences: &'a str,
}

#[derive(Deserialize)]
struct MorphAnalysis {
    md_lattice: String,
}

/// holds the analysis route and the http client that will make the requests.
pub struct Nemo {
    url: Url,
    client: reqwest::blocking::Client,
}

impl Nemo {
    /// Client for the service at `endpoint` (e.g. [DEFAULT_ENDPOINT]).
    pub fn new(endpoint: &str) -> Result<Self, Error> {
        let base = Url::parse(endpoint)
            .map_err(|e| Error::Custom(format!("invalid endpoint {}: {}", endpoint, e)))?;
        let url = base
            .join(MORPH_ROUTE)
            .map_err(|e| Error::Custom(format!("invalid endpoint {}: {}", endpoint, e)))?;
        debug!("morphological analysis at {}", url);

        Ok(Self {
            url,
            client: reqwest::blocking::Client::new(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Lemmatizer for Nemo {
    fn lemmatize(&self, text: &str) -> Result<Vec<String>, Error> {
        let analyses: Vec<MorphAnalysis> = self
            .client
            .post(self.url.clone())
            .header(ACCEPT, "application/json")
            .json(&MorphRequest { sentences: text })
            .send()?
            .error_for_status()?
            .json()?;

        let analysis = analyses
            .into_iter()
            .next()
            .ok_or_else(|| Error::Lattice("empty analysis".to_string()))?;
        lattice::lemmas(&analysis.md_lattice)
    }
}
