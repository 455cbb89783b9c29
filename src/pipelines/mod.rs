//! Pipelines.
//!
//! Each stage of the corpus preparation is a pipeline reading and writing record files,
//! and the module provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
//!
//! 1. [Parse]: bulletin archive -> paragraph records
//! 1. [Clean]: paragraph records -> cleaned records
//! 1. [Lemmatize]: cleaned records -> lemmatized records
pub mod clean;
pub mod lemmatize;
pub mod parse;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use clean::Clean;
pub use lemmatize::Lemmatize;
pub use parse::Parse;
pub use pipeline::Pipeline;
