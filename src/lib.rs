pub mod config;
pub mod corpus;
pub mod error;
pub mod filtering;
pub mod io;
pub mod lemmatize;
pub mod pipelines;
pub mod segment;
pub mod skip;
