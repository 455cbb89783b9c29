/*! Filtering utilities

Filters implement [filter::Filter], [filter::FilterMut] or both:
- [filter::Filter] is implemented for filters that do not have state (see [paragraph::MinWords] for example)
- [filter::FilterMut] is implemented for filter that do have state (see [crate::corpus::DedupIndex]).

[noise::NoiseFilter] is the text cleaning stage run on assembled records.
! */
mod filter;
pub mod noise;
mod paragraph;

pub use filter::Filter;
pub use filter::FilterMut;
pub use noise::{CleanRecord, NoiseFilter};
pub use paragraph::{MinWords, NotBlank};
