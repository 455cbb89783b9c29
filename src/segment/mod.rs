/*! Document segmentation

Turns the text of one document into the paragraphs of one bulletin:

1. [boundary] locates the bulletin inside the document,
1. [normalize] removes editorial inserts, injected numbers and blank lines,
1. [split] removes headline/template/trailer lines and splits on the paragraph separator.

[Segmenter] composes the three.
!*/
pub mod boundary;
pub mod normalize;
pub mod segmenter;
pub mod split;

pub use boundary::{locate, BoundarySpan, Locator, Terminator};
pub use normalize::Normalizer;
pub use segmenter::{segment, Segmenter};
pub use split::Splitter;
