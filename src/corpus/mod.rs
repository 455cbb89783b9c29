/*! Corpus assembly

Walks the bulletin archive, segments each document and assembles the paragraphs
into a single, date-indexed list of [ParagraphRecord].
!*/
mod dedup;
mod record;
pub mod walker;

pub use dedup::DedupIndex;
pub use record::{assemble, BulletinDate, DateHourKey, ParagraphRecord};
pub use walker::{Walker, WalkReport};
