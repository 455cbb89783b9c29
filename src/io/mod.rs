/*!
# IO utilities

Reading of bulletin documents, reading and writing of record files.
!*/
pub mod docx;
mod records;

pub use records::{read_records, write_records};
