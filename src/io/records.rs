/*! Record files

Records are stored as a single JSON array of flat objects, in processing order.
Every stage of the pipeline reads and writes this format.
!*/
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Error;

/// Write `records` to `dst`, replacing any existing file.
pub fn write_records<T: Serialize>(dst: &Path, records: &[T]) -> Result<(), Error> {
    let mut writer = BufWriter::new(File::create(dst)?);
    serde_json::to_writer(&mut writer, records)?;
    writer.flush()?;
    info!("wrote {} records to {:?}", records.len(), dst);
    Ok(())
}

pub fn read_records<T: DeserializeOwned>(src: &Path) -> Result<Vec<T>, Error> {
    let reader = BufReader::new(File::open(src)?);
    let records: Vec<T> = serde_json::from_reader(reader)?;
    info!("read {} records from {:?}", records.len(), src);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{assemble, ParagraphRecord};

    #[test]
    fn write_then_read() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("news_paragraphs.json");

        let records = assemble(
            vec!["ראש הממשלה".to_string(), "מזג האוויר".to_string()],
            "08",
            "15",
            "03",
            "2021",
            "150321.docx",
        );
        write_records(&path, &records).unwrap();

        let read: Vec<ParagraphRecord> = read_records(&path).unwrap();
        assert_eq!(read, records);
    }

    #[test]
    fn flat_array() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("news_paragraphs.json");

        let records = assemble(vec!["p".to_string()], "21", "01", "02", "2020", "f.docx");
        write_records(&path, &records).unwrap();

        let value: serde_json::Value = read_records::<serde_json::Value>(&path)
            .unwrap()
            .remove(0);
        assert_eq!(value["paragraph"], "p");
        assert_eq!(value["hour"], "21");
        assert_eq!(value["filename"], "f.docx");
    }

    #[test]
    fn missing_file() {
        let res: Result<Vec<ParagraphRecord>, Error> = read_records(Path::new("does/not/exist.json"));
        assert!(matches!(res, Err(Error::Io(_))));
    }
}
