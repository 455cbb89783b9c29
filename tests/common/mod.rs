//! Synthetic bulletin archives.
#![allow(dead_code)]
use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use docx_rs::{Docx, Paragraph, Run};
use zip::write::FileOptions;
use zip::{ZipArchive, ZipWriter};

/// Write a `.docx` holding one paragraph per line of `text` at `path`,
/// creating parent directories.
pub fn write_docx(path: &Path, text: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let docx = text.lines().fold(Docx::new(), |docx, line| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)))
    });
    docx.build().pack(File::create(path).unwrap()).unwrap();
}

/// Replace (or add) the archive part `name` of the document at `path`.
pub fn replace_part(path: &Path, name: &str, content: &[u8]) {
    let mut src = ZipArchive::new(Cursor::new(std::fs::read(path).unwrap())).unwrap();
    let mut dst = ZipWriter::new(File::create(path).unwrap());

    for i in 0..src.len() {
        let mut part = src.by_index(i).unwrap();
        let part_name = part.name().to_string();
        if part_name == name {
            continue;
        }
        let mut buf = Vec::new();
        part.read_to_end(&mut buf).unwrap();
        dst.start_file(part_name, FileOptions::default()).unwrap();
        dst.write_all(&buf).unwrap();
    }

    dst.start_file(name, FileOptions::default()).unwrap();
    dst.write_all(content).unwrap();
    dst.finish().unwrap();
}

/// Bulletin opened by `hour`, with one paragraph per item of `paragraphs`.
pub fn bulletin(hour: &str, paragraphs: &[&str]) -> String {
    format!(
        "גלי צהל {hour}\nמהדורת החדשות\n{}\nאלה החדשות\nאות סיום\n",
        paragraphs.join("\nאות מעבר\n"),
        hour = hour
    )
}

/// `<root>/<year>/<hour dir>/<month>/<name>`
pub fn doc_path(root: &Path, year: &str, hour_dir: &str, month: &str, name: &str) -> PathBuf {
    root.join(year).join(hour_dir).join(month).join(name)
}
