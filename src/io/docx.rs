/*! Word processor archive reading

A `.docx` file is a zip archive whose text lives in `word/document.xml`.
The archive is parsed by `docx-rs`, and text is taken from the runs of body paragraphs,
one line per paragraph. Tabs and explicit line breaks are kept.

Headers, footers, notes and tables are not read: the hour title of a bulletin is expected
in the body.

An archive that cannot be opened or whose parts are not well-formed is an error.
!*/
use std::fs;
use std::path::Path;

use docx_rs::{Document, DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::error::Error;

/// Read the text of a `.docx` document.
pub fn read_docx(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path)?;
    let docx = docx_rs::read_docx(&bytes)?;
    Ok(document_text(&docx.document))
}

/// Text of the body paragraphs, each one ending with a line break.
pub fn document_text(document: &Document) -> String {
    let mut text = String::new();
    for child in &document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            text.push_str(&paragraph_text(paragraph));
            text.push('\n');
        }
    }
    text
}

/// Runs of a paragraph, concatenated.
pub fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use docx_rs::{BreakType, Docx, Run};

    use super::*;

    fn paragraph(text: &str) -> Paragraph {
        Paragraph::new().add_run(Run::new().add_text(text))
    }

    #[test]
    fn runs_tabs_and_breaks() {
        let p = Paragraph::new()
            .add_run(Run::new().add_text("a").add_tab().add_text("b"))
            .add_run(Run::new().add_break(BreakType::TextWrapping).add_text("c"));
        assert_eq!(paragraph_text(&p), "a\tb\nc");
    }

    #[test]
    fn one_line_per_paragraph() {
        let docx = Docx::new()
            .add_paragraph(paragraph("0800"))
            .add_paragraph(Paragraph::new())
            .add_paragraph(paragraph("מהדורת החדשות"));
        assert_eq!(document_text(&docx.document), "0800\n\nמהדורת החדשות\n");
    }

    #[test]
    fn read_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("150321.docx");

        let file = std::fs::File::create(&path).unwrap();
        Docx::new()
            .add_paragraph(paragraph("0800"))
            .add_paragraph(paragraph("ראש הממשלה"))
            .build()
            .pack(file)
            .unwrap();

        assert_eq!(read_docx(&path).unwrap(), "0800\nראש הממשלה\n");
    }

    #[test]
    fn not_an_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("150321.docx");
        std::fs::write(&path, "plain text").unwrap();
        assert!(matches!(read_docx(&path), Err(Error::Docx(_))));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            read_docx(Path::new("does/not/exist.docx")),
            Err(Error::Io(_))
        ));
    }
}
