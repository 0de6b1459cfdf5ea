//! Per-format text extractors
//!
//! Each extractor maps one declared media type to a plain-text rendition of
//! the file. Extraction is pure: bytes in, text (or a per-file error) out.

use calamine::Reader;
use std::io::Cursor;

use crate::error::{Error, Result};

/// Media types accepted by the upload gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Docx,
    Xls,
    Xlsx,
    Csv,
    Text,
    Json,
    OctetStream,
}

impl MediaType {
    /// Parse a declared media type, ignoring parameters such as `;charset=`.
    ///
    /// Returns `None` for types outside the allow-list; the upload gate
    /// rejects those before the coordinator ever sees them.
    pub fn from_declared(declared: &str) -> Option<Self> {
        let essence = declared.split(';').next().unwrap_or("").trim();
        match essence {
            "application/pdf" => Some(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            "application/vnd.ms-excel" => Some(Self::Xls),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(Self::Xlsx)
            }
            "text/csv" => Some(Self::Csv),
            "text/plain" => Some(Self::Text),
            "application/json" => Some(Self::Json),
            "application/octet-stream" => Some(Self::OctetStream),
            _ => None,
        }
    }

    /// Canonical MIME string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Xls => "application/vnd.ms-excel",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Csv => "text/csv",
            Self::Text => "text/plain",
            Self::Json => "application/json",
            Self::OctetStream => "application/octet-stream",
        }
    }

    /// Whether an extraction routine exists for this type.
    ///
    /// `application/json` and `application/octet-stream` pass the upload gate
    /// but have no extractor; they must fail loudly at extraction time rather
    /// than slip through as empty text.
    pub fn has_extractor(&self) -> bool {
        !matches!(self, Self::Json | Self::OctetStream)
    }
}

/// Extract plain text from one file's raw bytes.
///
/// Empty output from a well-formed document is a success. Malformed input
/// yields an `ExtractionFailure` tagged with the filename; an allow-listed
/// type without an extractor yields `UnsupportedFormat`.
pub fn extract_text(media_type: MediaType, filename: &str, data: &[u8]) -> Result<String> {
    if !media_type.has_extractor() {
        return Err(Error::UnsupportedFormat(media_type.as_str().to_string()));
    }

    match media_type {
        MediaType::Pdf => extract_pdf(filename, data),
        MediaType::Docx => extract_docx(filename, data),
        MediaType::Xls | MediaType::Xlsx => extract_spreadsheet(filename, data),
        MediaType::Csv | MediaType::Text => extract_plain(filename, data),
        MediaType::Json | MediaType::OctetStream => unreachable!("guarded above"),
    }
}

/// Parse a structured PDF stream to plain text
fn extract_pdf(filename: &str, data: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(data)
        .map_err(|e| Error::extraction(filename, e.to_string()))
}

/// Collect the run text of one paragraph
fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let docx_rs::ParagraphChild::Run(run) = child {
            for child in &run.children {
                if let docx_rs::RunChild::Text(t) = child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

/// Extract raw text from the document XML of an OOXML word-processing file.
///
/// Walks top-level paragraphs and tables; text inside table cells is part of
/// the document and must not be dropped.
fn extract_docx(filename: &str, data: &[u8]) -> Result<String> {
    let doc = docx_rs::read_docx(data).map_err(|e| Error::extraction(filename, e.to_string()))?;

    let mut content = String::new();
    for child in &doc.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(p) => {
                content.push_str(&paragraph_text(p));
                content.push('\n');
            }
            docx_rs::DocumentChild::Table(table) => {
                for row in &table.rows {
                    let docx_rs::TableChild::TableRow(row) = row;
                    for cell in &row.cells {
                        let docx_rs::TableRowChild::TableCell(cell) = cell;
                        for item in &cell.children {
                            if let docx_rs::TableCellContent::Paragraph(p) = item {
                                content.push_str(&paragraph_text(p));
                                content.push('\n');
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    Ok(content)
}

/// Load the first sheet of a workbook and serialize it as CSV text
fn extract_spreadsheet(filename: &str, data: &[u8]) -> Result<String> {
    let cursor = Cursor::new(data.to_vec());
    let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
        .map_err(|e| Error::extraction(filename, e.to_string()))?;

    let first_sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| Error::extraction(filename, "workbook contains no sheets"))?;

    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|e| Error::extraction(filename, e.to_string()))?;

    if range.is_empty() {
        return Err(Error::extraction(filename, "first sheet contains no cells"));
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in range.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                calamine::Data::Empty => String::new(),
                calamine::Data::String(s) => s.clone(),
                calamine::Data::Float(f) => f.to_string(),
                calamine::Data::Int(i) => i.to_string(),
                calamine::Data::Bool(b) => b.to_string(),
                calamine::Data::DateTime(dt) => dt.to_string(),
                _ => String::new(),
            })
            .collect();
        writer
            .write_record(&cells)
            .map_err(|e| Error::extraction(filename, e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::extraction(filename, e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::extraction(filename, e.to_string()))
}

/// Read bytes as text in the declared encoding (UTF-8)
fn extract_plain(filename: &str, data: &[u8]) -> Result<String> {
    String::from_utf8(data.to_vec())
        .map_err(|e| Error::extraction(filename, format!("invalid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_from_declared() {
        assert_eq!(MediaType::from_declared("application/pdf"), Some(MediaType::Pdf));
        assert_eq!(MediaType::from_declared("text/plain"), Some(MediaType::Text));
        assert_eq!(
            MediaType::from_declared("text/plain; charset=utf-8"),
            Some(MediaType::Text)
        );
        assert_eq!(MediaType::from_declared("image/png"), None);
        assert_eq!(MediaType::from_declared(""), None);
    }

    #[test]
    fn test_plain_text_roundtrip() {
        let text = extract_text(MediaType::Text, "notes.txt", b"hello world").unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_empty_plain_text_is_success() {
        let text = extract_text(MediaType::Text, "empty.txt", b"").unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_csv_read_as_text() {
        let text = extract_text(MediaType::Csv, "data.csv", b"a,b\n1,2\n").unwrap();
        assert_eq!(text, "a,b\n1,2\n");
    }

    #[test]
    fn test_invalid_utf8_fails() {
        let err = extract_text(MediaType::Text, "bad.txt", &[0xff, 0xfe, 0x00]).unwrap_err();
        match err {
            Error::ExtractionFailure { filename, .. } => assert_eq!(filename, "bad.txt"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_allow_listed_without_extractor_fails() {
        let err = extract_text(MediaType::Json, "data.json", b"{}").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));

        let err = extract_text(MediaType::OctetStream, "blob.bin", b"\x00\x01").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_well_formed_pdf_extracts_text() {
        let data = include_bytes!("../../testdata/minimal.pdf");
        let text = extract_text(MediaType::Pdf, "minimal.pdf", data).unwrap();
        assert!(text.contains("hello world"));
    }

    #[test]
    fn test_well_formed_docx_extracts_text() {
        let data = include_bytes!("../../testdata/minimal.docx");
        let text = extract_text(MediaType::Docx, "minimal.docx", data).unwrap();
        assert!(text.contains("hello docx"));
    }

    #[test]
    fn test_docx_table_text_is_included() {
        let data = include_bytes!("../../testdata/minimal.docx");
        let text = extract_text(MediaType::Docx, "minimal.docx", data).unwrap();
        assert!(text.contains("table cell text"));
    }

    #[test]
    fn test_well_formed_workbook_renders_first_sheet_as_csv() {
        let data = include_bytes!("../../testdata/minimal.xlsx");
        let text = extract_text(MediaType::Xlsx, "minimal.xlsx", data).unwrap();
        assert!(text.contains("hello sheet"));
        assert!(text.contains("42"));
    }

    #[test]
    fn test_workbook_opened_by_container_not_declared_type() {
        // The auto-detecting reader keys on the container format, so an OOXML
        // workbook declared as legacy Excel still extracts.
        let data = include_bytes!("../../testdata/minimal.xlsx");
        let text = extract_text(MediaType::Xls, "sheet.xls", data).unwrap();
        assert!(text.contains("hello sheet"));
    }

    #[test]
    fn test_corrupt_pdf_fails_with_filename() {
        let err = extract_text(MediaType::Pdf, "broken.pdf", b"not a pdf at all").unwrap_err();
        match err {
            Error::ExtractionFailure { filename, .. } => assert_eq!(filename, "broken.pdf"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_docx_fails_with_filename() {
        let err = extract_text(MediaType::Docx, "broken.docx", b"not a zip").unwrap_err();
        match err {
            Error::ExtractionFailure { filename, .. } => assert_eq!(filename, "broken.docx"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_corrupt_workbook_fails_with_filename() {
        let err = extract_text(MediaType::Xlsx, "broken.xlsx", b"garbage").unwrap_err();
        match err {
            Error::ExtractionFailure { filename, .. } => assert_eq!(filename, "broken.xlsx"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
