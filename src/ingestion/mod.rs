//! Document ingestion pipeline: per-format extractors and the batch coordinator

mod batch;
mod extractor;

pub use batch::{ingest, BatchReport, ExtractionOutcome, UploadedFile, DOCUMENT_SEPARATOR};
pub use extractor::{extract_text, MediaType};
