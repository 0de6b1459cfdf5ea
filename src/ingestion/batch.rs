//! Batch ingestion coordinator
//!
//! Drives extraction over one uploaded batch, isolating per-file failures so
//! a single bad document never sinks the rest, and commits the joined text to
//! the session corpus when at least one file succeeds.

use std::io::Write;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tempfile::NamedTempFile;

use crate::corpus::CorpusStore;
use crate::error::{Error, Result};
use crate::ingestion::extractor::{extract_text, MediaType};

/// Separator placed between documents in the aggregated corpus.
///
/// Once joined, excerpts are no longer traceable to their source file; the
/// corpus carries no per-document provenance.
pub const DOCUMENT_SEPARATOR: &str = "\n\n";

/// One file handed over by the upload gate.
///
/// The bytes live in a spooled temp file which is removed after the
/// extraction attempt, success or failure. Dropping the handle removes the
/// file as well, so no exit path leaks it.
pub struct UploadedFile {
    filename: String,
    media_type: MediaType,
    size: u64,
    spool: NamedTempFile,
}

impl UploadedFile {
    /// Spool raw upload bytes to a temp file
    pub fn from_bytes(
        filename: impl Into<String>,
        media_type: MediaType,
        data: &[u8],
    ) -> Result<Self> {
        let mut spool = NamedTempFile::new()?;
        spool.write_all(data)?;
        spool.flush()?;
        Ok(Self {
            filename: filename.into(),
            media_type,
            size: data.len() as u64,
            spool,
        })
    }

    /// Original filename as declared by the client
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Declared media type
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Per-file outcome, in submission order
pub struct ExtractionOutcome {
    /// Filename the outcome belongs to
    pub filename: String,
    /// Extracted text, or the reason extraction failed
    pub result: Result<String>,
}

/// Result of one ingestion call
#[derive(Debug)]
pub struct BatchReport {
    /// Number of files that extracted successfully
    pub succeeded: usize,
    /// Number of files that failed
    pub failed: usize,
    /// Human-readable reason per failed file
    pub warnings: Vec<String>,
}

/// Best-effort message from a panic payload
fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Run one extraction closure, converting a panic into that file's failure.
///
/// Some parsers panic on malformed-but-plausible input; the panic must stay
/// contained to its own file, not sink the rest of the batch.
fn isolate_panics<F>(filename: &str, f: F) -> Result<String>
where
    F: FnOnce() -> Result<String>,
{
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        Err(Error::extraction(
            filename,
            format!("extractor panicked: {}", panic_reason(payload.as_ref())),
        ))
    })
}

/// Run extraction for one file and release its temp storage.
///
/// Cleanup failures are logged, never escalated.
fn attempt(file: UploadedFile) -> ExtractionOutcome {
    let UploadedFile {
        filename,
        media_type,
        spool,
        ..
    } = file;

    let result = isolate_panics(&filename, || {
        std::fs::read(spool.path())
            .map_err(|e| Error::extraction(&filename, format!("failed to read upload: {}", e)))
            .and_then(|data| extract_text(media_type, &filename, &data))
    });

    if let Err(e) = spool.close() {
        tracing::warn!("Failed to remove temp file for '{}': {}", filename, e);
    }

    ExtractionOutcome { filename, result }
}

/// Ingest a batch of uploaded files into the session corpus.
///
/// Successful texts are joined in submission order and **replace** the
/// current corpus. With zero successes the corpus is left untouched and the
/// call fails with every per-file reason; with a mix, failures come back as
/// warnings alongside the success.
pub async fn ingest(corpus: &CorpusStore, files: Vec<UploadedFile>) -> Result<BatchReport> {
    if files.is_empty() {
        return Err(Error::EmptyBatch);
    }

    // Parsing is sync CPU work; run the whole batch off the async runtime.
    let outcomes = tokio::task::spawn_blocking(move || {
        files.into_iter().map(attempt).collect::<Vec<_>>()
    })
    .await
    .map_err(|e| Error::internal(format!("extraction task failed: {}", e)))?;

    let mut texts = Vec::new();
    let mut warnings = Vec::new();

    for outcome in outcomes {
        match outcome.result {
            Ok(text) => {
                tracing::info!(
                    "Extracted {} chars from '{}'",
                    text.len(),
                    outcome.filename
                );
                texts.push(text);
            }
            Err(err) => {
                tracing::warn!("Extraction failed for '{}': {}", outcome.filename, err);
                let warning = match &err {
                    // Already carries the filename
                    Error::ExtractionFailure { .. } => err.to_string(),
                    _ => format!("Failed to process '{}': {}", outcome.filename, err),
                };
                warnings.push(warning);
            }
        }
    }

    if texts.is_empty() {
        return Err(Error::AllExtractionsFailed { details: warnings });
    }

    let succeeded = texts.len();
    let failed = warnings.len();
    corpus.replace(texts.join(DOCUMENT_SEPARATOR));
    tracing::info!(
        "Batch committed: {} succeeded, {} failed, corpus is {} chars",
        succeeded,
        failed,
        corpus.read().len()
    );

    Ok(BatchReport {
        succeeded,
        failed,
        warnings,
    })
}
