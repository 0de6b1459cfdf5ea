//! File upload endpoint and upload gate
//!
//! The gate validates declared media types against the allow-list and
//! enforces the per-file size cap before any extraction work begins; a
//! violation rejects the whole request up front.

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{Error, Result};
use crate::ingestion::{ingest, MediaType, UploadedFile};
use crate::server::state::AppState;
use crate::types::UploadResponse;

/// POST /upload - ingest a batch of files into the session corpus
pub async fn upload_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let max_file_size = state.config().upload.max_file_size;
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidRequest(format!("Failed to read multipart field: {}", e)))?
    {
        // Only file fields carry a filename
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let declared = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let Some(media_type) = MediaType::from_declared(&declared) else {
            tracing::warn!("Rejected file '{}', media type: {}", filename, declared);
            return Err(Error::UnsupportedFormat(declared));
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::InvalidRequest(format!("Failed to read '{}': {}", filename, e)))?;

        if data.len() > max_file_size {
            return Err(Error::InvalidRequest(format!(
                "File '{}' exceeds the {} byte limit",
                filename, max_file_size
            )));
        }

        tracing::info!("Received file: {} ({} bytes)", filename, data.len());
        files.push(UploadedFile::from_bytes(filename, media_type, &data)?);
    }

    let report = ingest(state.corpus(), files).await?;

    let message = if report.failed == 0 {
        "Files uploaded and processed successfully"
    } else {
        "Some files uploaded and processed successfully"
    };

    Ok(Json(UploadResponse {
        message: message.to_string(),
        warnings: report.warnings,
    }))
}
