//! Error types for the study session service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Declared media type has no extractor (or is not on the allow-list)
    #[error("No extractor available for media type: {0}")]
    UnsupportedFormat(String),

    /// A single file could not be extracted
    #[error("Failed to process '{filename}': {reason}")]
    ExtractionFailure { filename: String, reason: String },

    /// Upload request carried no files
    #[error("No files were uploaded")]
    EmptyBatch,

    /// Every file in the batch failed extraction
    #[error("No files were processed successfully")]
    AllExtractionsFailed { details: Vec<String> },

    /// Query issued before any document was ingested
    #[error("No documents have been uploaded yet")]
    CorpusNotPopulated,

    /// Generator output did not match the expected questionnaire shape
    #[error("Malformed generator output: {0}")]
    MalformedGeneratorOutput(String),

    /// Request failed validation
    #[error("{0}")]
    InvalidRequest(String),

    /// Response generator error
    #[error("Generator error: {0}")]
    Generator(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an extraction failure for a specific file
    pub fn extraction(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExtractionFailure {
            filename: filename.into(),
            reason: reason.into(),
        }
    }

    /// Create a generator error
    pub fn generator(message: impl Into<String>) -> Self {
        Self::Generator(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Config(_)
            | Error::UnsupportedFormat(_)
            | Error::ExtractionFailure { .. }
            | Error::EmptyBatch
            | Error::AllExtractionsFailed { .. }
            | Error::CorpusNotPopulated
            | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::MalformedGeneratorOutput(_) => StatusCode::BAD_GATEWAY,
            Error::Generator(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Io(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Error::AllExtractionsFailed { details } => Json(json!({
                "error": self.to_string(),
                "details": details,
            })),
            _ => Json(json!({ "error": self.to_string() })),
        };

        (status, body).into_response()
    }
}
