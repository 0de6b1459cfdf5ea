//! studykit: document upload and study-session service
//!
//! Accepts a batch of heterogeneous document files, extracts plain text per
//! format, aggregates the results into a single session corpus, and answers
//! summary/questionnaire/chat requests against that corpus through a
//! pluggable response generator.

pub mod config;
pub mod corpus;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod query;
pub mod server;
pub mod types;

pub use config::AppConfig;
pub use corpus::CorpusStore;
pub use error::{Error, Result};
pub use ingestion::{ingest, BatchReport, MediaType, UploadedFile};
