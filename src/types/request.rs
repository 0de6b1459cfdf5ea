//! Request types

use serde::{Deserialize, Serialize};

/// Body of a chat request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Free-form question to answer against the session corpus
    pub question: String,
}
