//! Response types

use serde::{Deserialize, Serialize};

/// Response from a file upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Outcome message
    pub message: String,
    /// Per-file failure reasons on partial success
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<String>,
}

/// Response from the summary endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Generated summary text
    pub summary: String,
}

/// One generated quiz question.
///
/// This is the shape the generator's questionnaire output must parse into;
/// anything else is rejected as malformed generator output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question text
    pub question: String,
    /// Multiple-choice options; empty for open-ended questions
    #[serde(default)]
    pub options: Vec<String>,
    /// Expected answer
    pub answer: String,
}

/// Response from the questionnaire endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    /// Generated questions
    pub questionnaire: Vec<QuizQuestion>,
}

/// Response from the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated answer text
    pub answer: String,
}

/// Plain confirmation message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Outcome message
    pub message: String,
}
