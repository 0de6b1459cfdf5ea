//! Canned response generator
//!
//! Stands in for a real analysis backend. Routing is keyword-based on the
//! instruction text, so the canned output matches whichever prompt the query
//! surface built. The questionnaire payload is real JSON and exercises the
//! same parse contract a live backend would.

use async_trait::async_trait;
use serde_json::json;

use super::ResponseGenerator;
use crate::error::Result;

/// Generator returning fixed, contextually shaped responses
#[derive(Default)]
pub struct MockGenerator;

impl MockGenerator {
    /// Create a new mock generator
    pub fn new() -> Self {
        Self
    }

    fn respond(instruction: &str) -> String {
        let lower = instruction.to_lowercase();

        if lower.contains("summary") {
            return "Document Summary:\n\n\
                    This is a mock summary of the uploaded documents. In a real \
                    implementation, this would contain an AI-generated summary based \
                    on the actual document content.\n\n\
                    Key points would include:\n\
                    - Main topics covered in the documents\n\
                    - Important facts and figures\n\
                    - Key conclusions or recommendations"
                .to_string();
        }

        if lower.contains("questionnaire") {
            return json!([
                {
                    "question": "What is the main topic of the documents?",
                    "options": ["Technology", "Science", "Business", "Education"],
                    "answer": "Technology"
                },
                {
                    "question": "Based on the content, what would be the most important takeaway?",
                    "options": [],
                    "answer": "The documents emphasize the importance of continuous learning \
                               and adaptation."
                },
                {
                    "question": "Which concept is mentioned most frequently?",
                    "options": ["Innovation", "Efficiency", "Collaboration", "Growth"],
                    "answer": "Innovation"
                }
            ])
            .to_string();
        }

        if lower.contains("question:") {
            return "Based on the documents you've uploaded, I can provide an answer to \
                    your question. Since this is a mock implementation, a real backend \
                    would analyze the document content and cite the relevant passages."
                .to_string();
        }

        "I've processed your request regarding the uploaded documents. This is a mock \
         response; a real backend would produce a context-aware answer."
            .to_string()
    }
}

#[async_trait]
impl ResponseGenerator for MockGenerator {
    async fn generate(&self, instruction: &str) -> Result<String> {
        Ok(Self::respond(instruction))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::PromptBuilder;

    #[test]
    fn test_summary_instruction_gets_summary() {
        let out = tokio_test::block_on(
            MockGenerator::new().generate(&PromptBuilder::summary_prompt("doc")),
        )
        .unwrap();
        assert!(out.contains("Document Summary"));
    }

    #[test]
    fn test_questionnaire_instruction_is_valid_json() {
        let out = tokio_test::block_on(
            MockGenerator::new().generate(&PromptBuilder::questionnaire_prompt("doc")),
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_chat_instruction_gets_answer() {
        let out = tokio_test::block_on(
            MockGenerator::new().generate(&PromptBuilder::chat_prompt("doc", "why?")),
        )
        .unwrap();
        assert!(out.contains("your question"));
    }
}
