//! Instruction templates for the response generator

/// Builds the instructions sent to the generator
pub struct PromptBuilder;

impl PromptBuilder {
    /// Instruction for a whole-corpus summary
    pub fn summary_prompt(corpus: &str) -> String {
        format!(
            "Please provide a detailed summary of the following documents:\n\n{}",
            corpus
        )
    }

    /// Instruction for questionnaire generation.
    ///
    /// The generator is expected to answer with a JSON array of objects, each
    /// carrying `question`, `options` (array, empty for open-ended) and
    /// `answer`; the query surface validates that shape.
    pub fn questionnaire_prompt(corpus: &str) -> String {
        format!(
            "Based on the following documents, generate an extensive questionnaire \
             with multiple choice and open-ended questions. Format as JSON array of \
             objects, each with question, options (array for MCQ), and answer:\n\n{}",
            corpus
        )
    }

    /// Instruction for answering a free-form question against the corpus
    pub fn chat_prompt(corpus: &str, question: &str) -> String {
        format!(
            "Based on the following documents, answer the question and provide \
             references to specific excerpts, words, lines, or sentences from the \
             documents:\n\nDocuments:\n{}\n\nQuestion: {}",
            corpus, question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_embeds_corpus() {
        let prompt = PromptBuilder::summary_prompt("the corpus text");
        assert!(prompt.to_lowercase().contains("summary"));
        assert!(prompt.contains("the corpus text"));
    }

    #[test]
    fn test_questionnaire_prompt_requests_json() {
        let prompt = PromptBuilder::questionnaire_prompt("doc");
        assert!(prompt.to_lowercase().contains("questionnaire"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_chat_prompt_embeds_both() {
        let prompt = PromptBuilder::chat_prompt("doc body", "What is this?");
        assert!(prompt.contains("doc body"));
        assert!(prompt.contains("Question: What is this?"));
    }
}
