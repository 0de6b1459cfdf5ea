//! Query surface: read-only operations over the session corpus
//!
//! Each operation checks that a corpus exists before building an instruction
//! and calling the generator; an empty session fails fast with
//! `CorpusNotPopulated` and never reaches the backend.

use crate::corpus::CorpusStore;
use crate::error::{Error, Result};
use crate::generation::{PromptBuilder, ResponseGenerator};
use crate::types::QuizQuestion;

/// Snapshot the corpus, failing if no documents were ingested yet
fn require_corpus(corpus: &CorpusStore) -> Result<String> {
    if !corpus.is_populated() {
        return Err(Error::CorpusNotPopulated);
    }
    Ok(corpus.read())
}

/// Generate a summary of the current corpus
pub async fn summarize(
    corpus: &CorpusStore,
    generator: &dyn ResponseGenerator,
) -> Result<String> {
    let text = require_corpus(corpus)?;
    tracing::info!("Generating summary for corpus of {} chars", text.len());
    generator.generate(&PromptBuilder::summary_prompt(&text)).await
}

/// Generate a questionnaire from the current corpus.
///
/// The generator's output must parse as a JSON array of quiz questions;
/// anything else surfaces as `MalformedGeneratorOutput`.
pub async fn build_questionnaire(
    corpus: &CorpusStore,
    generator: &dyn ResponseGenerator,
) -> Result<Vec<QuizQuestion>> {
    let text = require_corpus(corpus)?;
    tracing::info!("Generating questionnaire for corpus of {} chars", text.len());
    let raw = generator
        .generate(&PromptBuilder::questionnaire_prompt(&text))
        .await?;
    serde_json::from_str(&raw).map_err(|e| Error::MalformedGeneratorOutput(e.to_string()))
}

/// Answer a free-form question against the current corpus
pub async fn answer_question(
    corpus: &CorpusStore,
    generator: &dyn ResponseGenerator,
    question: &str,
) -> Result<String> {
    let text = require_corpus(corpus)?;
    if question.trim().is_empty() {
        return Err(Error::InvalidRequest("Question is required".to_string()));
    }
    tracing::info!("Answering question: \"{}\"", question);
    generator
        .generate(&PromptBuilder::chat_prompt(&text, question))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::MockGenerator;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Test double that counts calls and replays a fixed script
    struct ScriptedGenerator {
        script: String,
        calls: AtomicUsize,
    }

    impl ScriptedGenerator {
        fn new(script: &str) -> Self {
            Self {
                script: script.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ResponseGenerator for ScriptedGenerator {
        async fn generate(&self, _instruction: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.script.clone())
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn test_queries_on_empty_corpus_skip_generator() {
        let corpus = CorpusStore::new();
        let generator = ScriptedGenerator::new("never used");

        let err = summarize(&corpus, &generator).await.unwrap_err();
        assert!(matches!(err, Error::CorpusNotPopulated));

        let err = build_questionnaire(&corpus, &generator).await.unwrap_err();
        assert!(matches!(err, Error::CorpusNotPopulated));

        let err = answer_question(&corpus, &generator, "why?").await.unwrap_err();
        assert!(matches!(err, Error::CorpusNotPopulated));

        // Even a question that would fail validation reports the missing
        // corpus first.
        let err = answer_question(&corpus, &generator, "   ").await.unwrap_err();
        assert!(matches!(err, Error::CorpusNotPopulated));

        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_summarize_populated_corpus() {
        let corpus = CorpusStore::new();
        corpus.replace("hello world".to_string());

        let summary = summarize(&corpus, &MockGenerator::new()).await.unwrap();
        assert!(!summary.is_empty());
    }

    #[tokio::test]
    async fn test_questionnaire_parses_generator_output() {
        let corpus = CorpusStore::new();
        corpus.replace("study material".to_string());

        let questions = build_questionnaire(&corpus, &MockGenerator::new())
            .await
            .unwrap();
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().any(|q| q.options.is_empty()));
        assert!(questions.iter().any(|q| !q.options.is_empty()));
    }

    #[tokio::test]
    async fn test_questionnaire_rejects_malformed_output() {
        let corpus = CorpusStore::new();
        corpus.replace("study material".to_string());
        let generator = ScriptedGenerator::new("this is not json");

        let err = build_questionnaire(&corpus, &generator).await.unwrap_err();
        assert!(matches!(err, Error::MalformedGeneratorOutput(_)));
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected() {
        let corpus = CorpusStore::new();
        corpus.replace("content".to_string());
        let generator = ScriptedGenerator::new("unused");

        let err = answer_question(&corpus, &generator, "   ").await.unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_answer_question_uses_corpus() {
        let corpus = CorpusStore::new();
        corpus.replace("hello world".to_string());

        let answer = answer_question(&corpus, &MockGenerator::new(), "What does it say?")
            .await
            .unwrap();
        assert!(!answer.is_empty());
    }
}
