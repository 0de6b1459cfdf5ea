//! Response generation behind a capability interface
//!
//! The rest of the service only knows `ResponseGenerator`; swapping the mock
//! for a real backend touches no coordinator, store, or query code.

mod mock;
mod ollama;
mod prompt;

pub use mock::MockGenerator;
pub use ollama::OllamaGenerator;
pub use prompt::PromptBuilder;

use async_trait::async_trait;

use crate::error::Result;

/// Turns a natural-language instruction (with the corpus embedded) into text.
///
/// Implementations:
/// - `MockGenerator`: canned responses keyed off the instruction
/// - `OllamaGenerator`: Ollama-compatible HTTP endpoint
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Generate a free-text response for the given instruction
    async fn generate(&self, instruction: &str) -> Result<String>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }

    /// Backend name for logging
    fn name(&self) -> &str;
}
