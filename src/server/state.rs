//! Application state for the HTTP server

use std::sync::Arc;

use crate::config::{AppConfig, GeneratorBackend};
use crate::corpus::CorpusStore;
use crate::error::Result;
use crate::generation::{MockGenerator, OllamaGenerator, ResponseGenerator};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: AppConfig,
    /// Session corpus (single instance for the process lifetime)
    corpus: CorpusStore,
    /// Response generator backend
    generator: Arc<dyn ResponseGenerator>,
}

impl AppState {
    /// Create application state, wiring the configured generator backend
    pub fn new(config: AppConfig) -> Result<Self> {
        let generator: Arc<dyn ResponseGenerator> = match config.generator.backend {
            GeneratorBackend::Mock => Arc::new(MockGenerator::new()),
            GeneratorBackend::Ollama => Arc::new(OllamaGenerator::new(&config.generator)?),
        };
        tracing::info!("Response generator backend: {}", generator.name());

        Ok(Self::with_generator(config, generator))
    }

    /// Create state with an explicit generator (used by tests)
    pub fn with_generator(config: AppConfig, generator: Arc<dyn ResponseGenerator>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                corpus: CorpusStore::new(),
                generator,
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get the session corpus store
    pub fn corpus(&self) -> &CorpusStore {
        &self.inner.corpus
    }

    /// Get the response generator
    pub fn generator(&self) -> &dyn ResponseGenerator {
        self.inner.generator.as_ref()
    }
}
