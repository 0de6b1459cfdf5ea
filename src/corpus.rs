//! Session corpus store
//!
//! Holds the single aggregated document text for the current session. One
//! instance lives in the application state and is handed to operations by
//! reference; ingestion replaces the content wholesale, end-session clears it.

use parking_lot::RwLock;

/// The aggregated document text for the current session
#[derive(Default)]
pub struct CorpusStore {
    text: RwLock<String>,
}

impl CorpusStore {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the corpus with freshly extracted text.
    ///
    /// No merge, no append: a second ingestion replaces the first.
    pub fn replace(&self, text: String) {
        *self.text.write() = text;
    }

    /// Reset to empty. Idempotent; clearing an empty corpus is a no-op.
    pub fn clear(&self) {
        self.text.write().clear();
    }

    /// Snapshot of the current corpus text
    pub fn read(&self) -> String {
        self.text.read().clone()
    }

    /// True iff the corpus holds non-whitespace content
    pub fn is_populated(&self) -> bool {
        !self.text.read().trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let corpus = CorpusStore::new();
        assert!(!corpus.is_populated());
        assert_eq!(corpus.read(), "");
    }

    #[test]
    fn test_replace_overwrites() {
        let corpus = CorpusStore::new();
        corpus.replace("first".to_string());
        corpus.replace("second".to_string());
        assert_eq!(corpus.read(), "second");
    }

    #[test]
    fn test_whitespace_only_is_not_populated() {
        let corpus = CorpusStore::new();
        corpus.replace("  \n\t ".to_string());
        assert!(!corpus.is_populated());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let corpus = CorpusStore::new();
        corpus.replace("content".to_string());
        corpus.clear();
        assert!(!corpus.is_populated());
        corpus.clear();
        assert!(!corpus.is_populated());
    }
}
