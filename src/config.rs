//! Configuration for the study session service

use serde::{Deserialize, Serialize};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Upload gate configuration
    pub upload: UploadConfig,
    /// Response generator configuration
    pub generator: GeneratorConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Maximum request body size in bytes (whole multipart upload)
    pub max_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            enable_cors: true,
            max_body_size: 64 * 1024 * 1024,
        }
    }
}

/// Upload gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum size per uploaded file in bytes
    pub max_file_size: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10 MiB per file
        }
    }
}

/// Which generator backend answers instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorBackend {
    /// Canned responses, no external service required
    Mock,
    /// Ollama-compatible HTTP endpoint
    Ollama,
}

/// Response generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Backend selection
    pub backend: GeneratorBackend,
    /// Base URL for the HTTP backend
    pub base_url: String,
    /// Generation model name
    pub model: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Number of retries for failed requests
    pub max_retries: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backend: GeneratorBackend::Mock,
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.2:3b".to_string(),
            temperature: 0.3,
            timeout_secs: 120,
            max_retries: 3,
        }
    }
}
