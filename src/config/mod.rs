//! Configuration for the extraction and enrichment pipeline
//!
//! All values are explicit constructor parameters rather than ambient
//! environment lookups, so invalid configuration fails fast at construction
//! time, before any work is scheduled.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Source tree traversal configuration
    pub source: SourceConfig,

    /// Embedding service configuration
    pub embedding: EmbeddingConfig,
}

/// Source tree traversal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// File extension of source files to analyze
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Maximum file size to analyze (in bytes)
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,
}

/// Embedding service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// HTTP endpoint of the embedding service
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Number of entity records submitted per request
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Timeout in seconds for one embedding request
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_extension() -> String {
    "java".to_string()
}

fn default_max_file_size() -> usize {
    1_048_576 // 1 MB
}

fn default_endpoint_url() -> String {
    "http://localhost:5000/generate_embeddings".to_string()
}

fn default_batch_size() -> usize {
    10
}

fn default_timeout() -> u64 {
    30
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            max_file_size: default_max_file_size(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            batch_size: default_batch_size(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Config {
    /// Validate the whole configuration, failing fast on the first problem
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.source.validate()?;
        self.embedding.validate()
    }
}

impl SourceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extension.is_empty() {
            return Err(ConfigError::MissingRequired("source.extension".to_string()));
        }
        if self.max_file_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "source.max_file_size".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl EmbeddingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint_url.is_empty() {
            return Err(ConfigError::MissingRequired(
                "embedding.endpoint_url".to_string(),
            ));
        }
        if !self.endpoint_url.starts_with("http://") && !self.endpoint_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                key: "embedding.endpoint_url".to_string(),
                reason: format!("not an http(s) URL: {}", self.endpoint_url),
            });
        }
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "embedding.batch_size".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
