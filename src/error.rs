//! Centralized error types for codefathom using thiserror
//!
//! Provides domain-specific error types with distinct recovery policies:
//! parse failures are recovered per file, enrichment failures abort the
//! whole enrichment call, configuration failures abort before any work.

use thiserror::Error;

/// Main error type for the extraction pipeline
#[derive(Error, Debug)]
pub enum FathomError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors raised while parsing a single source file.
///
/// These are always recovered locally: the failing file contributes an
/// empty class list and the error is logged, never propagated.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read file '{file}': {reason}")]
    FileRead { file: String, reason: String },

    #[error("Failed to build AST for '{file}': {reason}")]
    AstBuild { file: String, reason: String },

    #[error("Source contains syntax errors: {0}")]
    SyntaxErrors(String),

    #[error("Failed to extract class '{class}': {reason}")]
    ClassExtraction { class: String, reason: String },
}

/// Errors raised by the embedding enrichment stage.
///
/// Unlike parse errors these are fatal: one failing batch aborts the whole
/// enrichment call before any entity is rewritten.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    #[error("Embedding request failed: {0}")]
    RequestFailed(String),

    #[error("Embedding service returned status {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("Invalid embedding response: {0}")]
    InvalidResponse(String),

    #[error("Embedding request timed out after {0} seconds")]
    Timeout(u64),
}

/// Errors related to configuration, raised at construction time
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

// Conversion from anyhow::Error to FathomError
impl From<anyhow::Error> for FathomError {
    fn from(err: anyhow::Error) -> Self {
        FathomError::Other(format!("{:#}", err))
    }
}

impl FathomError {
    /// Create a new error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        FathomError::Other(msg.into())
    }

    /// Check whether this error is recovered per file rather than propagated
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FathomError::Parse(_))
    }
}
