//! Error types for caption_summarizer
//!
//! This module defines the error types used throughout the library.
//! The core never swallows these: every failure aborts the summarization
//! call and is returned to the caller as a distinct variant.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Main error type for caption_summarizer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizeError {
    /// Input text has no recognizable sentences
    #[error("Empty document: {message}")]
    EmptyDocument { message: String },

    /// The requested fraction yields a selection count outside `[1, sentence_count]`
    #[error("Invalid fraction {fraction}: {message}")]
    InvalidFraction { fraction: f64, message: String },

    /// The strategy identifier does not name a known summarization mode
    #[error("Unsupported mode '{mode}'. Use 'tfidf', 'frequency', or 'external'")]
    UnsupportedMode { mode: String },

    /// The source text could not be acquired (I/O, parse failure, timeout)
    #[error("Source unavailable: {message}")]
    SourceUnavailable { message: String },

    /// The external summarizer is missing or failed
    #[error("External summarizer error: {message}")]
    ExternalService { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SummarizeError {
    /// Create an empty document error
    pub fn empty_document(message: impl Into<String>) -> Self {
        Self::EmptyDocument {
            message: message.into(),
        }
    }

    /// Create an invalid fraction error
    pub fn invalid_fraction(fraction: f64, message: impl Into<String>) -> Self {
        Self::InvalidFraction {
            fraction,
            message: message.into(),
        }
    }

    /// Create an unsupported mode error
    pub fn unsupported_mode(mode: impl Into<String>) -> Self {
        Self::UnsupportedMode { mode: mode.into() }
    }

    /// Create a source unavailable error
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
        }
    }

    /// Create an external service error
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::ExternalService {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyDocument { .. } => "empty_document",
            Self::InvalidFraction { .. } => "invalid_fraction",
            Self::UnsupportedMode { .. } => "unsupported_mode",
            Self::SourceUnavailable { .. } => "source_unavailable",
            Self::ExternalService { .. } => "external_service",
            Self::InvalidConfig { .. } => "invalid_config",
            Self::Serialization { .. } => "serialization",
        }
    }

    /// Check if this error came from the source acquisition layer
    /// rather than from the summarization core
    pub fn is_source_error(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for SummarizeError {
    fn from(err: std::io::Error) -> Self {
        Self::source_unavailable(err.to_string())
    }
}
