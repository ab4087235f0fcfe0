//! Error types for testdoc

use crate::types::EntityKind;
use thiserror::Error;

/// Main error type for testdoc
#[derive(Debug, Error)]
pub enum TestDocError {
    /// Entity identifier is not a valid UUID
    #[error("Invalid entity ID: {0}")]
    InvalidIdentifier(String),

    /// Entity type outside the exportable kinds
    #[error("Unsupported entity type: {0}")]
    UnsupportedEntityType(String),

    /// Format is unknown or has no registered renderer
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Entity lookup failed
    #[error("{} not found: {id}", .kind.label())]
    NotFound { kind: EntityKind, id: String },

    /// Renderer failed to produce a document
    #[error("Render failure: {0}")]
    RenderFailure(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<TestDocError>,
    },
}

impl TestDocError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        TestDocError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether the error was caused by a malformed request rather than a lookup
    /// or render fault
    pub fn is_client_error(&self) -> bool {
        match self {
            TestDocError::InvalidIdentifier(_)
            | TestDocError::UnsupportedEntityType(_)
            | TestDocError::UnsupportedFormat(_) => true,
            TestDocError::WithContext { source, .. } => source.is_client_error(),
            _ => false,
        }
    }
}

/// Result type alias for testdoc
pub type Result<T> = std::result::Result<T, TestDocError>;
