//! Error types for prisma-typegen.

use thiserror::Error;

/// The main error type for generation operations.
#[derive(Debug, Error)]
pub enum TypegenError {
    /// Failed to parse the Prisma schema text.
    #[error("Parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    /// No schema path was given and auto-discovery found nothing readable.
    #[error("Schema file is required and could not be found")]
    SchemaNotFound,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TypegenError {
    /// Create a parse error at the given byte offset.
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }
}

/// Result type alias for generation operations.
pub type TypegenResult<T> = Result<T, TypegenError>;
