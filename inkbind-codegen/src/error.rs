//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// ABI parse error.
    #[error("ABI parse error: {0}")]
    Parse(#[from] inkbind_abi::ParseError),

    /// Type resolution error.
    #[error("schema error: {0}")]
    Schema(#[from] inkbind_abi::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output directory or file could not be written.
    #[error("cannot write '{}': {source}", path.display())]
    Output {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Invalid generator configuration.
    #[error("configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// A message refers to a type id missing from the resolved tables.
    #[error("unknown type id {id} for {position} of message '{method}'")]
    UnknownType {
        /// Registry type id.
        id: u32,
        /// Message label.
        method: String,
        /// Argument or return position.
        position: String,
    },
}

impl CodegenError {
    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an output error for `path`.
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the error only affects the document being generated.
    ///
    /// Everything else (filesystem setup, configuration) aborts the batch.
    #[must_use]
    pub const fn is_document_local(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Schema(_) | Self::UnknownType { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_local_classification() {
        let parse = CodegenError::from(inkbind_abi::ParseError::unsupported_version(None));
        assert!(parse.is_document_local());

        let unknown = CodegenError::UnknownType {
            id: 3,
            method: "transfer".to_string(),
            position: "argument 'to'".to_string(),
        };
        assert!(unknown.is_document_local());
        assert_eq!(
            unknown.to_string(),
            "unknown type id 3 for argument 'to' of message 'transfer'"
        );

        let output = CodegenError::output(
            "/nope",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!output.is_document_local());
        assert!(!CodegenError::config("missing input").is_document_local());
    }
}
