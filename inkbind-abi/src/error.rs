//! Error types for ABI parsing and type resolution.

use thiserror::Error;

/// Error type for ABI document parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not a metadata version this crate understands.
    #[error(
        "unsupported ABI version: expected V3, found {}",
        found.as_deref().unwrap_or("no version marker")
    )]
    UnsupportedVersion {
        /// Version marker found in the document, if any.
        found: Option<String>,
    },

    /// Invalid document structure.
    #[error("invalid ABI structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }

    /// Creates an unsupported version error.
    pub fn unsupported_version(found: Option<String>) -> Self {
        Self::UnsupportedVersion { found }
    }
}

/// Error type for type registry resolution.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A type id is referenced but absent from the registry.
    #[error("type id {id} not found in registry (referenced by {context})")]
    TypeNotFound {
        /// Registry type id.
        id: u32,
        /// Where the reference came from.
        context: String,
    },

    /// The same type id is declared twice.
    #[error("duplicate type id {id} in registry")]
    DuplicateTypeId {
        /// Registry type id.
        id: u32,
    },

    /// Circular type reference.
    #[error("circular type reference detected: {path}")]
    CircularReference {
        /// Path of the circular reference.
        path: String,
    },

    /// Anonymous types nest deeper than the decoder renders.
    #[error("type id {id} nests anonymous types deeper than {limit} levels")]
    NestingTooDeep {
        /// Registry type id at which the limit was reached.
        id: u32,
        /// Maximum nesting depth.
        limit: usize,
    },
}

impl SchemaError {
    /// Creates a type-not-found error.
    pub fn type_not_found(id: u32, context: impl Into<String>) -> Self {
        Self::TypeNotFound {
            id,
            context: context.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_version_display() {
        let err = ParseError::unsupported_version(Some("V4".to_string()));
        assert_eq!(
            err.to_string(),
            "unsupported ABI version: expected V3, found V4"
        );

        let err = ParseError::unsupported_version(None);
        assert!(err.to_string().contains("no version marker"));
    }

    #[test]
    fn test_type_not_found_display() {
        let err = SchemaError::type_not_found(7, "argument 'to' of 'transfer'");
        let msg = err.to_string();
        assert!(msg.contains("type id 7"));
        assert!(msg.contains("transfer"));
    }
}
