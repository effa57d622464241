//! Error types for qbe

use thiserror::Error;

/// Result type alias for qbe operations
pub type QbeResult<T> = Result<T, QbeError>;

/// Errors raised while constructing fields, conditions, and render options, or
/// while merging rendered parameters.
///
/// Rendering itself never fails: every check happens when the inputs are built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QbeError {
    /// Malformed field name or table alias
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Malformed type handler name
    #[error("Invalid type handler: {0}")]
    InvalidTypeHandler(String),

    /// Unrecognized JDBC type keyword
    #[error("Unknown JDBC type: {0}")]
    UnknownJdbcType(String),

    /// Malformed render option
    #[error("Invalid render option: {0}")]
    InvalidOption(String),

    /// Two merged fragments bind the same placeholder key
    #[error("Duplicate parameter key: {0}")]
    DuplicateParameter(String),
}

impl QbeError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    /// Create an invalid type handler error
    pub fn invalid_type_handler(message: impl Into<String>) -> Self {
        Self::InvalidTypeHandler(message.into())
    }

    /// Create an invalid render option error
    pub fn invalid_option(message: impl Into<String>) -> Self {
        Self::InvalidOption(message.into())
    }

    /// Check if this is an identifier error
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::InvalidIdentifier(_))
    }
}
