//! Error types for solgraph-ir
//!
//! Construction-time invariant violations indicate a bug in the upstream
//! IR builder; they are surfaced immediately and never coerced into a
//! malformed operation.

use thiserror::Error;

/// Main error type for solgraph-ir operations
#[derive(Debug, Error)]
pub enum SolgraphError {
    /// Call destination must be a runtime value (variable or builtin)
    #[error("invalid call destination: expected variable or builtin, found {found}")]
    InvalidDestination { found: String },

    /// Call function name must be a constant signature
    #[error("invalid function name operand: expected constant, found {found}")]
    InvalidFunctionName { found: String },

    /// Declared argument count does not match the argument list
    #[error("argument count mismatch: declared {expected}, got {actual}")]
    ArgumentCountMismatch { expected: usize, actual: usize },

    /// Analysis error
    #[error("analysis error: {0}")]
    Analysis(String),
}

impl SolgraphError {
    /// Create an analysis error
    pub fn analysis(msg: impl Into<String>) -> Self {
        SolgraphError::Analysis(msg.into())
    }
}

/// Result type alias for solgraph operations
pub type Result<T> = std::result::Result<T, SolgraphError>;
