//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Generation itself is total; these errors come from reading and parsing
/// the input.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Source parsing error.
    #[error("source parse error: {0}")]
    Parse(#[from] tsctor_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
