//! Error types for the insert command.

use crate::editor::SinkError;
use thiserror::Error;

/// Error type for insert operations.
#[derive(Debug, Error)]
pub enum InsertError {
    /// The active document could not be parsed.
    #[error("parse error in active document: {0}")]
    Parse(#[from] tsctor_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Editor settings could not be read.
    #[error("invalid editor settings: {0}")]
    Config(#[from] serde_json::Error),

    /// The snippet sink rejected the insertion.
    #[error("insertion failed: {0}")]
    Sink(#[from] SinkError),
}
