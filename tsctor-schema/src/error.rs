//! Error types for declaration parsing.

use thiserror::Error;

/// Error type for source parsing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// String or template literal without a closing quote.
    #[error("unterminated string literal starting on line {line}")]
    UnterminatedString {
        /// Line the literal starts on (1-based).
        line: usize,
    },

    /// Block comment without a closing `*/`.
    #[error("unterminated block comment starting on line {line}")]
    UnterminatedComment {
        /// Line the comment starts on (1-based).
        line: usize,
    },

    /// Regular expression literal without a closing `/`.
    #[error("unterminated regular expression literal starting on line {line}")]
    UnterminatedRegex {
        /// Line the literal starts on (1-based).
        line: usize,
    },

    /// Input ended inside a declaration.
    #[error("unexpected end of input while parsing {context} (line {line})")]
    UnexpectedEof {
        /// What was being parsed.
        context: String,
        /// Last line seen (1-based).
        line: usize,
    },

    /// Closing delimiter without a matching opener, or vice versa.
    #[error("unbalanced '{delimiter}' on line {line}")]
    Unbalanced {
        /// Offending delimiter.
        delimiter: char,
        /// Line of the delimiter (1-based).
        line: usize,
    },

    /// A token that cannot appear at this position.
    #[error("unexpected '{found}' on line {line}, expected {expected}")]
    UnexpectedToken {
        /// Token text found.
        found: String,
        /// Description of what was expected.
        expected: String,
        /// Line of the token (1-based).
        line: usize,
    },
}

impl ParseError {
    /// Creates an unexpected end of input error.
    pub fn eof(context: impl Into<String>, line: usize) -> Self {
        Self::UnexpectedEof {
            context: context.into(),
            line,
        }
    }

    /// Creates an unexpected token error.
    pub fn unexpected(found: impl Into<String>, expected: impl Into<String>, line: usize) -> Self {
        Self::UnexpectedToken {
            found: found.into(),
            expected: expected.into(),
            line,
        }
    }

    /// Returns the 1-based line the error refers to.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line }
            | Self::UnterminatedComment { line }
            | Self::UnterminatedRegex { line }
            | Self::UnexpectedEof { line, .. }
            | Self::Unbalanced { line, .. }
            | Self::UnexpectedToken { line, .. } => *line,
        }
    }
}
