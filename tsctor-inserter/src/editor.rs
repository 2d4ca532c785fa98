//! Editor-facing types: documents, positions and snippet sinks.

use crate::config::EditorConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A zero-based line and character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Zero-based line.
    pub line: usize,
    /// Zero-based column, in characters.
    pub column: usize,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Column 0 of `line`.
    #[must_use]
    pub const fn line_start(line: usize) -> Self {
        Self::new(line, 0)
    }
}

/// A half-open span between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// First position covered.
    pub start: Position,
    /// Position just past the span.
    pub end: Position,
}

impl Range {
    /// Creates a range.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns true if the range covers nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The active document handed to the insert command.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    text: String,
    config: EditorConfig,
}

impl Document {
    /// Creates a document with the default editor configuration.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            config: EditorConfig::default(),
        }
    }

    /// Replaces the editor configuration snapshot.
    #[must_use]
    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Path of the document on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full text of the document.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Editor configuration snapshot.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Directory relative imports are resolved against.
    #[must_use]
    pub fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

/// A snippet to place in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// Rendered snippet, without a trailing newline.
    pub snippet: String,
    /// Where the snippet goes.
    pub position: Position,
    /// Text replaced by the snippet, if any.
    pub replace: Option<Range>,
}

impl Insertion {
    /// Creates a plain insertion at `position`.
    pub fn at(snippet: impl Into<String>, position: Position) -> Self {
        Self {
            snippet: snippet.into(),
            position,
            replace: None,
        }
    }
}

/// Errors raised by a [`SnippetSink`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    /// The line does not exist in the buffer.
    #[error("line {line} is out of range (buffer has {lines} lines)")]
    LineOutOfRange {
        /// Requested zero-based line.
        line: usize,
        /// Number of lines in the buffer.
        lines: usize,
    },

    /// The column lies past the end of its line.
    #[error("column {column} is out of range on line {line}")]
    ColumnOutOfRange {
        /// Zero-based line.
        line: usize,
        /// Requested zero-based column.
        column: usize,
    },

    /// The range ends before it starts.
    #[error("invalid range: end {end:?} precedes start {start:?}")]
    InvalidRange {
        /// Range start.
        start: Position,
        /// Range end.
        end: Position,
    },
}

/// Receives generated snippets on behalf of the editor.
pub trait SnippetSink {
    /// Applies an insertion.
    ///
    /// # Errors
    /// Returns a [`SinkError`] if the insertion cannot be placed.
    fn insert(&mut self, insertion: &Insertion) -> Result<(), SinkError>;
}

/// In-memory text buffer that applies insertions to its contents.
///
/// A snippet always occupies whole lines: text that followed the insertion
/// point on the same line moves to the line after the snippet.
#[derive(Debug, Clone, Default)]
pub struct TextBufferSink {
    text: String,
}

impl TextBufferSink {
    /// Creates a buffer holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Current buffer contents.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the buffer and returns its contents.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Number of lines in the buffer. An empty buffer has one empty line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn offset(&self, position: Position) -> Result<usize, SinkError> {
        let mut line_start = 0;
        for (index, line) in self.text.split('\n').enumerate() {
            if index == position.line {
                let column = line
                    .char_indices()
                    .map(|(i, _)| i)
                    .chain(std::iter::once(line.len()))
                    .nth(position.column)
                    .ok_or(SinkError::ColumnOutOfRange {
                        line: position.line,
                        column: position.column,
                    })?;
                return Ok(line_start + column);
            }
            line_start += line.len() + 1;
        }

        Err(SinkError::LineOutOfRange {
            line: position.line,
            lines: self.line_count(),
        })
    }
}

impl SnippetSink for TextBufferSink {
    fn insert(&mut self, insertion: &Insertion) -> Result<(), SinkError> {
        let at = match insertion.replace {
            Some(range) => {
                if range.end < range.start {
                    return Err(SinkError::InvalidRange {
                        start: range.start,
                        end: range.end,
                    });
                }
                let start = self.offset(range.start)?;
                let end = self.offset(range.end)?;
                self.text.replace_range(start..end, "");
                start
            }
            None => self.offset(insertion.position)?,
        };

        let mut snippet = insertion.snippet.clone();
        if self.text[at..].chars().next().is_some_and(|c| c != '\n') {
            snippet.push('\n');
        }
        self.text.insert_str(at, &snippet);

        tracing::debug!("inserted {} bytes at offset {}", snippet.len(), at);
        Ok(())
    }
}
