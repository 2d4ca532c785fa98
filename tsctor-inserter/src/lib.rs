//! # tsctor Inserter
//!
//! Editor-side orchestration for constructor generation.
//!
//! This crate provides:
//! - The editor configuration snapshot and its indentation policy
//! - Relative import resolution into a declaration index
//! - Snippet sink traits and an in-memory text buffer sink
//! - The `insert constructor` command

pub mod config;
pub mod editor;
pub mod error;
pub mod inserter;
pub mod resolver;

pub use config::EditorConfig;
pub use editor::{Document, Insertion, Position, Range, SinkError, SnippetSink, TextBufferSink};
pub use error::InsertError;
pub use inserter::ConstructorInserter;
pub use resolver::{FsResolver, MemoryResolver, SourceResolver, resolve_import_path};
