//! Import resolution.
//!
//! Relative module specifiers are mapped to `.ts` files next to the active
//! document and read through a [`SourceResolver`].

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use tsctor_schema::declarations::is_relative_specifier;

/// Reads the text of imported files.
#[async_trait]
pub trait SourceResolver: Send + Sync {
    /// Reads the file at `path`.
    ///
    /// # Errors
    /// Returns an IO error if the file cannot be read.
    async fn read(&self, path: &Path) -> io::Result<String>;
}

/// Resolver backed by the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsResolver;

#[async_trait]
impl SourceResolver for FsResolver {
    async fn read(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

/// Resolver serving a fixed map of paths to contents.
///
/// Hosts with unsaved buffers can register them here instead of reading the
/// stale file from disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    files: HashMap<PathBuf, String>,
}

impl MemoryResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `contents` under `path`, replacing any earlier entry.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Builder form of [`MemoryResolver::insert`].
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }
}

#[async_trait]
impl SourceResolver for MemoryResolver {
    async fn read(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not registered", path.display()),
            )
        })
    }
}

/// Maps a module specifier to the file it refers to.
///
/// Returns `None` for non-relative specifiers. `.ts` is appended unless the
/// specifier already ends with it.
///
/// # Arguments
/// * `directory` - Directory of the importing document
/// * `specifier` - Module specifier as written in the import
#[must_use]
pub fn resolve_import_path(directory: &Path, specifier: &str) -> Option<PathBuf> {
    if !is_relative_specifier(specifier) {
        return None;
    }

    let file = if specifier.ends_with(".ts") {
        specifier.to_string()
    } else {
        format!("{specifier}.ts")
    };

    Some(directory.join(file).components().collect())
}
