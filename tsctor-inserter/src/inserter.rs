//! The `insert constructor` command.

use crate::editor::{Document, Insertion, Position, SnippetSink};
use crate::error::InsertError;
use crate::resolver::{SourceResolver, resolve_import_path};
use tracing::{debug, info, warn};
use tsctor_codegen::ConstructorGenerator;
use tsctor_schema::{DeclarationIndex, SourceFile, parse_source};

/// Generates a constructor for the class under the cursor and hands it to a
/// sink.
#[derive(Debug, Clone, Default)]
pub struct ConstructorInserter<R> {
    resolver: R,
}

impl<R: SourceResolver> ConstructorInserter<R> {
    /// Creates an inserter reading imports through `resolver`.
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Builds the declaration index visible from `document`.
    ///
    /// The document's own declarations go in first, then each relative
    /// import in order. Later entries replace earlier ones with the same
    /// name. Imports that cannot be read or parsed are skipped.
    pub async fn build_index(&self, document: &Document, file: &SourceFile) -> DeclarationIndex {
        let mut index = DeclarationIndex::new();
        index.extend_from(file);

        for import in &file.imports {
            if !import.is_relative() {
                debug!("skipping non-relative import '{}'", import.specifier);
                continue;
            }
            let Some(path) = resolve_import_path(document.directory(), &import.specifier) else {
                continue;
            };

            let source = match self.resolver.read(&path).await {
                Ok(source) => source,
                Err(e) => {
                    warn!("failed to read import {}: {}", path.display(), e);
                    continue;
                }
            };

            match parse_source(&source) {
                Ok(imported) => {
                    info!(
                        "resolved import '{}' ({} declarations)",
                        import.specifier,
                        imported.declarations.len()
                    );
                    index.extend_from(&imported);
                }
                Err(e) => warn!("failed to parse import {}: {}", path.display(), e),
            }
        }

        index
    }

    /// Computes the insertion for the cursor without applying it.
    ///
    /// # Arguments
    /// * `document` - Active document
    /// * `cursor` - Cursor position, zero-based
    ///
    /// # Returns
    /// The insertion, or `None` when the document declares no class.
    ///
    /// # Errors
    /// Returns [`InsertError::Parse`] if the document cannot be parsed.
    pub async fn prepare(
        &self,
        document: &Document,
        cursor: Position,
    ) -> Result<Option<Insertion>, InsertError> {
        let file = parse_source(document.text())?;
        let Some(class) = file.class_at_line(cursor.line) else {
            debug!("no class declaration in {}", document.path().display());
            return Ok(None);
        };

        let index = self.build_index(document, &file).await;
        let policy = document.config().indentation_policy();
        let snippet = ConstructorGenerator::new(class, &index, &policy).generate();

        debug!(
            "generated constructor for {} ({} lines)",
            class.name,
            snippet.lines().count()
        );
        Ok(Some(Insertion::at(snippet, Position::line_start(cursor.line))))
    }

    /// Generates the constructor and applies it to `sink`.
    ///
    /// # Returns
    /// The applied insertion, or `None` when the document declares no class.
    ///
    /// # Errors
    /// Returns [`InsertError::Parse`] if the document cannot be parsed, or
    /// [`InsertError::Sink`] if the sink rejects the insertion.
    pub async fn insert(
        &self,
        document: &Document,
        cursor: Position,
        sink: &mut dyn SnippetSink,
    ) -> Result<Option<Insertion>, InsertError> {
        let Some(insertion) = self.prepare(document, cursor).await? else {
            return Ok(None);
        };

        sink.insert(&insertion)?;
        Ok(Some(insertion))
    }
}
