//! # tsctor Codegen
//!
//! Constructor snippet generation from TypeScript class declarations.
//!
//! This crate provides:
//! - The indentation policy applied to generated text
//! - A line builder that records nesting levels
//! - The constructor snippet generator
//! - Convenience entry points from source text and files

pub mod builder;
pub mod error;
pub mod generator;
pub mod indent;

pub use builder::{Line, LineBuilder};
pub use error::CodegenError;
pub use generator::{AssignmentStrategy, ConstructorGenerator, generate};
pub use indent::IndentationPolicy;

use tsctor_schema::{DeclarationIndex, parse_source};

/// Generates a constructor for the first class in a TypeScript source string.
///
/// Only declarations in the same source are indexed; imports are not
/// followed.
///
/// # Arguments
/// * `source` - TypeScript source text
/// * `policy` - Indentation to render with
///
/// # Returns
/// Generated snippet, or `None` when the source declares no class.
///
/// # Errors
/// Returns `CodegenError` if parsing fails.
pub fn generate_from_source(
    source: &str,
    policy: &IndentationPolicy,
) -> Result<Option<String>, CodegenError> {
    let file = parse_source(source)?;
    let Some(class) = file.classes.first() else {
        return Ok(None);
    };

    let mut index = DeclarationIndex::new();
    index.extend_from(&file);

    Ok(Some(generate(class, &index, policy)))
}

/// Generates a constructor for the first class in a TypeScript file.
///
/// # Arguments
/// * `path` - Path to the TypeScript file
/// * `policy` - Indentation to render with
///
/// # Returns
/// Generated snippet, or `None` when the file declares no class.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(
    path: &std::path::Path,
    policy: &IndentationPolicy,
) -> Result<Option<String>, CodegenError> {
    let source = std::fs::read_to_string(path)?;
    generate_from_source(&source, policy)
}
