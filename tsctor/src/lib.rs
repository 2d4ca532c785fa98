//! # tsctor
//!
//! Generates TypeScript constructors that hydrate a class from a plain
//! options object.
//!
//! Given a class declaration, tsctor emits a
//! `constructor(opts?: Partial<T>)` whose body copies every present option
//! onto the matching instance property. Enum-typed properties accept either
//! the enum value or its member name, class-typed properties are wrapped in
//! `new T(...)`, and arrays are mapped element by element.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tsctor::prelude::*;
//!
//! let inserter = ConstructorInserter::new(FsResolver);
//! let document = Document::new("src/user.ts", source);
//! let mut sink = TextBufferSink::new(document.text());
//!
//! inserter.insert(&document, Position::line_start(4), &mut sink).await?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Declaration model, tokenizer, parser and type classification
//! - [`codegen`] - Indentation policy and the constructor generator
//! - [`inserter`] - Editor configuration, import resolution and snippet sinks

pub mod prelude;

/// Declaration model and TypeScript source parsing.
pub mod schema {
    pub use tsctor_schema::*;
}

/// Constructor snippet generation.
pub mod codegen {
    pub use tsctor_codegen::*;
}

/// Editor-side orchestration.
pub mod inserter {
    pub use tsctor_inserter::*;
}

// Re-export commonly used items at the crate root
pub use tsctor_codegen::{
    ConstructorGenerator, IndentationPolicy, generate_from_file, generate_from_source,
};
pub use tsctor_inserter::{ConstructorInserter, EditorConfig, InsertError};
pub use tsctor_schema::{DeclarationIndex, ParseError, parse_source};
