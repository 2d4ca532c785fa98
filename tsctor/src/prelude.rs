//! Prelude module for convenient imports.
//!
//! ```ignore
//! use tsctor::prelude::*;
//! ```

// Declaration model
pub use tsctor_schema::{
    ClassDeclaration, DeclarationIndex, ImportDeclaration, ParseError, PropertyDeclaration,
    SiblingDeclaration, SiblingKind, SourceFile, TypeClassification, classify, parse_source,
};

// Generation
pub use tsctor_codegen::{AssignmentStrategy, CodegenError, ConstructorGenerator, IndentationPolicy};

// Editor integration
pub use tsctor_inserter::{
    ConstructorInserter, Document, EditorConfig, FsResolver, InsertError, Insertion,
    MemoryResolver, Position, Range, SnippetSink, SourceResolver, TextBufferSink,
};
