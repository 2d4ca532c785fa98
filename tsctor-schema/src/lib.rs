//! # tsctor Schema
//!
//! Declaration model and classification for constructor generation.
//!
//! This crate provides:
//! - Class, property, import, and sibling declaration types
//! - A minimal TypeScript declaration parser
//! - Type annotation classification
//! - The declaration index used to resolve nested types

pub mod declarations;
pub mod error;
pub mod index;
pub mod lexer;
pub mod parser;
pub mod types;

pub use declarations::{
    ClassDeclaration, ImportDeclaration, PropertyDeclaration, SiblingDeclaration, SiblingKind,
    SourceFile,
};
pub use error::ParseError;
pub use index::{DeclarationIndex, is_enum_like};
pub use parser::parse_source;
pub use types::{TypeClassification, classify, extract_array_element_type};
