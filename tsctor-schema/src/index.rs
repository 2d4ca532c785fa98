//! Declaration index.
//!
//! A name-keyed table of the sibling declarations visible to the class being
//! generated. It is rebuilt for every invocation from the active document and
//! its relative imports.

use crate::declarations::{SiblingDeclaration, SiblingKind, SourceFile};
use std::collections::HashMap;

/// Lookup table from type name to sibling declaration.
#[derive(Debug, Clone, Default)]
pub struct DeclarationIndex {
    declarations: HashMap<String, SiblingDeclaration>,
}

impl DeclarationIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a declaration, replacing any earlier one with the same name.
    ///
    /// Returns the replaced declaration.
    pub fn insert(&mut self, declaration: SiblingDeclaration) -> Option<SiblingDeclaration> {
        self.declarations
            .insert(declaration.name.clone(), declaration)
    }

    /// Inserts every declaration of a parsed file in source order.
    pub fn extend_from(&mut self, source: &SourceFile) {
        self.extend(source.declarations.iter().cloned());
    }

    /// Gets a declaration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SiblingDeclaration> {
        self.declarations.get(name)
    }

    /// Returns true if a declaration with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.declarations.contains_key(name)
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl Extend<SiblingDeclaration> for DeclarationIndex {
    fn extend<T: IntoIterator<Item = SiblingDeclaration>>(&mut self, iter: T) {
        for declaration in iter {
            self.insert(declaration);
        }
    }
}

impl FromIterator<SiblingDeclaration> for DeclarationIndex {
    fn from_iter<T: IntoIterator<Item = SiblingDeclaration>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

/// Returns true if the declaration is an enum with at least one member.
#[must_use]
pub fn is_enum_like(declaration: &SiblingDeclaration) -> bool {
    matches!(&declaration.kind, SiblingKind::Enum { members } if !members.is_empty())
}
