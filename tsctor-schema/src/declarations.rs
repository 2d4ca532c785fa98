//! Declaration definitions.
//!
//! These are the parsed shapes the generator consumes: the target class with
//! its properties, the imports of a file, and the named sibling declarations
//! a file exports.

/// A parsed class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    /// Class name, used verbatim in the constructor header.
    pub name: String,
    /// Properties in declaration order.
    pub properties: Vec<PropertyDeclaration>,
    /// Line of the `class` keyword (0-based).
    pub start_line: usize,
    /// Line of the closing brace (0-based).
    pub end_line: usize,
}

impl ClassDeclaration {
    /// Creates a new class declaration with no properties.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            start_line: 0,
            end_line: 0,
        }
    }

    /// Sets the line span of the class.
    #[must_use]
    pub fn with_span(mut self, start_line: usize, end_line: usize) -> Self {
        self.start_line = start_line;
        self.end_line = end_line;
        self
    }

    /// Adds a property.
    pub fn add_property(&mut self, property: PropertyDeclaration) {
        self.properties.push(property);
    }

    /// Adds a property, builder style.
    #[must_use]
    pub fn with_property(mut self, property: PropertyDeclaration) -> Self {
        self.add_property(property);
        self
    }

    /// Returns the properties a constructor assigns, in declaration order.
    pub fn instance_properties(&self) -> impl Iterator<Item = &PropertyDeclaration> {
        self.properties.iter().filter(|p| !p.is_static)
    }

    /// Returns true if the given 0-based line falls inside the class.
    #[must_use]
    pub fn contains_line(&self, line: usize) -> bool {
        (self.start_line..=self.end_line).contains(&line)
    }
}

/// A property declared on a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDeclaration {
    /// Property name.
    pub name: String,
    /// Raw annotation text, `None` for untyped properties.
    pub type_annotation: Option<String>,
    /// Whether the property is declared `static`.
    pub is_static: bool,
}

impl PropertyDeclaration {
    /// Creates a non-static property.
    #[must_use]
    pub fn new(name: impl Into<String>, type_annotation: Option<&str>) -> Self {
        Self {
            name: name.into(),
            type_annotation: type_annotation.map(str::to_string),
            is_static: false,
        }
    }

    /// Creates a typed, non-static property.
    #[must_use]
    pub fn typed(name: impl Into<String>, type_annotation: &str) -> Self {
        Self::new(name, Some(type_annotation))
    }

    /// Marks the property as static.
    #[must_use]
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Returns the annotation as a string slice.
    #[must_use]
    pub fn type_annotation(&self) -> Option<&str> {
        self.type_annotation.as_deref()
    }
}

/// Kind of a sibling declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiblingKind {
    /// A class or interface; instantiated with `new`.
    Object,
    /// An enum and its member names in declaration order.
    Enum {
        /// Member names.
        members: Vec<String>,
    },
}

/// A named declaration found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingDeclaration {
    /// Declared name.
    pub name: String,
    /// Declaration kind.
    pub kind: SiblingKind,
}

impl SiblingDeclaration {
    /// Creates an object-kind sibling.
    #[must_use]
    pub fn object(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SiblingKind::Object,
        }
    }

    /// Creates an enum-kind sibling.
    #[must_use]
    pub fn enumeration<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: SiblingKind::Enum {
                members: members.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Returns the enum members, or an empty slice for objects.
    #[must_use]
    pub fn members(&self) -> &[String] {
        match &self.kind {
            SiblingKind::Enum { members } => members,
            SiblingKind::Object => &[],
        }
    }
}

/// A single `import` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    /// Module specifier as written, without quotes.
    pub specifier: String,
    /// Local names bound by the statement.
    pub names: Vec<String>,
    /// Line of the statement (0-based).
    pub line: usize,
}

impl ImportDeclaration {
    /// Creates an import of the given specifier.
    #[must_use]
    pub fn new(specifier: impl Into<String>) -> Self {
        Self {
            specifier: specifier.into(),
            names: Vec::new(),
            line: 0,
        }
    }

    /// Returns true for `./x` and `../x` specifiers.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        is_relative_specifier(&self.specifier)
    }
}

/// Returns true for `./x` and `../x` module specifiers.
#[must_use]
pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../")
}

/// Everything extracted from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    /// Classes in source order.
    pub classes: Vec<ClassDeclaration>,
    /// Imports in source order.
    pub imports: Vec<ImportDeclaration>,
    /// Named classes, interfaces and enums in source order.
    pub declarations: Vec<SiblingDeclaration>,
}

impl SourceFile {
    /// Creates an empty source file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the class whose span contains the line, falling back to the
    /// first class of the file.
    #[must_use]
    pub fn class_at_line(&self, line: usize) -> Option<&ClassDeclaration> {
        self.classes
            .iter()
            .find(|c| c.contains_line(line))
            .or_else(|| self.classes.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_properties_skip_static() {
        let class = ClassDeclaration::new("Config")
            .with_property(PropertyDeclaration::typed("name", "string"))
            .with_property(PropertyDeclaration::typed("DEFAULT", "Config").into_static())
            .with_property(PropertyDeclaration::typed("size", "number"));

        let names: Vec<_> = class.instance_properties().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["name", "size"]);
    }

    #[test]
    fn test_relative_specifier() {
        assert!(is_relative_specifier("./model"));
        assert!(is_relative_specifier("../shared/color"));
        assert!(!is_relative_specifier("lodash"));
        assert!(!is_relative_specifier("@scope/pkg"));
        assert!(!is_relative_specifier("/abs/path"));
        assert!(!is_relative_specifier(".hidden"));

        let import = ImportDeclaration::new("./address");
        assert!(import.is_relative());
        assert!(import.names.is_empty());
        assert!(!ImportDeclaration::new("rxjs").is_relative());
    }

    #[test]
    fn test_sibling_members() {
        let color = SiblingDeclaration::enumeration("Color", ["Red", "Green"]);
        assert_eq!(color.members(), ["Red".to_string(), "Green".to_string()]);

        let point = SiblingDeclaration::object("Point");
        assert!(point.members().is_empty());
    }

    #[test]
    fn test_class_at_line_prefers_enclosing_class() {
        let mut file = SourceFile::new();
        file.classes.push(ClassDeclaration::new("First").with_span(0, 4));
        file.classes.push(ClassDeclaration::new("Second").with_span(6, 12));

        assert_eq!(file.class_at_line(8).map(|c| c.name.as_str()), Some("Second"));
        assert_eq!(file.class_at_line(2).map(|c| c.name.as_str()), Some("First"));
        assert_eq!(file.class_at_line(40).map(|c| c.name.as_str()), Some("First"));
    }

    #[test]
    fn test_class_at_line_empty_file() {
        assert!(SourceFile::new().class_at_line(0).is_none());
    }
}
