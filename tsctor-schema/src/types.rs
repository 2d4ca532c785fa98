//! Type annotation classification.
//!
//! Property annotations are kept as raw text. This module decides which
//! assignment family a property belongs to, without consulting any other
//! declaration; telling a plain object apart from an enum is left to the
//! [`DeclarationIndex`](crate::index::DeclarationIndex).

/// Annotations that are assigned as-is.
pub const PRIMITIVE_TYPES: [&str; 3] = ["string", "number", "boolean"];

/// Assignment family of a property type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClassification {
    /// `string`, `number`, `boolean`, or no annotation at all.
    Primitive,
    /// `T[]` or `Array<T>`.
    Array,
    /// Any other named type, including malformed annotations.
    Object,
}

impl TypeClassification {
    /// Returns the lowercase name used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl std::fmt::Display for TypeClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if the annotation is one of the primitive type keywords.
#[must_use]
pub fn is_primitive(type_annotation: &str) -> bool {
    PRIMITIVE_TYPES.contains(&type_annotation)
}

/// Classifies a raw type annotation.
///
/// # Arguments
/// * `type_annotation` - Annotation text, `None` when the property is untyped
#[must_use]
pub fn classify(type_annotation: Option<&str>) -> TypeClassification {
    let Some(annotation) = type_annotation else {
        return TypeClassification::Primitive;
    };

    if is_primitive(annotation) {
        return TypeClassification::Primitive;
    }

    if annotation == "Array" || extract_array_element_type(Some(annotation)).is_some() {
        return TypeClassification::Array;
    }

    TypeClassification::Object
}

/// Extracts `T` from `Array<T>` or `T[]`.
///
/// Returns `None` for any other shape; this is a query, not a fallible parse.
#[must_use]
pub fn extract_array_element_type(type_annotation: Option<&str>) -> Option<&str> {
    let annotation = type_annotation?;

    if let Some(inner) = annotation
        .strip_prefix("Array<")
        .and_then(|rest| rest.strip_suffix('>'))
    {
        return is_identifier(inner).then_some(inner);
    }

    annotation
        .strip_suffix("[]")
        .filter(|inner| is_identifier(inner))
}

/// Returns true for a non-empty run of ASCII word characters.
#[must_use]
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_primitives() {
        assert_eq!(classify(Some("string")), TypeClassification::Primitive);
        assert_eq!(classify(Some("number")), TypeClassification::Primitive);
        assert_eq!(classify(Some("boolean")), TypeClassification::Primitive);
    }

    #[test]
    fn test_classify_missing_annotation_is_primitive() {
        assert_eq!(classify(None), TypeClassification::Primitive);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(classify(Some("String")), TypeClassification::Object);
        assert_eq!(classify(Some("Number")), TypeClassification::Object);
        assert_eq!(classify(Some("bool")), TypeClassification::Object);
    }

    #[test]
    fn test_classify_arrays() {
        assert_eq!(classify(Some("TestObject[]")), TypeClassification::Array);
        assert_eq!(classify(Some("Array<TestObject>")), TypeClassification::Array);
        assert_eq!(classify(Some("string[]")), TypeClassification::Array);
        assert_eq!(classify(Some("Array")), TypeClassification::Array);
    }

    #[test]
    fn test_classify_nested_generic_is_object() {
        assert_eq!(
            classify(Some("Array<Map<string>>")),
            TypeClassification::Object
        );
        assert_eq!(classify(Some("Foo[][]")), TypeClassification::Object);
    }

    #[test]
    fn test_classify_malformed_defaults_to_object() {
        assert_eq!(classify(Some("")), TypeClassification::Object);
        assert_eq!(classify(Some("Array<Foo")), TypeClassification::Object);
        assert_eq!(classify(Some("Foo]")), TypeClassification::Object);
        assert_eq!(classify(Some("[]")), TypeClassification::Object);
    }

    #[test]
    fn test_classify_named_type_is_object() {
        assert_eq!(classify(Some("TestObject")), TypeClassification::Object);
        assert_eq!(classify(Some("Color")), TypeClassification::Object);
    }

    #[test]
    fn test_extract_array_element_type() {
        assert_eq!(
            extract_array_element_type(Some("Array<TestObject>")),
            Some("TestObject")
        );
        assert_eq!(
            extract_array_element_type(Some("TestObject[]")),
            Some("TestObject")
        );
        assert_eq!(extract_array_element_type(Some("my_type_2[]")), Some("my_type_2"));
    }

    #[test]
    fn test_extract_array_element_type_absent() {
        assert_eq!(extract_array_element_type(None), None);
        assert_eq!(extract_array_element_type(Some("TestObject")), None);
        assert_eq!(extract_array_element_type(Some("Array")), None);
        assert_eq!(extract_array_element_type(Some("Array<>")), None);
        assert_eq!(extract_array_element_type(Some("[]")), None);
    }

    #[test]
    fn test_classification_is_idempotent() {
        for annotation in ["string", "Foo[]", "Array<Bar>", "Baz", "", "Array<"] {
            let first = classify(Some(annotation));
            let second = classify(Some(annotation));
            assert_eq!(first, second);
            assert_eq!(
                extract_array_element_type(Some(annotation)),
                extract_array_element_type(Some(annotation))
            );
        }
    }

    #[test]
    fn test_classification_display() {
        assert_eq!(TypeClassification::Array.to_string(), "array");
        assert_eq!(TypeClassification::Object.as_str(), "object");
    }
}
