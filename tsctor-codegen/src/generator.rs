//! Constructor snippet generation.
//!
//! For every instance property the generated constructor contains one guard,
//! `if (opts?.<name> != null) { ... }`, whose body depends on the property's
//! type classification and on what the declaration index knows about the
//! named type.

use crate::builder::{Line, LineBuilder, render_lines};
use crate::indent::IndentationPolicy;
use tsctor_schema::index::{DeclarationIndex, is_enum_like};
use tsctor_schema::types::{TypeClassification, classify, extract_array_element_type};
use tsctor_schema::{ClassDeclaration, PropertyDeclaration};

/// How a single property is assigned from the options object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentStrategy<'a> {
    /// `this.x = opts.x;`
    Passthrough,
    /// Index the enum by name when given a string, else assign the value.
    EnumLookup {
        /// Enum type name.
        type_name: &'a str,
    },
    /// `this.x = new T(opts.x);`
    Construct {
        /// Class type name.
        type_name: &'a str,
    },
    /// `this.x = [...opts.x];`
    ShallowCopy,
    /// Element-wise enum lookup.
    EnumArray {
        /// Enum element type name.
        element_type: &'a str,
    },
    /// `this.x = opts.x.map(val => new T(val));`
    ConstructArray {
        /// Class element type name.
        element_type: &'a str,
    },
}

impl<'a> AssignmentStrategy<'a> {
    /// Chooses the strategy for a property.
    #[must_use]
    pub fn for_property(property: &'a PropertyDeclaration, index: &DeclarationIndex) -> Self {
        let annotation = property.type_annotation();

        match classify(annotation) {
            TypeClassification::Primitive => Self::Passthrough,
            TypeClassification::Object => {
                let type_name = annotation.unwrap_or_default();
                match index.get(type_name) {
                    None => {
                        tracing::debug!(
                            property = %property.name,
                            type_name,
                            "type not in declaration index, assigning directly"
                        );
                        Self::Passthrough
                    }
                    Some(declaration) if is_enum_like(declaration) => {
                        Self::EnumLookup { type_name }
                    }
                    Some(_) => Self::Construct { type_name },
                }
            }
            TypeClassification::Array => {
                let element = extract_array_element_type(annotation);
                match element.and_then(|name| index.get(name).map(|decl| (name, decl))) {
                    None => Self::ShallowCopy,
                    Some((element_type, declaration)) if is_enum_like(declaration) => {
                        Self::EnumArray { element_type }
                    }
                    Some((element_type, _)) => Self::ConstructArray { element_type },
                }
            }
        }
    }

    /// Emits the guard body for `name` at the builder's current level.
    fn emit(&self, name: &str, out: &mut LineBuilder) {
        match *self {
            Self::Passthrough => out.line(format!("this.{name} = opts.{name};")),
            Self::EnumLookup { type_name } => out.if_else(
                &format!("typeof opts.{name} === 'string'"),
                |out| out.line(format!("this.{name} = {type_name}[opts.{name}];")),
                |out| out.line(format!("this.{name} = opts.{name};")),
            ),
            Self::Construct { type_name } => {
                out.line(format!("this.{name} = new {type_name}(opts.{name});"));
            }
            Self::ShallowCopy => out.line(format!("this.{name} = [...opts.{name}];")),
            Self::EnumArray { element_type } => {
                out.block(format!("this.{name} = opts.{name}.map(val => {{"), "});", |out| {
                    out.if_else(
                        "typeof val === 'string'",
                        |out| out.line(format!("return {element_type}[val];")),
                        |out| out.line("return val;"),
                    );
                });
            }
            Self::ConstructArray { element_type } => {
                out.line(format!(
                    "this.{name} = opts.{name}.map(val => new {element_type}(val));"
                ));
            }
        }
    }
}

/// Generator for a `constructor(opts?: Partial<T>)` snippet.
pub struct ConstructorGenerator<'a> {
    class: &'a ClassDeclaration,
    index: &'a DeclarationIndex,
    policy: &'a IndentationPolicy,
}

impl<'a> ConstructorGenerator<'a> {
    /// Creates a new constructor generator.
    #[must_use]
    pub fn new(
        class: &'a ClassDeclaration,
        index: &'a DeclarationIndex,
        policy: &'a IndentationPolicy,
    ) -> Self {
        Self {
            class,
            index,
            policy,
        }
    }

    /// Returns the structured lines of the constructor.
    #[must_use]
    pub fn lines(&self) -> Vec<Line> {
        let mut out = LineBuilder::at_level(1);
        let header = format!("constructor(opts?: Partial<{}>) {{", self.class.name);

        out.block(header, "}", |out| {
            for property in self.class.instance_properties() {
                let strategy = AssignmentStrategy::for_property(property, self.index);
                tracing::debug!(property = %property.name, ?strategy, "assignment strategy");

                out.block(
                    format!("if (opts?.{} != null) {{", property.name),
                    "}",
                    |out| strategy.emit(&property.name, out),
                );
            }
        });

        out.into_lines()
    }

    /// Generates the constructor snippet.
    #[must_use]
    pub fn generate(&self) -> String {
        render_lines(&self.lines(), self.policy)
    }
}

/// Generates the constructor snippet for `class`.
///
/// Shorthand for [`ConstructorGenerator::generate`].
#[must_use]
pub fn generate(
    class: &ClassDeclaration,
    index: &DeclarationIndex,
    policy: &IndentationPolicy,
) -> String {
    ConstructorGenerator::new(class, index, policy).generate()
}
