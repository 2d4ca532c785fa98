//! TypeScript declaration parser.
//!
//! This module recognizes the declarations constructor generation needs:
//! imports, classes with their properties, interfaces, and enums. Anything
//! else (functions, statements, namespaces, type aliases) is skipped as a
//! balanced token group.

use crate::declarations::{
    ClassDeclaration, ImportDeclaration, PropertyDeclaration, SiblingDeclaration, SourceFile,
};
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind, tokenize};

/// Member modifiers that may precede a property name.
const MEMBER_MODIFIERS: [&str; 9] = [
    "static",
    "readonly",
    "public",
    "private",
    "protected",
    "declare",
    "override",
    "abstract",
    "accessor",
];

/// Parses TypeScript source text into its declarations.
///
/// # Arguments
/// * `source` - Source text of one file
///
/// # Returns
/// Parsed source file or parse error.
///
/// # Errors
/// Returns `ParseError` for unterminated literals, unbalanced delimiters or
/// input that ends inside a declaration.
pub fn parse_source(source: &str) -> Result<SourceFile, ParseError> {
    let tokens = tokenize(source)?;
    Parser::new(source, &tokens).parse()
}

struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    fn parse(mut self) -> Result<SourceFile, ParseError> {
        let mut file = SourceFile::new();

        while let Some(token) = self.peek() {
            match &token.kind {
                TokenKind::Ident(ident) => match ident.as_str() {
                    "import" => {
                        if let Some(import) = self.parse_import() {
                            file.imports.push(import);
                        }
                    }
                    "class" => {
                        if let Some(class) = self.parse_class()? {
                            file.declarations
                                .push(SiblingDeclaration::object(class.name.clone()));
                            file.classes.push(class);
                        }
                    }
                    "interface" => {
                        if let Some(name) = self.parse_interface()? {
                            file.declarations.push(SiblingDeclaration::object(name));
                        }
                    }
                    "enum" => {
                        if let Some(declaration) = self.parse_enum()? {
                            file.declarations.push(declaration);
                        }
                    }
                    _ => self.advance(),
                },
                TokenKind::Punct('{' | '(' | '[') => self.skip_group()?,
                TokenKind::Punct(c @ ('}' | ')' | ']')) => {
                    return Err(ParseError::Unbalanced {
                        delimiter: *c,
                        line: token.line + 1,
                    });
                }
                _ => self.advance(),
            }
        }

        Ok(file)
    }

    // ---- token access ----

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_at(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + offset)
    }

    fn previous(&self) -> Option<&'a Token> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn next_is_punct(&self, c: char) -> bool {
        self.peek().is_some_and(|t| t.is_punct(c))
    }

    fn last_line(&self) -> usize {
        self.tokens.last().map_or(1, |t| t.line + 1)
    }

    fn expect_punct(&mut self, c: char, context: &str) -> Result<&'a Token, ParseError> {
        match self.peek() {
            Some(token) if token.is_punct(c) => {
                self.advance();
                Ok(token)
            }
            Some(token) => Err(ParseError::unexpected(
                token.describe(),
                format!("'{c}' in {context}"),
                token.line + 1,
            )),
            None => Err(ParseError::eof(context, self.last_line())),
        }
    }

    /// Skips a balanced `{}`, `()` or `[]` group starting at the current token.
    fn skip_group(&mut self) -> Result<(), ParseError> {
        let mut stack = Vec::new();

        while let Some(token) = self.peek() {
            self.advance();
            match token.kind {
                TokenKind::Punct(open @ ('{' | '(' | '[')) => stack.push((open, token.line)),
                TokenKind::Punct(close @ ('}' | ')' | ']')) => match stack.pop() {
                    Some((open, _)) if closing(open) == close => {
                        if stack.is_empty() {
                            return Ok(());
                        }
                    }
                    _ => {
                        return Err(ParseError::Unbalanced {
                            delimiter: close,
                            line: token.line + 1,
                        });
                    }
                },
                _ => {}
            }
            if stack.is_empty() {
                return Ok(());
            }
        }

        let line = stack.last().map_or(self.last_line(), |&(_, line)| line + 1);
        Err(ParseError::eof("a bracketed group", line))
    }

    /// Source text between two tokens with whitespace runs collapsed.
    fn text_between(&self, first: &Token, last: &Token) -> String {
        self.source[first.start..last.end]
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    // ---- imports ----

    fn parse_import(&mut self) -> Option<ImportDeclaration> {
        let keyword = self.peek()?;
        self.advance();

        // `import(...)` and `import.meta` are expressions.
        if self.next_is_punct('(') || self.next_is_punct('.') {
            return None;
        }

        let mut names = Vec::new();
        while let Some(token) = self.peek() {
            match &token.kind {
                TokenKind::Str(specifier) => {
                    self.advance();
                    if self.next_is_punct(';') {
                        self.advance();
                    }
                    return Some(ImportDeclaration {
                        specifier: specifier.clone(),
                        names,
                        line: keyword.line,
                    });
                }
                TokenKind::Ident(ident) if ident == "as" => {
                    self.advance();
                    if let Some(alias) = self.peek().and_then(Token::ident) {
                        names.pop();
                        names.push(alias.to_string());
                        self.advance();
                    }
                }
                TokenKind::Ident(ident) if ident == "type" || ident == "from" => self.advance(),
                TokenKind::Ident(ident) => {
                    names.push(ident.clone());
                    self.advance();
                }
                // Namespace import; replaced by its `as` alias.
                TokenKind::Punct('*') => {
                    names.push("*".to_string());
                    self.advance();
                }
                // `import x = require(...)` and stray statements end here.
                TokenKind::Punct(';' | '=') => return None,
                _ => self.advance(),
            }
        }

        None
    }

    // ---- classes ----

    fn parse_class(&mut self) -> Result<Option<ClassDeclaration>, ParseError> {
        let Some(keyword) = self.peek() else {
            return Ok(None);
        };
        self.advance();

        let Some(name) = self.peek().and_then(Token::ident) else {
            // Anonymous class expression; the body is skipped by the caller.
            return Ok(None);
        };
        if name == "extends" || name == "implements" {
            return Ok(None);
        }
        self.advance();

        self.skip_heritage("class declaration")?;
        self.expect_punct('{', "class declaration")?;

        let mut class = ClassDeclaration::new(name);
        class.start_line = keyword.line;

        loop {
            let Some(token) = self.peek() else {
                return Err(ParseError::eof(
                    format!("class '{}'", class.name),
                    self.last_line(),
                ));
            };

            if token.is_punct('}') {
                self.advance();
                class.end_line = token.line;
                return Ok(Some(class));
            }

            if let Some(property) = self.parse_member()? {
                tracing::trace!(class = %class.name, property = %property.name, "parsed property");
                class.add_property(property);
            }
        }
    }

    /// Skips type parameters and `extends`/`implements` clauses up to the body.
    fn skip_heritage(&mut self, context: &str) -> Result<(), ParseError> {
        let mut angle_depth = 0usize;

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Punct('{') if angle_depth == 0 => return Ok(()),
                TokenKind::Punct('<') => {
                    angle_depth += 1;
                    self.advance();
                }
                TokenKind::Punct('>') => {
                    angle_depth = angle_depth.saturating_sub(1);
                    self.advance();
                }
                TokenKind::Punct('{' | '(' | '[') => self.skip_group()?,
                TokenKind::Punct(';') => {
                    return Err(ParseError::unexpected(
                        ";",
                        format!("body of {context}"),
                        token.line + 1,
                    ));
                }
                _ => self.advance(),
            }
        }

        Err(ParseError::eof(context, self.last_line()))
    }

    /// Parses one class member, returning it when it is a property.
    fn parse_member(&mut self) -> Result<Option<PropertyDeclaration>, ParseError> {
        let Some(first) = self.peek() else {
            return Ok(None);
        };

        if first.is_punct(';') || first.is_punct(',') {
            self.advance();
            return Ok(None);
        }

        if first.is_punct('@') {
            self.skip_decorator()?;
            return Ok(None);
        }

        let mut is_static = false;
        while let Some(ident) = self.peek().and_then(Token::ident) {
            if !MEMBER_MODIFIERS.contains(&ident) || !self.modifier_applies() {
                break;
            }
            is_static |= ident == "static";
            self.advance();
        }

        // `static { ... }` initialization block.
        if self.next_is_punct('{') {
            self.skip_group()?;
            return Ok(None);
        }

        let Some(name_token) = self.peek() else {
            return Ok(None);
        };

        let name = match &name_token.kind {
            TokenKind::Ident(ident) => ident.clone(),
            // Private names, computed keys, index signatures, quoted keys.
            _ => {
                self.skip_member()?;
                return Ok(None);
            }
        };

        if matches!(name.as_str(), "get" | "set" | "async") && self.accessor_applies() {
            self.skip_member()?;
            return Ok(None);
        }

        self.advance();

        if self.next_is_punct('(') || self.next_is_punct('<') {
            tracing::trace!(member = %name, "skipping method");
            self.skip_member()?;
            return Ok(None);
        }

        if self.next_is_punct('?') || self.next_is_punct('!') {
            self.advance();
            if self.next_is_punct('(') {
                self.skip_member()?;
                return Ok(None);
            }
        }

        let type_annotation = if self.next_is_punct(':') {
            self.advance();
            self.parse_type_annotation()?
        } else {
            None
        };

        if self.next_is_punct('=') {
            self.advance();
            self.skip_initializer()?;
        }

        if self.next_is_punct(';') || self.next_is_punct(',') {
            self.advance();
        }

        Ok(Some(PropertyDeclaration {
            name,
            type_annotation,
            is_static,
        }))
    }

    /// A modifier keyword is a modifier only when a member name follows it.
    fn modifier_applies(&self) -> bool {
        self.peek_at(1).is_some_and(|next| match &next.kind {
            TokenKind::Ident(_) | TokenKind::Str(_) | TokenKind::Number(_) => true,
            TokenKind::Punct(c) => matches!(c, '[' | '#' | '*' | '{'),
            TokenKind::Regex(_) => false,
        })
    }

    /// `get x()`, `set x(v)` and `async x()` start accessors and methods.
    fn accessor_applies(&self) -> bool {
        self.peek_at(1).is_some_and(|next| match &next.kind {
            TokenKind::Ident(_) | TokenKind::Str(_) | TokenKind::Number(_) => true,
            TokenKind::Punct(c) => matches!(c, '[' | '#' | '*'),
            TokenKind::Regex(_) => false,
        })
    }

    /// Skips `@name`, `@a.b.c` and `@name(...)`.
    fn skip_decorator(&mut self) -> Result<(), ParseError> {
        self.advance();
        if self.peek().and_then(Token::ident).is_some() {
            self.advance();
        }
        while self.next_is_punct('.') && self.peek_at(1).and_then(Token::ident).is_some() {
            self.advance();
            self.advance();
        }
        if self.next_is_punct('(') {
            self.skip_group()?;
        }
        Ok(())
    }

    /// Skips a member that is not a property: methods, accessors, index
    /// signatures and anything unrecognized.
    fn skip_member(&mut self) -> Result<(), ParseError> {
        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Punct(';') => {
                    self.advance();
                    return Ok(());
                }
                TokenKind::Punct('}') => return Ok(()),
                TokenKind::Punct('{') => {
                    self.skip_group()?;
                    // A method body ends the member; an object return type
                    // is followed by more of the signature on the same line.
                    let continues = self.peek().is_some_and(|next| {
                        next.line == token.line
                            && matches!(next.kind, TokenKind::Punct('{' | '|' | '&' | '[' | ';'))
                    });
                    if !continues {
                        return Ok(());
                    }
                }
                TokenKind::Punct('(' | '[') => self.skip_group()?,
                TokenKind::Punct(c @ (')' | ']')) => {
                    return Err(ParseError::Unbalanced {
                        delimiter: c,
                        line: token.line + 1,
                    });
                }
                _ => self.advance(),
            }
        }
        Ok(())
    }

    /// Reads a type annotation up to `=`, `;`, `,`, the end of the class
    /// body, or a line break that ends the member.
    fn parse_type_annotation(&mut self) -> Result<Option<String>, ParseError> {
        let Some(first) = self.peek() else {
            return Err(ParseError::eof("type annotation", self.last_line()));
        };

        let mut angle_depth = 0usize;
        let mut last: Option<&'a Token> = None;

        while let Some(token) = self.peek() {
            if angle_depth == 0 {
                if let Some(previous) = last {
                    if ends_member(previous, token, Position::Type) {
                        break;
                    }
                }
                match token.kind {
                    TokenKind::Punct(';' | ',' | '}' | ')' | ']') => break,
                    TokenKind::Punct('=') if !self.is_arrow() => break,
                    _ => {}
                }
            }

            match token.kind {
                TokenKind::Punct('{' | '(' | '[') => {
                    self.skip_group()?;
                    last = self.previous();
                    continue;
                }
                TokenKind::Punct('<') => angle_depth += 1,
                TokenKind::Punct('>') if !follows_equals(last, token) => {
                    angle_depth = angle_depth.saturating_sub(1);
                }
                TokenKind::Punct(c @ ('}' | ')' | ']')) => {
                    return Err(ParseError::Unbalanced {
                        delimiter: c,
                        line: token.line + 1,
                    });
                }
                _ => {}
            }

            last = Some(token);
            self.advance();
        }

        Ok(last.map(|last| self.text_between(first, last)))
    }

    /// True when the current `=` is the first half of `=>`.
    fn is_arrow(&self) -> bool {
        match (self.peek(), self.peek_at(1)) {
            (Some(eq), Some(gt)) => eq.is_punct('=') && gt.is_punct('>') && eq.end == gt.start,
            _ => false,
        }
    }

    /// Skips a property initializer up to the end of the member.
    ///
    /// A `<` glued to an identifier opens a type argument list, as in
    /// `new Map<K, V>()` or `b as Array<T>`. Inside one, `,` does not end the
    /// member, and its closing `>` at the end of a line does not continue it.
    fn skip_initializer(&mut self) -> Result<(), ParseError> {
        let mut last: Option<&'a Token> = None;
        let mut angle_depth = 0usize;
        let mut last_closes_generic = false;

        while let Some(token) = self.peek() {
            if let Some(previous) = last {
                let position = if last_closes_generic {
                    Position::Type
                } else {
                    Position::Initializer
                };
                if ends_member(previous, token, position) {
                    break;
                }
            }

            let mut closes_generic = false;
            match token.kind {
                TokenKind::Punct(',') if angle_depth > 0 => {}
                TokenKind::Punct(';' | ',' | '}') => break,
                TokenKind::Punct('{' | '(' | '[') => {
                    self.skip_group()?;
                    last = self.previous();
                    last_closes_generic = false;
                    continue;
                }
                TokenKind::Punct(c @ (')' | ']')) => {
                    return Err(ParseError::Unbalanced {
                        delimiter: c,
                        line: token.line + 1,
                    });
                }
                TokenKind::Punct('<') if opens_type_arguments(last, token) => angle_depth += 1,
                TokenKind::Punct('>') if angle_depth > 0 && !follows_equals(last, token) => {
                    angle_depth -= 1;
                    closes_generic = true;
                }
                _ => {}
            }
            last_closes_generic = closes_generic;
            last = Some(token);
            self.advance();
        }

        Ok(())
    }

    // ---- interfaces and enums ----

    fn parse_interface(&mut self) -> Result<Option<String>, ParseError> {
        self.advance();

        let Some(name) = self.peek().and_then(Token::ident) else {
            return Ok(None);
        };
        self.advance();

        self.skip_heritage("interface declaration")?;
        self.skip_group()?;

        Ok(Some(name.to_string()))
    }

    fn parse_enum(&mut self) -> Result<Option<SiblingDeclaration>, ParseError> {
        self.advance();

        let Some(name) = self.peek().and_then(Token::ident) else {
            return Ok(None);
        };
        self.advance();
        if !self.next_is_punct('{') {
            return Ok(None);
        }
        self.expect_punct('{', "enum declaration")?;

        let mut members = Vec::new();
        loop {
            let Some(token) = self.peek() else {
                return Err(ParseError::eof(format!("enum '{name}'"), self.last_line()));
            };

            match &token.kind {
                TokenKind::Punct('}') => {
                    self.advance();
                    break;
                }
                TokenKind::Punct(',') => self.advance(),
                TokenKind::Ident(member) | TokenKind::Str(member) => {
                    members.push(member.clone());
                    self.advance();
                    if self.next_is_punct('=') {
                        self.advance();
                        self.skip_initializer()?;
                    }
                }
                TokenKind::Punct('[') => self.skip_group()?,
                _ => {
                    return Err(ParseError::unexpected(
                        token.describe(),
                        format!("member of enum '{name}'"),
                        token.line + 1,
                    ));
                }
            }
        }

        Ok(Some(SiblingDeclaration::enumeration(name, members)))
    }
}

fn closing(open: char) -> char {
    match open {
        '{' => '}',
        '(' => ')',
        _ => ']',
    }
}

/// True when `token` is `<` directly after an identifier.
fn opens_type_arguments(previous: Option<&Token>, token: &Token) -> bool {
    previous.is_some_and(|p| p.ident().is_some() && p.end == token.start)
}

/// True when `token` is `>` immediately preceded by `=`, forming `=>`.
fn follows_equals(previous: Option<&Token>, token: &Token) -> bool {
    previous.is_some_and(|p| p.is_punct('=') && p.end == token.start)
}

/// Where a line break is being judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Type,
    Initializer,
}

/// Decides whether a line break between `previous` and `token` ends the
/// member (automatic semicolon insertion).
fn ends_member(previous: &Token, token: &Token, position: Position) -> bool {
    if token.line <= previous.line {
        return false;
    }

    let continues_previous = match &previous.kind {
        TokenKind::Punct(c) => {
            matches!(c, '|' | '&' | ',' | '<' | ':' | '=' | '?' | '+' | '-' | '*' | '.')
                || *c == '>' && position == Position::Initializer
        }
        TokenKind::Ident(ident) => matches!(
            ident.as_str(),
            "extends" | "keyof" | "typeof" | "new" | "await" | "as" | "in" | "instanceof"
        ),
        _ => false,
    };
    if continues_previous {
        return false;
    }

    !matches!(
        token.kind,
        TokenKind::Punct('|' | '&' | '.' | '?' | '+' | '*' | '/' | '=')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> SourceFile {
        parse_source(source).expect("Failed to parse source")
    }

    fn property_types(class: &ClassDeclaration) -> Vec<(&str, Option<&str>)> {
        class
            .properties
            .iter()
            .map(|p| (p.name.as_str(), p.type_annotation()))
            .collect()
    }

    #[test]
    fn test_parse_single_property_class() {
        let file = parse("export class TestClass {\n  string?: String;\n}");

        assert_eq!(file.classes.len(), 1);
        let class = &file.classes[0];
        assert_eq!(class.name, "TestClass");
        assert_eq!(property_types(class), vec![("string", Some("String"))]);
        assert_eq!(class.start_line, 0);
        assert_eq!(class.end_line, 2);
    }

    #[test]
    fn test_parse_property_shapes() {
        let source = r#"
export default class Order {
  id!: number;
  tags: string[] = [];
  items: Array<OrderItem>;
  status?: Status = Status.Open;
  untyped = 5;
  readonly note: string | null = null;
  private handler: (value: string) => void = () => {};
  static DEFAULT: Order;
  meta: { created: Date };
}
"#;
        let file = parse(source);
        let class = &file.classes[0];

        assert_eq!(
            property_types(class),
            vec![
                ("id", Some("number")),
                ("tags", Some("string[]")),
                ("items", Some("Array<OrderItem>")),
                ("status", Some("Status")),
                ("untyped", None),
                ("note", Some("string | null")),
                ("handler", Some("(value: string) => void")),
                ("DEFAULT", Some("Order")),
                ("meta", Some("{ created: Date }")),
            ]
        );
        assert!(class.properties[7].is_static);
        assert!(!class.properties[0].is_static);
    }

    #[test]
    fn test_parse_skips_methods_and_accessors() {
        let source = r#"
class Widget {
  name: string;

  constructor(name: string) {
    this.name = name;
  }

  get label(): string {
    return this.name;
  }

  set label(value: string) {
    this.name = value;
  }

  async load(): Promise<void> {
    await fetch('/x');
  }

  render<T>(input: T): { html: string } {
    return { html: '' };
  }

  abstract draw(): void;

  [key: string]: unknown;

  size: number;
}
"#;
        let file = parse(source);
        let class = &file.classes[0];
        assert_eq!(
            property_types(class),
            vec![("name", Some("string")), ("size", Some("number"))]
        );
    }

    #[test]
    fn test_parse_properties_without_semicolons() {
        let source = "class Loose {\n  first: string\n  second?: Array<Item>\n  third = 'x'\n  fourth: number\n}";
        let file = parse(source);
        assert_eq!(
            property_types(&file.classes[0]),
            vec![
                ("first", Some("string")),
                ("second", Some("Array<Item>")),
                ("third", None),
                ("fourth", Some("number")),
            ]
        );
    }

    #[test]
    fn test_parse_regex_initializer() {
        let file = parse("class Validator {\n  pattern = /it's/;\n  name?: string;\n}");
        assert_eq!(
            property_types(&file.classes[0]),
            vec![("pattern", None), ("name", Some("string"))]
        );
    }

    #[test]
    fn test_parse_generic_initializer_ends_at_line_break() {
        let file = parse("class Cast {\n  a = b as Array<T>\n  next?: string\n}");
        let names: Vec<_> = file.classes[0]
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "next"]);
    }

    #[test]
    fn test_parse_type_arguments_in_initializer() {
        let source = "class Cache {\n  entries = new Map<string, Entry>();\n  size: number = 0;\n}";
        let file = parse(source);
        assert_eq!(
            property_types(&file.classes[0]),
            vec![("entries", None), ("size", Some("number"))]
        );
    }

    #[test]
    fn test_parse_comparison_continues_initializer() {
        let file = parse("class Flags {\n  big = count >\n    limit\n  next?: boolean\n}");
        let names: Vec<_> = file.classes[0]
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["big", "next"]);
    }

    #[test]
    fn test_parse_multiline_union_type() {
        let source = "class Multi {\n  value:\n    | 'a'\n    | 'b';\n  next: number;\n}";
        let file = parse(source);
        assert_eq!(
            property_types(&file.classes[0]),
            vec![("value", Some("| 'a' | 'b'")), ("next", Some("number"))]
        );
    }

    #[test]
    fn test_parse_decorated_properties() {
        let source = "class Entity {\n  @Column({ type: 'int' })\n  id: number;\n  @Input() label: string;\n}";
        let file = parse(source);
        assert_eq!(
            property_types(&file.classes[0]),
            vec![("id", Some("number")), ("label", Some("string"))]
        );
    }

    #[test]
    fn test_parse_class_heritage() {
        let source = "export class Child<T extends { id: number }> extends Base<T> implements A, B {\n  value: T;\n}";
        let file = parse(source);
        assert_eq!(file.classes[0].name, "Child");
        assert_eq!(property_types(&file.classes[0]), vec![("value", Some("T"))]);
    }

    #[test]
    fn test_parse_imports() {
        let source = r#"
import { TestObject } from './test-object';
import Color, { Shade as Tone } from "../color";
import * as fs from 'fs';
import type { Only } from './types';
import './side-effect';
const lazy = import('./lazy');
import legacy = require('legacy');
"#;
        let file = parse(source);
        let specifiers: Vec<_> = file.imports.iter().map(|i| i.specifier.as_str()).collect();
        assert_eq!(
            specifiers,
            vec!["./test-object", "../color", "fs", "./types", "./side-effect"]
        );
        assert_eq!(file.imports[0].names, vec!["TestObject"]);
        assert_eq!(file.imports[1].names, vec!["Color", "Tone"]);
        assert_eq!(file.imports[2].names, vec!["fs"]);
        assert_eq!(file.imports[3].names, vec!["Only"]);
        assert!(file.imports[4].names.is_empty());
        assert_eq!(file.imports[1].line, 2);
    }

    #[test]
    fn test_parse_enums() {
        let source = r#"
export enum Color { Red, Green = 'green', "Blue" = 1 << 2 }
export const enum Direction {
  Up = 1,
  Down,
}
enum Empty {}
"#;
        let file = parse(source);
        assert_eq!(
            file.declarations,
            vec![
                SiblingDeclaration::enumeration("Color", ["Red", "Green", "Blue"]),
                SiblingDeclaration::enumeration("Direction", ["Up", "Down"]),
                SiblingDeclaration::enumeration("Empty", Vec::<String>::new()),
            ]
        );
    }

    #[test]
    fn test_parse_sibling_declarations() {
        let source = r#"
export interface Shape<T> extends Base { kind: T; }
export class TestObject { value?: number; }
type Alias = { a: string };
function helper() { class Hidden {} }
"#;
        let file = parse(source);
        assert_eq!(
            file.declarations,
            vec![
                SiblingDeclaration::object("Shape"),
                SiblingDeclaration::object("TestObject"),
            ]
        );
        assert_eq!(file.classes.len(), 1);
    }

    #[test]
    fn test_parse_class_without_properties() {
        let file = parse("class Empty {}");
        assert_eq!(file.classes[0].name, "Empty");
        assert!(file.classes[0].properties.is_empty());
    }

    #[test]
    fn test_parse_anonymous_class_is_ignored() {
        let file = parse("export default class { x: number; }\nconst A = class extends B {};");
        assert!(file.classes.is_empty());
    }

    #[test]
    fn test_parse_no_class() {
        let file = parse("export const answer = 42;\nexport function f() { return 1; }\n");
        assert!(file.classes.is_empty());
        assert!(file.imports.is_empty());
    }

    #[test]
    fn test_parse_unclosed_class_is_error() {
        let err = parse_source("class Broken {\n  a: string;\n").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_parse_stray_closing_brace_is_error() {
        let err = parse_source("const a = 1;\n}\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::Unbalanced {
                delimiter: '}',
                line: 2
            }
        );
    }

    #[test]
    fn test_parse_mismatched_group_is_error() {
        let err = parse_source("function f() { return (1 }").unwrap_err();
        assert!(matches!(err, ParseError::Unbalanced { delimiter: '}', .. }));
    }
}
