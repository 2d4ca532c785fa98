//! Tokenizer for the declaration parser.
//!
//! Produces just enough structure to find declarations: identifiers,
//! punctuation, literals, and byte spans into the original text. Comments and
//! whitespace are dropped.

use crate::error::ParseError;

/// Kind of a lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword.
    Ident(String),
    /// String or template literal, without quotes.
    Str(String),
    /// Numeric literal as written.
    Number(String),
    /// Regular expression literal as written, slashes and flags included.
    Regex(String),
    /// Single punctuation character.
    Punct(char),
}

/// A token with its position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Line of the first character (0-based).
    pub line: usize,
}

impl Token {
    /// Returns true if this is the given identifier.
    #[must_use]
    pub fn is_ident(&self, name: &str) -> bool {
        matches!(&self.kind, TokenKind::Ident(ident) if ident == name)
    }

    /// Returns true if this is the given punctuation character.
    #[must_use]
    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }

    /// Returns the identifier text, if any.
    #[must_use]
    pub fn ident(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(ident) => Some(ident),
            _ => None,
        }
    }

    /// Returns a short description for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Ident(ident) => ident.clone(),
            TokenKind::Str(s) => format!("'{s}'"),
            TokenKind::Number(n) | TokenKind::Regex(n) => n.clone(),
            TokenKind::Punct(c) => c.to_string(),
        }
    }
}

/// Splits source text into tokens.
///
/// # Errors
/// Returns `ParseError` for unterminated string literals or block comments.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line: 0,
        }
    }

    fn run(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();

        while let Some(&(start, c)) = self.chars.peek() {
            if c == '\n' {
                self.line += 1;
                self.chars.next();
                continue;
            }
            if c.is_whitespace() {
                self.chars.next();
                continue;
            }

            let line = self.line;
            let kind = match c {
                '/' if self.peek_second() == Some('/') => {
                    self.skip_line_comment();
                    continue;
                }
                '/' if self.peek_second() == Some('*') => {
                    self.skip_block_comment()?;
                    continue;
                }
                '/' if regex_allowed_after(tokens.last()) => TokenKind::Regex(self.regex()?),
                '\'' | '"' | '`' => TokenKind::Str(self.string(c)?),
                c if c.is_ascii_digit() => TokenKind::Number(self.word(true)),
                c if is_ident_start(c) => TokenKind::Ident(self.word(false)),
                c => {
                    self.chars.next();
                    TokenKind::Punct(c)
                }
            };

            tokens.push(Token {
                kind,
                start,
                end: self.offset(),
                line,
            });
        }

        Ok(tokens)
    }

    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map_or(self.source.len(), |&(offset, _)| offset)
    }

    fn peek_second(&self) -> Option<char> {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.next().map(|(_, c)| c)
    }

    fn skip_line_comment(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.chars.next();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), ParseError> {
        let line = self.line;
        self.chars.next();
        self.chars.next();

        let mut previous = '\0';
        for (_, c) in self.chars.by_ref() {
            if c == '\n' {
                self.line += 1;
            }
            if previous == '*' && c == '/' {
                return Ok(());
            }
            previous = c;
        }

        Err(ParseError::UnterminatedComment { line: line + 1 })
    }

    /// Reads a quoted literal; template substitutions are kept verbatim.
    fn string(&mut self, quote: char) -> Result<String, ParseError> {
        let line = self.line;
        self.chars.next();

        let mut value = String::new();
        while let Some((_, c)) = self.chars.next() {
            match c {
                '\\' => {
                    if let Some((_, escaped)) = self.chars.next() {
                        if escaped == '\n' {
                            self.line += 1;
                        }
                        value.push(escaped);
                    }
                }
                '\n' if quote != '`' => break,
                c if c == quote => return Ok(value),
                c => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    value.push(c);
                }
            }
        }

        Err(ParseError::UnterminatedString { line: line + 1 })
    }

    /// Reads `/body/flags`. A `/` inside `[...]` does not close the literal.
    fn regex(&mut self) -> Result<String, ParseError> {
        let line = self.line;
        let Some((start, _)) = self.chars.next() else {
            return Err(ParseError::UnterminatedRegex { line: line + 1 });
        };

        let mut in_class = false;
        loop {
            match self.chars.next() {
                None | Some((_, '\n')) => {
                    return Err(ParseError::UnterminatedRegex { line: line + 1 });
                }
                Some((_, '\\')) => {
                    if matches!(self.chars.next(), None | Some((_, '\n'))) {
                        return Err(ParseError::UnterminatedRegex { line: line + 1 });
                    }
                }
                Some((_, '[')) => in_class = true,
                Some((_, ']')) => in_class = false,
                Some((_, '/')) if !in_class => break,
                Some(_) => {}
            }
        }

        while self.chars.peek().is_some_and(|&(_, c)| is_ident_continue(c)) {
            self.chars.next();
        }
        let end = self.offset();
        Ok(self.source[start..end].to_string())
    }

    /// Reads an identifier, or a numeric literal when `numeric` is set.
    fn word(&mut self, numeric: bool) -> String {
        let mut word = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if !(is_ident_continue(c) || numeric && c == '.') {
                break;
            }
            word.push(c);
            self.chars.next();
        }
        word
    }
}

/// A `/` starts a regular expression where an operand is expected.
fn regex_allowed_after(previous: Option<&Token>) -> bool {
    match previous.map(|t| &t.kind) {
        None => true,
        Some(TokenKind::Punct(c)) => matches!(
            c,
            '=' | '(' | ',' | ':' | '[' | '!' | '&' | '|' | '?' | '{' | ';'
        ),
        Some(TokenKind::Ident(ident)) => matches!(ident.as_str(), "return" | "typeof" | "case"),
        Some(_) => false,
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("Failed to tokenize")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_property() {
        assert_eq!(
            kinds("name?: string;"),
            vec![
                TokenKind::Ident("name".into()),
                TokenKind::Punct('?'),
                TokenKind::Punct(':'),
                TokenKind::Ident("string".into()),
                TokenKind::Punct(';'),
            ]
        );
    }

    #[test]
    fn test_tokenize_skips_comments() {
        let source = "// leading\n/* block\n comment */ foo /** doc */ bar";
        assert_eq!(
            kinds(source),
            vec![TokenKind::Ident("foo".into()), TokenKind::Ident("bar".into())]
        );
    }

    #[test]
    fn test_tokenize_tracks_lines() {
        let tokens = tokenize("a\n/* x\ny */\nb 'c'\n`d\ne` f").unwrap();
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![0, 3, 3, 4, 5]);
    }

    #[test]
    fn test_tokenize_strings() {
        assert_eq!(
            kinds(r#"'./model' "a\"b" `t${x}`"#),
            vec![
                TokenKind::Str("./model".into()),
                TokenKind::Str("a\"b".into()),
                TokenKind::Str("t${x}".into()),
            ]
        );
    }

    #[test]
    fn test_tokenize_numbers() {
        assert_eq!(
            kinds("x = 1.5;"),
            vec![
                TokenKind::Ident("x".into()),
                TokenKind::Punct('='),
                TokenKind::Number("1.5".into()),
                TokenKind::Punct(';'),
            ]
        );
    }

    #[test]
    fn test_tokenize_spans() {
        let source = "  Array<Foo>";
        let tokens = tokenize(source).unwrap();
        assert_eq!(&source[tokens[0].start..tokens[0].end], "Array");
        assert_eq!(tokens.last().unwrap().end, source.len());
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            tokenize("a\n'oops"),
            Err(ParseError::UnterminatedString { line: 2 })
        );
        assert!(tokenize("\"broken\nline\"").is_err());
    }

    #[test]
    fn test_tokenize_regex_literal() {
        assert_eq!(
            kinds("pattern = /it's [/]+/gi;"),
            vec![
                TokenKind::Ident("pattern".into()),
                TokenKind::Punct('='),
                TokenKind::Regex("/it's [/]+/gi".into()),
                TokenKind::Punct(';'),
            ]
        );
    }

    #[test]
    fn test_tokenize_division_is_punct() {
        assert_eq!(
            kinds("x = a / b / 2;"),
            vec![
                TokenKind::Ident("x".into()),
                TokenKind::Punct('='),
                TokenKind::Ident("a".into()),
                TokenKind::Punct('/'),
                TokenKind::Ident("b".into()),
                TokenKind::Punct('/'),
                TokenKind::Number("2".into()),
                TokenKind::Punct(';'),
            ]
        );
    }

    #[test]
    fn test_unterminated_regex() {
        assert_eq!(
            tokenize("x = /open\n"),
            Err(ParseError::UnterminatedRegex { line: 1 })
        );
    }

    #[test]
    fn test_unterminated_comment() {
        assert_eq!(
            tokenize("/* never closed"),
            Err(ParseError::UnterminatedComment { line: 1 })
        );
    }
}
