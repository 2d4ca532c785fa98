//! Structured line builder.
//!
//! Generated code is recorded as `(level, text)` pairs and rendered once
//! with an [`IndentationPolicy`], so nesting never depends on a counter
//! threaded through string concatenation.

use crate::indent::IndentationPolicy;

/// One output line and its nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Nesting level, in indentation units.
    pub level: usize,
    /// Line text without leading whitespace.
    pub text: String,
}

/// Collects lines at explicit nesting levels.
#[derive(Debug, Clone, Default)]
pub struct LineBuilder {
    lines: Vec<Line>,
    level: usize,
}

impl LineBuilder {
    /// Creates a builder starting at level 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder starting at the given level.
    #[must_use]
    pub fn at_level(level: usize) -> Self {
        Self {
            lines: Vec::new(),
            level,
        }
    }

    /// Returns the current nesting level.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Appends a line at the current level.
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(Line {
            level: self.level,
            text: text.into(),
        });
    }

    /// Appends `header`, runs `body` one level deeper, then appends `footer`
    /// back at the original level.
    pub fn block(
        &mut self,
        header: impl Into<String>,
        footer: impl Into<String>,
        body: impl FnOnce(&mut Self),
    ) {
        self.line(header);
        self.level += 1;
        body(self);
        self.level -= 1;
        self.line(footer);
    }

    /// Appends an `if (condition) { ... } else { ... }` statement.
    pub fn if_else(
        &mut self,
        condition: &str,
        then_body: impl FnOnce(&mut Self),
        else_body: impl FnOnce(&mut Self),
    ) {
        self.block(format!("if ({condition}) {{"), "} else {", then_body);
        self.level += 1;
        else_body(self);
        self.level -= 1;
        self.line("}");
    }

    /// Returns the recorded lines.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Consumes the builder and returns its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    /// Renders the lines joined by `\n`, without a trailing newline.
    #[must_use]
    pub fn render(&self, policy: &IndentationPolicy) -> String {
        render_lines(&self.lines, policy)
    }
}

/// Renders lines joined by `\n`, without a trailing newline.
#[must_use]
pub fn render_lines(lines: &[Line], policy: &IndentationPolicy) -> String {
    let unit = policy.unit();
    let mut output = String::new();

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        for _ in 0..line.level {
            output.push_str(&unit);
        }
        output.push_str(&line.text);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_nests_and_restores_level() {
        let mut builder = LineBuilder::at_level(1);
        builder.block("a {", "}", |b| {
            b.line("b;");
            b.block("c {", "}", |b| b.line("d;"));
        });

        assert_eq!(builder.level(), 1);
        let levels: Vec<_> = builder.lines().iter().map(|l| l.level).collect();
        assert_eq!(levels, vec![1, 2, 2, 3, 2, 1]);
    }

    #[test]
    fn test_render_applies_policy_once() {
        let mut builder = LineBuilder::new();
        builder.block("x {", "}", |b| b.line("y;"));

        assert_eq!(builder.render(&IndentationPolicy::spaces(2)), "x {\n  y;\n}");
        assert_eq!(builder.render(&IndentationPolicy::tabs()), "x {\n\ty;\n}");
    }

    #[test]
    fn test_if_else_levels() {
        let mut builder = LineBuilder::new();
        builder.if_else("ok", |b| b.line("a;"), |b| b.line("b;"));

        assert_eq!(
            builder.render(&IndentationPolicy::spaces(1)),
            "if (ok) {\n a;\n} else {\n b;\n}"
        );
    }

    #[test]
    fn test_render_empty_builder() {
        assert_eq!(LineBuilder::new().render(&IndentationPolicy::tabs()), "");
    }

    #[test]
    fn test_into_lines() {
        let mut builder = LineBuilder::new();
        builder.line("only");
        assert_eq!(
            builder.into_lines(),
            vec![Line {
                level: 0,
                text: "only".to_string()
            }]
        );
    }
}
