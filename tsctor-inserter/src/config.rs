//! Editor configuration snapshot.
//!
//! Settings are read from a VS Code style `settings.json` file, where the
//! relevant keys are the flat `editor.insertSpaces` and `editor.tabSize`
//! entries. Comments and trailing commas are tolerated.

use crate::error::InsertError;
use serde::{Deserialize, Deserializer};
use std::path::Path;
use tsctor_codegen::IndentationPolicy;

const DEFAULT_TAB_SIZE: usize = 4;

/// Indentation settings of the active editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EditorConfig {
    /// Indent with spaces instead of tabs.
    #[serde(
        rename = "editor.insertSpaces",
        default = "default_insert_spaces",
        deserialize_with = "deserialize_bool_or_string"
    )]
    pub insert_spaces: bool,
    /// Spaces per indentation level.
    #[serde(rename = "editor.tabSize", default = "default_tab_size")]
    pub tab_size: usize,
}

fn default_insert_spaces() -> bool {
    true
}

fn default_tab_size() -> usize {
    DEFAULT_TAB_SIZE
}

fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            insert_spaces: default_insert_spaces(),
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

impl EditorConfig {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub const fn new(insert_spaces: bool, tab_size: usize) -> Self {
        Self {
            insert_spaces,
            tab_size,
        }
    }

    /// Parses a settings document. Missing keys keep their defaults.
    ///
    /// # Errors
    /// Returns [`InsertError::Config`] if the document is not valid JSON or a
    /// key has the wrong type.
    pub fn from_json_str(source: &str) -> Result<Self, InsertError> {
        let stripped = strip_jsonc(source);
        let normalized = remove_trailing_commas(&stripped);
        Ok(serde_json::from_str(&normalized)?)
    }

    /// Reads and parses a settings file.
    ///
    /// # Errors
    /// Returns [`InsertError::Io`] if the file cannot be read, or
    /// [`InsertError::Config`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, InsertError> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&source)?;
        tracing::debug!(
            "loaded editor settings from {}: insert_spaces={}, tab_size={}",
            path.display(),
            config.insert_spaces,
            config.tab_size
        );
        Ok(config)
    }

    /// Translates the settings into the generator's indentation policy.
    #[must_use]
    pub const fn indentation_policy(&self) -> IndentationPolicy {
        if self.insert_spaces {
            IndentationPolicy::spaces(self.tab_size)
        } else {
            IndentationPolicy::tabs()
        }
    }
}

impl From<&EditorConfig> for IndentationPolicy {
    fn from(config: &EditorConfig) -> Self {
        config.indentation_policy()
    }
}

fn strip_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match (ch, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(ch);
            }
            ('/', Some('/')) => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push(c);
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push(c);
                    }
                    if previous == '*' && c == '/' {
                        break;
                    }
                    previous = c;
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

fn remove_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escape = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            if escape {
                escape = false;
            } else if ch == '\\' {
                escape = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        if ch == '"' {
            in_string = true;
        } else if ch == ',' {
            let next = chars.clone().find(|c| !c.is_whitespace());
            if matches!(next, Some('}' | ']')) {
                continue;
            }
        }
        out.push(ch);
    }

    out
}
