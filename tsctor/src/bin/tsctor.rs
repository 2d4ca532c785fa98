//! Command-line front end for constructor insertion.
//!
//! Reads a TypeScript file, generates a constructor for the class at the
//! given line and prints the updated file, the snippet alone, or rewrites
//! the file in place.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tsctor_inserter::{
    ConstructorInserter, Document, EditorConfig, FsResolver, Position, TextBufferSink,
};

/// Insert a `constructor(opts?: Partial<T>)` into a TypeScript class.
#[derive(Parser, Debug)]
#[command(name = "tsctor", version, about)]
struct CliArgs {
    /// TypeScript file containing the class.
    file: PathBuf,

    /// Cursor line, 1-based. Selects the enclosing class and the insertion line.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    line: u64,

    /// Indent with tabs instead of spaces.
    #[arg(long)]
    tabs: bool,

    /// Spaces per indentation level.
    #[arg(long = "tab-size")]
    tab_size: Option<usize>,

    /// VS Code style settings.json providing editor.insertSpaces and editor.tabSize.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Rewrite the file in place.
    #[arg(short, long, conflicts_with = "print")]
    write: bool,

    /// Print only the generated snippet.
    #[arg(short, long)]
    print: bool,
}

impl CliArgs {
    /// Builds the editor configuration. Flags override settings file values.
    fn editor_config(&self) -> EditorConfig {
        let mut config = match &self.settings {
            Some(path) => EditorConfig::load(path).unwrap_or_else(|e| {
                warn!("ignoring settings {}: {}", path.display(), e);
                EditorConfig::default()
            }),
            None => EditorConfig::default(),
        };

        if self.tabs {
            config.insert_spaces = false;
        }
        if let Some(tab_size) = self.tab_size {
            config.tab_size = tab_size;
        }
        config
    }

    /// Zero-based cursor, clamped to the last line of `text`.
    fn cursor(&self, text: &str) -> Position {
        let last = text.split('\n').count().saturating_sub(1);
        let line = usize::try_from(self.line - 1).unwrap_or(usize::MAX);
        Position::line_start(line.min(last))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let text = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let cursor = args.cursor(&text);
    let document = Document::new(args.file.clone(), text).with_config(args.editor_config());

    let inserter = ConstructorInserter::new(FsResolver);
    let mut sink = TextBufferSink::new(document.text());
    let insertion = inserter
        .insert(&document, cursor, &mut sink)
        .await
        .with_context(|| format!("failed to generate a constructor for {}", args.file.display()))?;

    let Some(insertion) = insertion else {
        info!("no class declaration in {}", args.file.display());
        if !args.write && !args.print {
            print!("{}", sink.text());
        }
        return Ok(());
    };

    if args.print {
        println!("{}", insertion.snippet);
    } else if args.write {
        tokio::fs::write(&args.file, sink.into_text())
            .await
            .with_context(|| format!("failed to write {}", args.file.display()))?;
        info!(
            "inserted constructor at line {} of {}",
            insertion.position.line + 1,
            args.file.display()
        );
    } else {
        print!("{}", sink.text());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("tsctor").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["model.ts"]);
        assert_eq!(args.line, 1);
        assert!(!args.write && !args.print);
        assert_eq!(args.editor_config(), EditorConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let args = parse(&["model.ts", "--tabs", "--tab-size", "2"]);
        assert_eq!(args.editor_config(), EditorConfig::new(false, 2));
    }

    #[test]
    fn test_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("settings.json");
        std::fs::write(&settings, r#"{ "editor.tabSize": 8, "editor.insertSpaces": false }"#)
            .unwrap();

        let path = settings.to_string_lossy().into_owned();
        let args = parse(&["model.ts", "--settings", &path, "--tab-size", "3"]);
        assert_eq!(args.editor_config(), EditorConfig::new(false, 3));
    }

    #[test]
    fn test_unreadable_settings_fall_back_to_defaults() {
        let args = parse(&["model.ts", "--settings", "/nonexistent/settings.json"]);
        assert_eq!(args.editor_config(), EditorConfig::default());
    }

    #[test]
    fn test_cursor_is_clamped() {
        let args = parse(&["model.ts", "--line", "40"]);
        assert_eq!(args.cursor("a\nb\nc"), Position::line_start(2));

        let args = parse(&["model.ts", "-l", "2"]);
        assert_eq!(args.cursor("a\nb\nc"), Position::line_start(1));
    }

    #[test]
    fn test_line_zero_is_rejected() {
        assert!(CliArgs::try_parse_from(["tsctor", "model.ts", "--line", "0"]).is_err());
    }

    #[test]
    fn test_write_conflicts_with_print() {
        assert!(CliArgs::try_parse_from(["tsctor", "model.ts", "--write", "--print"]).is_err());
    }
}
