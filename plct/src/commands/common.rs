//! Common types and utilities for plct commands.
//!
//! This module provides shared types and formatting helpers used by the
//! REPL and the lex command so both print tokens the same way.

use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

use plc_lex::{LexError, LineIndex, Token};
use serde::{Deserialize, Serialize};

use crate::error::{PlctError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported token output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Token[type=..., literal=...]` line per token
    #[default]
    Text,
    /// A JSON array of `{kind, literal, span}` objects
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

// ============================================================================
// Token Output
// ============================================================================

/// Messages printed by the REPL.
pub mod repl_messages {
    /// Announces multi-line input after an empty first line.
    pub const MULTILINE_PROMPT: &str = "Multiline input - enter empty line to submit:";

    /// Prefix for a failed evaluation.
    pub const LEX_ERROR_PREFIX: &str = "LexError: ";
}

/// Writes one token, followed by its span when `show_spans` is set.
pub fn write_token<W: Write>(out: &mut W, token: &Token, show_spans: bool) -> Result<()> {
    if show_spans {
        let span = token.span();
        writeln!(out, "{} @ {}..{}", token, span.start, span.end)?;
    } else {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}

/// Writes tokens in the requested format.
pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: &[Token],
    format: OutputFormat,
    show_spans: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                write_token(out, token, show_spans)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

// ============================================================================
// Source Input
// ============================================================================

/// Reads source text from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| PlctError::ReadSource {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Renders a lexical error with its position and the offending line.
///
/// ```text
/// Unterminated string literal (line 2, column 9)
///   |
/// 2 | let s = "abc
///   |         ^
/// ```
pub fn render_lex_error(err: &LexError, source: &str) -> String {
    let index = LineIndex::new(source);
    let mut rendered = err.render(&index);

    let (line, column) = index.line_col(err.offset());
    if let Some(text) = index.line(line) {
        let gutter = " ".repeat(line.to_string().len());
        rendered.push_str(&format!(
            "\n{gutter} |\n{line} | {text}\n{gutter} | {caret:>column$}",
            caret = "^",
        ));
    }
    rendered
}
