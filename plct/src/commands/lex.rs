//! Lex command implementation.
//!
//! Lexes a whole file (or stdin) and prints its tokens as text or JSON.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use crate::commands::common::{read_source, render_lex_error, write_tokens, OutputFormat};
use crate::error::{PlctError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Input file; stdin when `None` or `-`.
    pub input: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Print each token's span after it (text format only).
    pub show_spans: bool,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Create a new LexCommand.
    pub fn new(args: LexArgs) -> Self {
        Self { args }
    }

    /// Lex `source` and write the tokens to `output`.
    ///
    /// # Errors
    ///
    /// `PlctError::Lex` carrying the rendered report when the source has a
    /// lexical error. Nothing is written in that case.
    pub fn run_on<W: Write>(&self, source: &str, output: &mut W) -> Result<()> {
        let start_time = Instant::now();

        let tokens = plc_lex::lex(source).map_err(|err| {
            debug!(offset = err.offset(), "lexing failed");
            PlctError::Lex {
                rendered: render_lex_error(&err, source),
            }
        })?;

        write_tokens(output, &tokens, self.args.format, self.args.show_spans)?;

        info!(
            tokens = tokens.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "lexed input"
        );
        Ok(())
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let source = read_source(self.args.input.as_deref())?;
        debug!(
            input = %self.args.input.as_deref().map_or("<stdin>".into(), |p| p.display().to_string()),
            chars = source.chars().count(),
            "read source"
        );

        let stdout = io::stdout();
        self.run_on(&source, &mut stdout.lock())
    }
}

/// Run the lex command.
pub fn run_lex(args: LexArgs) -> Result<()> {
    LexCommand::new(args).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_to_string(source: &str, format: OutputFormat) -> Result<String> {
        let command = LexCommand::new(LexArgs {
            format,
            ..LexArgs::default()
        });
        let mut output = Vec::new();
        command.run_on(source, &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_text_output() {
        let output = lex_to_string("if (x != 'y')", OutputFormat::Text).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], "Token[type=OPERATOR, literal=!=]");
        assert_eq!(lines[4], "Token[type=CHARACTER, literal='y']");
    }

    #[test]
    fn test_json_output() {
        let output = lex_to_string("a 1", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["kind"], "IDENTIFIER");
        assert_eq!(value[1]["kind"], "INTEGER");
        assert_eq!(value[1]["span"]["start"], 2);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(lex_to_string("", OutputFormat::Text).unwrap(), "");
        assert_eq!(lex_to_string("", OutputFormat::Json).unwrap(), "[]\n");
    }

    #[test]
    fn test_lex_error_is_rendered() {
        let err = lex_to_string("a\n\"b", OutputFormat::Text).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err
            .to_string()
            .starts_with("Unterminated string literal (line 2, column 3)"));
    }
}
