//! REPL command implementation.
//!
//! Reads source text from stdin, lexes it, and prints the token list or
//! the lexical error. An empty first line switches to multi-line input,
//! which ends at the next empty line.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::commands::common::{repl_messages, write_token};
use crate::error::Result;

/// Arguments for the repl command.
#[derive(Debug, Clone)]
pub struct ReplArgs {
    /// Prompt printed before each input.
    pub prompt: String,
    /// Print each token's span after it.
    pub show_spans: bool,
}

/// REPL command handler.
pub struct ReplCommand {
    args: ReplArgs,
}

impl ReplCommand {
    /// Create a new ReplCommand.
    pub fn new(args: ReplArgs) -> Self {
        Self { args }
    }

    /// Run the read-lex-print loop until `input` is exhausted.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            write!(output, "{}", self.args.prompt)?;
            output.flush()?;

            let Some(source) = read_input(input, output)? else {
                debug!("end of input, leaving repl");
                return Ok(());
            };
            self.evaluate(&source, output)?;
        }
    }

    /// Lex one input and print the result.
    ///
    /// Lexical errors are reported on `output` and do not end the session.
    pub fn evaluate<W: Write>(&self, source: &str, output: &mut W) -> Result<()> {
        match plc_lex::lex(source) {
            Ok(tokens) => {
                let colon = if tokens.is_empty() { "" } else { ":" };
                writeln!(output, "List<Token>[size={}]{}", tokens.len(), colon)?;
                for token in &tokens {
                    write!(output, " - ")?;
                    write_token(output, token, self.args.show_spans)?;
                }
            }
            Err(err) => {
                writeln!(output, "{}{}", repl_messages::LEX_ERROR_PREFIX, err)?;
            }
        }
        Ok(())
    }
}

/// Reads one REPL input.
///
/// A non-empty line is returned as is. An empty line announces multi-line
/// mode; the following lines, each terminated by `\n`, are collected up to
/// the next empty line or end of input. Returns `None` at end of input.
pub fn read_input<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<String>> {
    let Some(line) = read_line(input)? else {
        return Ok(None);
    };
    if !line.is_empty() {
        return Ok(Some(line));
    }

    writeln!(output, "{}", repl_messages::MULTILINE_PROMPT)?;
    let mut source = String::new();
    while let Some(next) = read_line(input)? {
        if next.is_empty() {
            break;
        }
        source.push_str(&next);
        source.push('\n');
    }
    Ok(Some(source))
}

/// Reads a line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Run the REPL on the process's stdin and stdout.
pub fn run_repl(args: ReplArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    ReplCommand::new(args).run(&mut stdin.lock(), &mut stdout.lock())
}
