//! plc-lex - Lexical Scanner for PLC Source Text
//!
//! This crate turns a string of source text into an ordered list of typed
//! tokens for a downstream parser. The scan is a single, synchronous pass
//! that either yields every token or stops at the first lexical error.
//!
//! # Example Usage
//!
//! ```
//! use plc_lex::{lex, Lexer, TokenKind};
//!
//! let tokens = lex("x = -1.5e3 // scale").unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].kind(), TokenKind::Decimal);
//! assert_eq!(tokens[2].literal(), "-1.5e3");
//!
//! // Or pull tokens one at a time
//! let mut lexer = Lexer::new("a b");
//! assert_eq!(lexer.next().unwrap().unwrap().literal(), "a");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Classifier, literal scanners and the driver loop
//! - [`cursor`] - Character cursor with lookahead and span accumulation
//! - [`chars`] - Character classes used as lookahead patterns
//! - [`error`] - Lexical errors
//! - [`span`] - Character spans and line/column lookup
//!
//! # Token Categories
//!
//! - **Identifier**: `[A-Za-z_][A-Za-z0-9_-]*`, no reserved words
//! - **Integer**: `[+-]?[0-9]+`, e.g. `42`, `-7`
//! - **Decimal**: an integer with a fraction and/or exponent, e.g. `3.14`, `1e5`, `-2.5E-3`
//! - **Character**: `'a'`, `'\n'`
//! - **String**: `"hello"`, `"tab\there"`
//! - **Operator**: `<`, `>`, `!`, `=`, `<=`, `>=`, `!=`, `==`, or any other single symbol
//!
//! Literals keep their source text verbatim, quotes and escapes included.
//!
//! # Skipped Input
//!
//! Whitespace and `//` line comments separate tokens and produce nothing.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod span;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, LexResult};
pub use lexer::{Lexer, TokenClass};
pub use span::{LineIndex, Span};
pub use token::{Token, TokenKind};

/// Lexes `source` in one pass.
///
/// Shorthand for `Lexer::new(source).lex()`.
pub fn lex(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).lex()
}
