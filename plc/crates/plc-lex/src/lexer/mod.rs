//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, token classification and the driver loop
//! - `trivia` - Whitespace and line comment skipping
//! - `identifier` - Identifier lexing
//! - `number` - Integer and decimal literal lexing
//! - `literal` - Character literal, string literal and escape lexing
//! - `operator` - Operator lexing

mod core;
mod identifier;
mod literal;
mod number;
mod operator;
mod trivia;

pub use self::core::{Lexer, TokenClass};
