//! Lexical errors.
//!
//! A scan pass stops at the first error. The error records what went wrong
//! and the character offset where the scanner noticed it.

use thiserror::Error;

use crate::span::LineIndex;

/// What went wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character literal with no body, or a body that is a quote or line break.
    #[error("Invalid or empty character literal")]
    InvalidCharacterLiteral,

    /// A character literal whose body is not followed by a closing quote.
    #[error("Unterminated character literal")]
    UnterminatedCharacterLiteral,

    /// A string scan started somewhere other than a double quote.
    #[error("String literal must start with a double quote")]
    ExpectedStringStart,

    /// Input ended inside a string literal.
    #[error("Unterminated string literal")]
    UnterminatedStringLiteral,

    /// A raw `\n` or `\r` inside a string literal.
    #[error("String literal cannot contain a raw line break")]
    NewlineInStringLiteral,

    /// A character that may not appear in a string literal.
    #[error("Invalid character in string literal")]
    InvalidStringCharacter,

    /// A backslash not followed by one of `b n r t ' " \`.
    #[error("Invalid escape sequence")]
    InvalidEscape,

    /// A character that fits no token class.
    #[error("Unexpected character {0:?}; not a valid operator")]
    UnexpectedCharacter(char),
}

/// A lexical error with its position.
///
/// # Example
///
/// ```
/// use plc_lex::{lex, LexErrorKind};
///
/// let err = lex("\"abc").unwrap_err();
/// assert_eq!(err.kind(), LexErrorKind::UnterminatedStringLiteral);
/// assert_eq!(err.offset(), 4);
/// assert_eq!(err.to_string(), "Unterminated string literal at offset 4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct LexError {
    kind: LexErrorKind,
    offset: usize,
}

impl LexError {
    /// Creates an error at a character offset.
    pub fn new(kind: LexErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The error category.
    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }

    /// Character offset where the error was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The human-readable description, without position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Renders the message with a 1-based line and column.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::{lex, LineIndex};
    ///
    /// let source = "x = 1\ny = '";
    /// let err = lex(source).unwrap_err();
    /// assert_eq!(
    ///     err.render(&LineIndex::new(source)),
    ///     "Invalid or empty character literal (line 2, column 6)"
    /// );
    /// ```
    pub fn render(&self, index: &LineIndex<'_>) -> String {
        let (line, column) = index.line_col(self.offset);
        format!("{} (line {}, column {})", self.kind, line, column)
    }
}

/// Result type alias for scanner operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
