//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the lookahead classifier that
//! picks a scanner for the next token, and the driver loop.

use tracing::{debug, trace};

use crate::chars::{
    is_digit, is_double_quote, is_ident_start, is_sign, is_single_quote, is_slash, is_whitespace,
};
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};

/// The grammar production chosen for the next token.
///
/// The classes are tried in declaration order and the first one whose
/// lookahead holds wins; `Operator` catches everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenClass {
    /// Next character is a letter or underscore.
    Identifier,
    /// Next character is a digit, or a sign immediately followed by a digit
    /// where no operand precedes it.
    Number,
    /// Next character is `'`.
    Character,
    /// Next character is `"`.
    String,
    /// Anything else.
    Operator,
}

/// Lexer for PLC source text.
///
/// The lexer skips whitespace and `//` comments between tokens and stops at
/// the first lexical error. Use [`Lexer::lex`] for the whole token list, or
/// iterate to pull tokens one at a time; iteration ends after an error.
///
/// # Example
///
/// ```
/// use plc_lex::{Lexer, TokenKind};
///
/// let tokens = Lexer::new("x <= -1.5 // limit").lex().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::Operator, TokenKind::Decimal]
/// );
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Whether the last token ends an operand, making a following sign binary.
    after_operand: bool,

    /// Set once an error has been returned; the pass is over.
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            after_operand: false,
            failed: false,
        }
    }

    /// Lexes the whole input.
    ///
    /// Returns every token in source order, or the first error. Tokens
    /// scanned before the error are discarded.
    pub fn lex(self) -> LexResult<Vec<Token>> {
        let result = self.collect::<LexResult<Vec<_>>>();
        match &result {
            Ok(tokens) => debug!(tokens = tokens.len(), "lex pass complete"),
            Err(err) => debug!(offset = err.offset(), error = %err.kind(), "lex pass failed"),
        }
        result
    }

    /// Returns the next token, skipping any whitespace and comments first.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<LexResult<Token>> {
        while self.cursor.has(0) {
            if self.cursor.peek(&[is_whitespace]) {
                self.skip_whitespace();
                continue;
            }
            if self.cursor.peek(&[is_slash, is_slash]) {
                self.skip_comment();
                continue;
            }
            return Some(self.lex_token());
        }
        None
    }

    /// Decides which scanner handles the token at the cursor.
    ///
    /// A sign followed by a digit starts a number only when it cannot be a
    /// binary operator, i.e. when no operand precedes it: `-1` and `x = -1`
    /// hold a signed number, `1-2` and `(x) -1` a subtraction.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::{Lexer, TokenClass};
    ///
    /// assert_eq!(Lexer::new("-1").classify(), TokenClass::Number);
    /// assert_eq!(Lexer::new("- 1").classify(), TokenClass::Operator);
    /// assert_eq!(Lexer::new("_x").classify(), TokenClass::Identifier);
    /// ```
    pub fn classify(&self) -> TokenClass {
        if self.cursor.peek(&[is_ident_start]) {
            TokenClass::Identifier
        } else if self.cursor.peek(&[is_digit])
            || (!self.after_operand && self.cursor.peek(&[is_sign, is_digit]))
        {
            TokenClass::Number
        } else if self.cursor.peek(&[is_single_quote]) {
            TokenClass::Character
        } else if self.cursor.peek(&[is_double_quote]) {
            TokenClass::String
        } else {
            TokenClass::Operator
        }
    }

    /// Lexes exactly one token at the cursor.
    pub fn lex_token(&mut self) -> LexResult<Token> {
        match self.classify() {
            TokenClass::Identifier => Ok(self.lex_identifier()),
            TokenClass::Number => Ok(self.lex_number()),
            TokenClass::Character => self.lex_character(),
            TokenClass::String => self.lex_string(),
            TokenClass::Operator => self.lex_operator(),
        }
    }

    /// Builds a token from the pending span.
    pub(crate) fn token(&mut self, kind: TokenKind) -> Token {
        let lexeme = self.cursor.emit();
        trace!(%kind, literal = lexeme.text, start = lexeme.span.start, "token");
        self.after_operand =
            kind != TokenKind::Operator || matches!(lexeme.text, ")" | "]" | "}");
        Token::new(kind, lexeme.text, lexeme.span)
    }

    /// Builds an error at the cursor's current offset.
    pub(crate) fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.cursor.index())
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_token();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

impl<'a> std::iter::FusedIterator for Lexer<'a> {}
