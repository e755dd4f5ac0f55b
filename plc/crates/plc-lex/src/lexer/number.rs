//! Number literal lexing.
//!
//! This module handles integer and decimal literals:
//!
//! ```text
//! number ::= [+-]? [0-9]+ ('.' [0-9]+)? ([eE] [+-]? [0-9]+)?
//! ```

use crate::chars::{is_digit, is_dot, is_exponent, is_sign};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Every optional part is taken only when the digits it needs are really
    /// there: a sign only before a digit, a `.` only before a digit, an
    /// exponent only before a digit or a sign and a digit. Whatever is left
    /// over starts the next token, so `1.` lexes as `1` followed by `.`.
    ///
    /// # Returns
    ///
    /// A `Decimal` token if a fraction or an exponent was consumed,
    /// otherwise an `Integer` token.
    pub fn lex_number(&mut self) -> Token {
        if self.cursor.peek(&[is_sign, is_digit]) {
            self.cursor.match_seq(&[is_sign]);
        }
        let digits = self.cursor.match_while(is_digit);
        assert!(digits > 0, "number must start with a digit or a signed digit");

        let mut decimal = false;

        if self.cursor.match_seq(&[is_dot, is_digit]) {
            self.cursor.match_while(is_digit);
            decimal = true;
        }

        if self.cursor.match_seq(&[is_exponent, is_sign, is_digit])
            || self.cursor.match_seq(&[is_exponent, is_digit])
        {
            self.cursor.match_while(is_digit);
            decimal = true;
        }

        let kind = if decimal {
            TokenKind::Decimal
        } else {
            TokenKind::Integer
        };
        self.token(kind)
    }
}
