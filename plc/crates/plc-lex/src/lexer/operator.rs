//! Operator lexing.
//!
//! ```text
//! operator ::= [<>!=] '='? | [^A-Za-z_0-9'" \b\n\r\t]
//! ```

use crate::chars::{is_comparison, is_equals, is_operator};
use crate::error::{LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator.
    ///
    /// Handles: `<`, `>`, `!`, `=`, `<=`, `>=`, `!=`, `==`, and any other
    /// single symbol. No other multi-character operators exist, so `&&`
    /// lexes as two tokens.
    ///
    /// # Errors
    ///
    /// `UnexpectedCharacter` for a character no token class accepts. The
    /// only such characters the classifier lets through are backspaces.
    pub fn lex_operator(&mut self) -> LexResult<Token> {
        if self.cursor.match_seq(&[is_comparison]) {
            self.cursor.match_seq(&[is_equals]);
            return Ok(self.token(TokenKind::Operator));
        }

        if self.cursor.match_seq(&[is_operator]) {
            return Ok(self.token(TokenKind::Operator));
        }

        let Some(found) = self.cursor.current() else {
            unreachable!("operator scan past end of input");
        };
        Err(self.error(LexErrorKind::UnexpectedCharacter(found)))
    }
}
