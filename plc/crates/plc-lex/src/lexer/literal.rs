//! Character and string literal lexing.
//!
//! Literals are returned verbatim, quotes and escape sequences included.
//! Escapes are validated but never decoded here.
//!
//! ```text
//! character ::= ['] ([^'\n\r\\] | escape) [']
//! string    ::= '"' ([^"\n\r\\] | escape)* '"'
//! escape    ::= '\' [bnrt'"\\]
//! ```

use crate::chars::{
    is_backslash, is_character_body, is_double_quote, is_escape_char, is_line_break,
    is_single_quote, is_string_body,
};
use crate::error::{LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a character literal.
    ///
    /// The body is exactly one escape sequence or one character other than
    /// a quote, backslash or line break.
    ///
    /// # Errors
    ///
    /// `InvalidCharacterLiteral` for an empty or invalid body,
    /// `UnterminatedCharacterLiteral` when the closing quote is missing,
    /// `InvalidEscape` for a bad escape.
    pub fn lex_character(&mut self) -> LexResult<Token> {
        let opened = self.cursor.match_seq(&[is_single_quote]);
        assert!(opened, "character literal must start with a single quote");

        if self.cursor.peek(&[is_backslash]) {
            self.lex_escape()?;
        } else if !self.cursor.match_seq(&[is_character_body]) {
            return Err(self.error(LexErrorKind::InvalidCharacterLiteral));
        }

        if !self.cursor.match_seq(&[is_single_quote]) {
            return Err(self.error(LexErrorKind::UnterminatedCharacterLiteral));
        }
        Ok(self.token(TokenKind::Character))
    }

    /// Lexes a string literal.
    ///
    /// # Errors
    ///
    /// `ExpectedStringStart` if the cursor is not on a double quote,
    /// `UnterminatedStringLiteral` at end of input,
    /// `NewlineInStringLiteral` for a raw line break,
    /// `InvalidEscape` for a bad escape.
    pub fn lex_string(&mut self) -> LexResult<Token> {
        if !self.cursor.match_seq(&[is_double_quote]) {
            return Err(self.error(LexErrorKind::ExpectedStringStart));
        }

        loop {
            if self.cursor.match_seq(&[is_double_quote]) {
                return Ok(self.token(TokenKind::String));
            }
            if self.cursor.peek(&[is_backslash]) {
                self.lex_escape()?;
                continue;
            }
            if self.cursor.match_seq(&[is_string_body]) {
                continue;
            }

            let kind = match self.cursor.current() {
                None => LexErrorKind::UnterminatedStringLiteral,
                Some(c) if is_line_break(c) => LexErrorKind::NewlineInStringLiteral,
                Some(_) => LexErrorKind::InvalidStringCharacter,
            };
            return Err(self.error(kind));
        }
    }

    /// Lexes an escape sequence inside a literal.
    ///
    /// # Errors
    ///
    /// `InvalidEscape` if the backslash is followed by anything other than
    /// `b n r t ' " \`, or by nothing.
    pub fn lex_escape(&mut self) -> LexResult<()> {
        let started = self.cursor.match_seq(&[is_backslash]);
        assert!(started, "escape sequence must start with a backslash");
        if self.cursor.match_seq(&[is_escape_char]) {
            Ok(())
        } else {
            Err(self.error(LexErrorKind::InvalidEscape))
        }
    }
}
