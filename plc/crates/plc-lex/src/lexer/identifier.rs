//! Identifier lexing.

use crate::chars::{is_ident_continue, is_ident_start};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits, underscores or hyphens. There are no reserved words at this
    /// level; `if` is an identifier like any other.
    pub fn lex_identifier(&mut self) -> Token {
        let started = self.cursor.match_seq(&[is_ident_start]);
        assert!(started, "identifier must start with a letter or underscore");
        self.cursor.match_while(is_ident_continue);
        self.token(TokenKind::Identifier)
    }
}
