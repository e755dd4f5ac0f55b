//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact text it was scanned
//! from. Literals are kept verbatim: quotes and escape sequences are part
//! of the literal, and numbers are not converted to values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// The category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// `[A-Za-z_][A-Za-z0-9_-]*`
    Identifier,
    /// A number with neither fraction nor exponent.
    Integer,
    /// A number with a fraction, an exponent, or both.
    Decimal,
    /// A single-quoted character literal.
    Character,
    /// A double-quoted string literal.
    String,
    /// A comparison operator or any other single symbol.
    Operator,
}

impl TokenKind {
    /// Upper-case display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identifier => "IDENTIFIER",
            Self::Integer => "INTEGER",
            Self::Decimal => "DECIMAL",
            Self::Character => "CHARACTER",
            Self::String => "STRING",
            Self::Operator => "OPERATOR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token.
///
/// # Example
///
/// ```
/// use plc_lex::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Integer, "-12", Span::new(0, 3));
/// assert_eq!(token.kind(), TokenKind::Integer);
/// assert_eq!(token.literal(), "-12");
/// assert_eq!(token.to_string(), "Token[type=INTEGER, literal=-12]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    literal: String,
    span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// The token's category.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of the token.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Where the token sits in the input, in characters.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token[type={}, literal={}]", self.kind, self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Identifier.to_string(), "IDENTIFIER");
        assert_eq!(TokenKind::Decimal.to_string(), "DECIMAL");
        assert_eq!(TokenKind::Operator.name(), "OPERATOR");
    }

    #[test]
    fn test_token_display_keeps_literal_verbatim() {
        let token = Token::new(TokenKind::String, r#""a\tb""#, Span::new(0, 6));
        assert_eq!(token.to_string(), r#"Token[type=STRING, literal="a\tb"]"#);
    }

    #[test]
    fn test_token_serializes_kind_upper_case() {
        let token = Token::new(TokenKind::Character, "'x'", Span::new(2, 5));
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"CHARACTER","literal":"'x'","span":{"start":2,"end":5}}"#
        );
    }
}
