//! Edge case tests for plc-lex

#[cfg(test)]
mod tests {
    use crate::{lex, LexError, LexErrorKind, Lexer, TokenKind};

    fn lex_all(source: &str) -> Vec<(TokenKind, String)> {
        lex(source)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind(), t.literal().to_string()))
            .collect()
    }

    fn lex_err(source: &str) -> LexError {
        lex(source).unwrap_err()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), [(TokenKind::Identifier, "x".to_string())]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} = 1", name));
        assert_eq!(t[0].1, name);
    }

    #[test]
    fn test_edge_hyphen_joins_identifier_not_number() {
        let t = lex_all("a-1 1-a");
        let literals: Vec<_> = t.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(literals, ["a-1", "1", "-", "a"]);
    }

    #[test]
    fn test_edge_number_then_identifier() {
        let t = lex_all("12abc");
        assert_eq!(t[0], (TokenKind::Integer, "12".to_string()));
        assert_eq!(t[1], (TokenKind::Identifier, "abc".to_string()));
    }

    #[test]
    fn test_edge_exponent_letter_becomes_identifier() {
        let t = lex_all("1e");
        assert_eq!(t[0], (TokenKind::Integer, "1".to_string()));
        assert_eq!(t[1], (TokenKind::Identifier, "e".to_string()));
    }

    #[test]
    fn test_edge_trailing_dot() {
        let t = lex_all("1.");
        assert_eq!(t[0], (TokenKind::Integer, "1".to_string()));
        assert_eq!(t[1], (TokenKind::Operator, ".".to_string()));
    }

    #[test]
    fn test_edge_leading_dot_is_operator() {
        let t = lex_all(".5");
        assert_eq!(t[0], (TokenKind::Operator, ".".to_string()));
        assert_eq!(t[1], (TokenKind::Integer, "5".to_string()));
    }

    #[test]
    fn test_edge_double_sign() {
        let t = lex_all("--1");
        assert_eq!(t[0], (TokenKind::Operator, "-".to_string()));
        assert_eq!(t[1], (TokenKind::Integer, "-1".to_string()));
    }

    #[test]
    fn test_edge_consecutive_comparisons() {
        let t = lex_all("<==>=!");
        let literals: Vec<_> = t.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(literals, ["<=", "=", ">=", "!"]);
    }

    #[test]
    fn test_edge_comment_without_space() {
        assert_eq!(lex_all("1//2"), [(TokenKind::Integer, "1".to_string())]);
    }

    #[test]
    fn test_edge_slash_then_comment() {
        let t = lex_all("///");
        assert!(t.is_empty());
        let t = lex_all("/ //");
        assert_eq!(t, [(TokenKind::Operator, "/".to_string())]);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a // c\r\nb\r\n");
        let literals: Vec<_> = t.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(literals, ["a", "b"]);
    }

    #[test]
    fn test_edge_vertical_tab_and_form_feed_are_whitespace() {
        let t = lex_all("a\u{0B}b\u{0C}c");
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_edge_non_ascii_space_is_operator() {
        let t = lex_all("a\u{A0}b");
        assert_eq!(t[1], (TokenKind::Operator, "\u{A0}".to_string()));
    }

    #[test]
    fn test_edge_string_with_single_quote() {
        assert_eq!(lex_all("\"it's\""), [(TokenKind::String, "\"it's\"".to_string())]);
    }

    #[test]
    fn test_edge_string_with_comment_marker() {
        assert_eq!(
            lex_all("\"// not a comment\""),
            [(TokenKind::String, "\"// not a comment\"".to_string())]
        );
    }

    #[test]
    fn test_edge_adjacent_literals() {
        let t = lex_all("'a''b'\"c\"\"d\"");
        let literals: Vec<_> = t.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(literals, ["'a'", "'b'", "\"c\"", "\"d\""]);
    }

    #[test]
    fn test_edge_escaped_quote_in_character() {
        assert_eq!(lex_all(r"'\''"), [(TokenKind::Character, r"'\''".to_string())]);
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_lone_quote() {
        assert_eq!(
            lex_err("'"),
            LexError::new(LexErrorKind::InvalidCharacterLiteral, 1)
        );
    }

    #[test]
    fn test_err_unterminated_string() {
        assert_eq!(
            lex_err("\"abc"),
            LexError::new(LexErrorKind::UnterminatedStringLiteral, 4)
        );
    }

    #[test]
    fn test_err_raw_newline_in_string() {
        assert_eq!(
            lex_err("x = \"ab\ncd\""),
            LexError::new(LexErrorKind::NewlineInStringLiteral, 7)
        );
    }

    #[test]
    fn test_err_offset_after_earlier_tokens() {
        assert_eq!(
            lex_err("abc 'de'"),
            LexError::new(LexErrorKind::UnterminatedCharacterLiteral, 6)
        );
    }

    #[test]
    fn test_err_offset_counts_characters() {
        // Each 'é' is one character but two bytes.
        assert_eq!(
            lex_err("é é \"x\\z\""),
            LexError::new(LexErrorKind::InvalidEscape, 7)
        );
    }

    #[test]
    fn test_err_backspace() {
        assert_eq!(
            lex_err("a \u{8}"),
            LexError::new(LexErrorKind::UnexpectedCharacter('\u{8}'), 2)
        );
    }

    #[test]
    fn test_err_first_error_wins() {
        assert_eq!(
            lex_err("'' \"abc"),
            LexError::new(LexErrorKind::InvalidCharacterLiteral, 1)
        );
    }

    #[test]
    fn test_err_iterator_yields_tokens_before_error() {
        let items: Vec<_> = Lexer::new("a b '").collect();
        assert_eq!(items.len(), 3);
        assert!(items[0].is_ok());
        assert!(items[1].is_ok());
        assert!(items[2].is_err());
    }
}
