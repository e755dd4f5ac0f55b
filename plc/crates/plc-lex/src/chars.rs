//! Character classes used as single-character lookahead patterns.
//!
//! Every predicate here has the [`Pattern`](crate::cursor::Pattern) shape
//! (`fn(char) -> bool`) so it can be handed straight to
//! [`Cursor::peek`](crate::cursor::Cursor::peek) and
//! [`Cursor::match_seq`](crate::cursor::Cursor::match_seq).
//!
//! Classification is ASCII-only. Characters outside ASCII are never letters,
//! digits or whitespace as far as the scanner is concerned.

/// Backspace, excluded from the single-character operator class.
pub const BACKSPACE: char = '\u{8}';

/// Checks if a character is skippable whitespace.
///
/// Matches space, tab, line feed, vertical tab, form feed and carriage
/// return.
///
/// # Example
///
/// ```
/// use plc_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\u{0B}'));
/// assert!(!is_whitespace('\u{8}'));
/// assert!(!is_whitespace('\u{A0}'));
/// ```
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Checks if a character ends a line comment.
pub fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use plc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('-'));
/// assert!(!is_ident_start('α'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
///
/// Hyphens are allowed after the first character, so `max-value` is a
/// single identifier.
///
/// # Example
///
/// ```
/// use plc_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('9'));
/// assert!(is_ident_continue('-'));
/// assert!(!is_ident_continue('+'));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Checks if a character is a decimal digit.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is a numeric sign (`+` or `-`).
pub fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// Checks if a character is a decimal point.
pub fn is_dot(c: char) -> bool {
    c == '.'
}

/// Checks if a character is an exponent marker (`e` or `E`).
pub fn is_exponent(c: char) -> bool {
    c == 'e' || c == 'E'
}

/// Checks if a character is a comment slash.
pub fn is_slash(c: char) -> bool {
    c == '/'
}

/// Checks if a character is a single quote.
pub fn is_single_quote(c: char) -> bool {
    c == '\''
}

/// Checks if a character is a double quote.
pub fn is_double_quote(c: char) -> bool {
    c == '"'
}

/// Checks if a character starts an escape sequence.
pub fn is_backslash(c: char) -> bool {
    c == '\\'
}

/// Checks if a character may follow a backslash in an escape sequence.
///
/// # Example
///
/// ```
/// use plc_lex::chars::is_escape_char;
///
/// for c in ['b', 'n', 'r', 't', '\'', '"', '\\'] {
///     assert!(is_escape_char(c));
/// }
/// assert!(!is_escape_char('x'));
/// assert!(!is_escape_char('0'));
/// ```
pub fn is_escape_char(c: char) -> bool {
    matches!(c, 'b' | 'n' | 'r' | 't' | '\'' | '"' | '\\')
}

/// Checks if a character may appear unescaped inside a character literal.
pub fn is_character_body(c: char) -> bool {
    !matches!(c, '\'' | '\n' | '\r' | '\\')
}

/// Checks if a character may appear unescaped inside a string literal.
pub fn is_string_body(c: char) -> bool {
    !matches!(c, '"' | '\n' | '\r' | '\\')
}

/// Checks if a character starts a comparison operator (`<`, `>`, `!`, `=`).
pub fn is_comparison(c: char) -> bool {
    matches!(c, '<' | '>' | '!' | '=')
}

/// Checks if a character is an equals sign.
pub fn is_equals(c: char) -> bool {
    c == '='
}

/// Checks if a character can stand alone as a single-character operator.
///
/// Anything that is not a letter, digit, underscore, quote, space, line
/// break, tab or backspace qualifies.
///
/// # Example
///
/// ```
/// use plc_lex::chars::is_operator;
///
/// assert!(is_operator('+'));
/// assert!(is_operator(';'));
/// assert!(is_operator('é'));
/// assert!(!is_operator('a'));
/// assert!(!is_operator('"'));
/// assert!(!is_operator('\u{8}'));
/// ```
pub fn is_operator(c: char) -> bool {
    !(c.is_ascii_alphanumeric()
        || matches!(c, '_' | '\'' | '"' | ' ' | '\n' | '\r' | '\t' | BACKSPACE))
}
