//! Character cursor for traversing source text.
//!
//! This module provides the [`Cursor`] struct, which owns the read position
//! for a single scan pass. Besides bounded lookahead it accumulates the
//! characters matched since the last [`Cursor::emit`] so each scanner can
//! hand back its literal without tracking a start offset itself.

use crate::span::Span;

/// A single-character predicate used for lookahead.
///
/// The functions in [`crate::chars`] all have this shape; non-capturing
/// closures coerce to it as well.
pub type Pattern = fn(char) -> bool;

/// A stretch of input handed back by [`Cursor::emit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// The matched source text.
    pub text: &'a str,
    /// Character offsets of `text` in the input.
    pub span: Span,
}

/// A cursor over source text with span accumulation.
///
/// The cursor never moves backwards. Every successful
/// [`match_seq`](Cursor::match_seq) grows the pending span; `emit` returns it
/// and starts a new one at the current position. The start of the pending
/// span is always `index() - pending()`.
///
/// # Example
///
/// ```
/// use plc_lex::chars::{is_digit, is_ident_start};
/// use plc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x1");
/// assert!(cursor.peek(&[is_ident_start, is_digit]));
/// assert!(cursor.match_seq(&[is_ident_start]));
/// assert!(cursor.match_seq(&[is_digit]));
/// assert_eq!(cursor.emit().text, "x1");
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current character offset.
    index: usize,

    /// Current byte offset, kept in step with `index`.
    position: usize,

    /// Characters matched since the last emission.
    pending: usize,

    /// Byte offset where the pending span starts.
    pending_start: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            index: 0,
            position: 0,
            pending: 0,
            pending_start: 0,
        }
    }

    /// Returns true if a character exists `offset` characters ahead.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert!(cursor.has(0));
    /// assert!(cursor.has(1));
    /// assert!(!cursor.has(2));
    /// ```
    pub fn has(&self, offset: usize) -> bool {
        self.remaining().chars().nth(offset).is_some()
    }

    /// Returns true if the next characters satisfy `patterns`, in order.
    ///
    /// Nothing is consumed. If fewer characters remain than there are
    /// patterns the answer is false.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::chars::{is_digit, is_sign};
    /// use plc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("-1");
    /// assert!(cursor.peek(&[is_sign, is_digit]));
    /// assert!(!cursor.peek(&[is_sign, is_digit, is_digit]));
    /// assert_eq!(cursor.index(), 0);
    /// ```
    pub fn peek(&self, patterns: &[Pattern]) -> bool {
        let mut chars = self.remaining().chars();
        patterns
            .iter()
            .all(|pattern| chars.next().is_some_and(|c| pattern(c)))
    }

    /// Like [`peek`](Cursor::peek), but consumes the characters on success.
    ///
    /// On failure the cursor is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::chars::is_slash;
    /// use plc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("/x");
    /// assert!(!cursor.match_seq(&[is_slash, is_slash]));
    /// assert_eq!(cursor.index(), 0);
    /// assert!(cursor.match_seq(&[is_slash]));
    /// assert_eq!(cursor.index(), 1);
    /// ```
    pub fn match_seq(&mut self, patterns: &[Pattern]) -> bool {
        if !self.peek(patterns) {
            return false;
        }
        for _ in patterns {
            self.bump();
        }
        true
    }

    /// Returns true if the next character is `expected`.
    pub fn peek_char(&self, expected: char) -> bool {
        self.current() == Some(expected)
    }

    /// Consumes the next character if it is `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=");
    /// assert!(cursor.match_char('<'));
    /// assert!(!cursor.match_char('<'));
    /// assert!(cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek_char(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes characters while they satisfy `pattern`; returns how many.
    pub fn match_while(&mut self, pattern: Pattern) -> usize {
        let mut count = 0;
        while self.match_seq(&[pattern]) {
            count += 1;
        }
        count
    }

    /// Consumes the next character whatever it is.
    ///
    /// Returns false at end of input.
    pub fn match_any(&mut self) -> bool {
        self.match_seq(&[any_char])
    }

    /// Returns the pending span and resets it.
    ///
    /// Must be called exactly once per token or discarded skip run. Calling
    /// it with nothing pending is a scanner bug.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// cursor.match_any();
    /// let first = cursor.emit();
    /// assert_eq!((first.text, first.span.start, first.span.end), ("a", 0, 1));
    /// cursor.match_any();
    /// assert_eq!(cursor.emit().text, "b");
    /// ```
    pub fn emit(&mut self) -> Lexeme<'a> {
        debug_assert!(self.pending > 0, "emit called with no pending match");
        let lexeme = Lexeme {
            text: &self.source[self.pending_start..self.position],
            span: Span::new(self.index - self.pending, self.index),
        };
        self.pending = 0;
        self.pending_start = self.position;
        lexeme
    }

    /// Returns the next character without consuming it.
    pub fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns true if no input remains.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current absolute character offset.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of characters matched since the last emission.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// The unread remainder of the source.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    fn bump(&mut self) {
        if let Some(c) = self.current() {
            self.position += c.len_utf8();
            self.index += 1;
            self.pending += 1;
        }
    }
}

fn any_char(_: char) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{is_digit, is_ident_start, is_sign, is_whitespace};

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("let x");
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.pending(), 0);
        assert_eq!(cursor.current(), Some('l'));
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert!(!cursor.has(0));
        assert_eq!(cursor.current(), None);
        assert!(!cursor.match_any());
        assert!(!cursor.peek(&[is_digit]));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let cursor = Cursor::new("+5");
        assert!(cursor.peek(&[is_sign]));
        assert!(cursor.peek(&[is_sign, is_digit]));
        assert!(!cursor.peek(&[is_digit]));
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.pending(), 0);
    }

    #[test]
    fn test_peek_past_end_is_false() {
        let cursor = Cursor::new("+");
        assert!(!cursor.peek(&[is_sign, is_digit]));
    }

    #[test]
    fn test_match_seq_advances_pending() {
        let mut cursor = Cursor::new("-12");
        assert!(cursor.match_seq(&[is_sign, is_digit]));
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.pending(), 2);
        assert!(!cursor.match_seq(&[is_sign]));
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_match_while() {
        let mut cursor = Cursor::new("123abc");
        assert_eq!(cursor.match_while(is_digit), 3);
        assert_eq!(cursor.match_while(is_digit), 0);
        assert_eq!(cursor.match_while(is_ident_start), 3);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_emit_resets_pending() {
        let mut cursor = Cursor::new("ab  cd");
        cursor.match_while(is_ident_start);
        let word = cursor.emit();
        assert_eq!(word.text, "ab");
        assert_eq!(word.span, Span::new(0, 2));
        assert_eq!(cursor.pending(), 0);

        cursor.match_while(is_whitespace);
        assert_eq!(cursor.emit().span, Span::new(2, 4));

        cursor.match_while(is_ident_start);
        let word = cursor.emit();
        assert_eq!(word.text, "cd");
        assert_eq!(word.span, Span::new(4, 6));
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = Cursor::new("αβ+");
        assert!(cursor.has(2));
        assert!(!cursor.has(3));
        assert!(cursor.match_any());
        assert!(cursor.match_any());
        assert_eq!(cursor.index(), 2);
        let lexeme = cursor.emit();
        assert_eq!(lexeme.text, "αβ");
        assert_eq!(lexeme.span, Span::new(0, 2));
        assert!(cursor.match_char('+'));
        assert_eq!(cursor.emit().span, Span::new(2, 3));
    }

    #[test]
    fn test_pending_start_invariant() {
        let mut cursor = Cursor::new("abc def");
        cursor.match_any();
        cursor.match_any();
        assert_eq!(cursor.index() - cursor.pending(), 0);
        cursor.emit();
        cursor.match_any();
        assert_eq!(cursor.index() - cursor.pending(), 2);
    }
}
