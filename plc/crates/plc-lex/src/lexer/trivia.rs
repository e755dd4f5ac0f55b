//! Whitespace and comment skipping.
//!
//! Skipped runs are emitted from the cursor like tokens and then dropped, so
//! the next token's span starts where the run ended.

use tracing::trace;

use crate::chars::{is_line_break, is_slash, is_whitespace};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips a run of whitespace.
    pub fn skip_whitespace(&mut self) {
        self.cursor.match_while(is_whitespace);
        let skipped = self.cursor.emit();
        trace!(len = skipped.span.len(), "skipped whitespace");
    }

    /// Skips a `//` comment up to, but not including, the line break.
    pub fn skip_comment(&mut self) {
        let opened = self.cursor.match_seq(&[is_slash, is_slash]);
        assert!(opened, "comment must start with //");
        while self.cursor.has(0) && !self.cursor.peek(&[is_line_break]) {
            self.cursor.match_any();
        }
        let skipped = self.cursor.emit();
        trace!(len = skipped.span.len(), "skipped comment");
    }
}
