//! Source positions.
//!
//! All offsets in this crate count characters, not bytes. A [`Span`] marks
//! the extent of a token in the input; a [`LineIndex`] turns an offset into
//! the 1-based line and column a person would look for.

use serde::{Deserialize, Serialize};

/// A half-open range of character offsets, `start..end`.
///
/// # Examples
///
/// ```
/// use plc_lex::Span;
///
/// let span = Span::new(4, 7);
/// assert_eq!(span.len(), 3);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Offset of the first character (inclusive).
    pub start: usize,
    /// Offset one past the last character (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} is past end {}", start, end);
        Self { start, end }
    }

    /// Number of characters covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Precomputed line starts for mapping offsets to line/column pairs.
///
/// Lines are separated by `\n`; a trailing `\r` is dropped from
/// [`line`](LineIndex::line) so CRLF input renders cleanly.
///
/// # Examples
///
/// ```
/// use plc_lex::LineIndex;
///
/// let index = LineIndex::new("let\nx = 1");
/// assert_eq!(index.line_col(0), (1, 1));
/// assert_eq!(index.line_col(4), (2, 1));
/// assert_eq!(index.line_col(8), (2, 5));
/// assert_eq!(index.line(2), Some("x = 1"));
/// ```
#[derive(Clone, Debug)]
pub struct LineIndex<'a> {
    source: &'a str,
    /// `(char offset, byte offset)` of the first character of every line.
    line_starts: Vec<(usize, usize)>,
}

impl<'a> LineIndex<'a> {
    /// Index the lines of `source`.
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![(0, 0)];
        for (char_offset, (byte_offset, c)) in source.char_indices().enumerate() {
            if c == '\n' {
                line_starts.push((char_offset + 1, byte_offset + 1));
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// Number of lines in the source (at least one).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a character offset into 1-based `(line, column)`.
    ///
    /// Offsets past the end land on the last line.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self
            .line_starts
            .binary_search_by(|(start, _)| start.cmp(&offset))
        {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let (line_start, _) = self.line_starts[line];
        (line + 1, offset - line_start + 1)
    }

    /// Text of a 1-based line, without its terminator.
    pub fn line(&self, line: usize) -> Option<&'a str> {
        let (_, start) = *self.line_starts.get(line.checked_sub(1)?)?;
        let end = self
            .line_starts
            .get(line)
            .map_or(self.source.len(), |&(_, next)| next - 1);
        let text = &self.source[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}
