use std::ops::Range;

use serde::Serialize;

/// A byte range `[start, end)` into the source text.
///
/// Parsed values keep spans alongside borrowed slices so callers can map a
/// link back to its exact position in the note it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `text` with this span, or `None` if the span does not fall on
    /// char boundaries of `text`.
    pub fn slice(self, text: &str) -> Option<&str> {
        text.get(self.start..self.end)
    }

    /// Converts the byte span to a range of char indices in `text`.
    ///
    /// Useful for front ends that count characters (or UTF-16 units) rather
    /// than bytes. Returns `None` if the span is out of bounds or not on a
    /// char boundary.
    pub fn char_range(self, text: &str) -> Option<Range<usize>> {
        let inner = self.slice(text)?;
        let start = text[..self.start].chars().count();
        Some(start..start + inner.chars().count())
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}
