use serde::Serialize;

use super::kinds::BookLinkSyntax;
use crate::parsing::span::Span;

/// One `[label](@book:id)` occurrence found in a note.
///
/// Borrowed from the source text; `span` covers the whole markup including
/// delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookLink<'a> {
    /// The label between `[` and `]`.
    pub display_text: &'a str,
    /// The id between `(@book:` and `)`.
    pub target_id: &'a str,
    /// Byte range of the full markup in the source text.
    pub span: Span,
}

impl BookLink<'_> {
    /// The detail page route of the linked book.
    pub fn href(&self) -> String {
        format!("{}{}", BookLinkSyntax::HREF_PREFIX, self.target_id)
    }

    /// Re-creates the markup this link was parsed from.
    pub fn markup(&self) -> String {
        format!("[{}](@book:{})", self.display_text, self.target_id)
    }
}

/// A contiguous piece of a note prepared for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum Segment<'a> {
    /// Plain text between links.
    Text(&'a str),
    /// A book link; `source` is the raw markup it replaces.
    Link {
        display_text: &'a str,
        target_id: &'a str,
        source: &'a str,
    },
}

impl<'a> Segment<'a> {
    /// The exact source text this segment covers.
    ///
    /// Concatenating the source text of every segment of a rendering
    /// reproduces the input.
    pub fn source_text(&self) -> &'a str {
        match self {
            Segment::Text(text) => text,
            Segment::Link { source, .. } => source,
        }
    }

    /// The text shown to the reader: the label for links.
    pub fn display_text(&self) -> &'a str {
        match self {
            Segment::Text(text) => text,
            Segment::Link { display_text, .. } => display_text,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Segment::Link { .. })
    }

    /// The linked book's route, for link segments.
    pub fn href(&self) -> Option<String> {
        match self {
            Segment::Text(_) => None,
            Segment::Link { target_id, .. } => {
                Some(format!("{}{}", BookLinkSyntax::HREF_PREFIX, target_id))
            }
        }
    }
}
