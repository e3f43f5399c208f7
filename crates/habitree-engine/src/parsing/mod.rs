//! # Parsing
//!
//! Byte-oriented scanning primitives and the inline book-link markup parser.

pub mod book_link;
pub mod cursor;
pub mod span;

pub use book_link::{
    BookLink, MarkupError, Segment, format_book_link, parse_book_links, render_book_links,
    render_book_links_html, strip_book_links,
};
pub use span::Span;
