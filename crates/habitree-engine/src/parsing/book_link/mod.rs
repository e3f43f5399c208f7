//! # Book Links
//!
//! Notes can reference other books in the reader's library with an inline
//! markup borrowed from Markdown links:
//!
//! ```text
//! book-link  := "[" label "]" "(@book:" id ")"
//! label      := one or more characters, excluding "]"
//! id         := one or more characters, excluding ")"
//! ```
//!
//! ## Modules
//!
//! - **`kinds`**: `BookLinkSyntax`, the owner of every delimiter constant
//! - **`types`**: `BookLink` (a parsed occurrence) and `Segment` (display unit)
//! - **`parser`**: `parse_book_links()`, a single left-to-right cursor pass
//! - **`render`**: segment, HTML and plain-text renderings built on the parser
//!
//! ## Limitations
//!
//! There is no escape syntax: a label can never contain `]` and an id can
//! never contain `)`. Text that does not form a complete link is left as
//! plain text; malformed markup is never an error.
//!
//! ```
//! use habitree_engine::parsing::book_link::{parse_book_links, render_book_links};
//!
//! let note = "읽어보세요 [동물농장](@book:abc-123) 추천!";
//! let links = parse_book_links(note);
//! assert_eq!(links[0].display_text, "동물농장");
//! assert_eq!(links[0].target_id, "abc-123");
//!
//! let rebuilt: String = render_book_links(note)
//!     .iter()
//!     .map(|s| s.source_text())
//!     .collect();
//! assert_eq!(rebuilt, note);
//! ```

pub mod kinds;
pub mod parser;
pub mod render;
pub mod types;

pub use kinds::{BookLinkSyntax, MarkupError, format_book_link};
pub use parser::parse_book_links;
pub use render::{render_book_links, render_book_links_html, strip_book_links};
pub use types::{BookLink, Segment};
