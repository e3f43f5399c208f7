//! # habitree-engine
//!
//! Text processing behind the Habitree reading hub: decomposing book titles,
//! finding and rendering `[label](@book:id)` links in notes, and the small
//! helpers the application needs around them.

pub mod cache;
pub mod device;
pub mod io;
pub mod models;
pub mod note;
pub mod parsing;
pub mod search;
pub mod title;
pub mod validation;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use cache::TtlCache;
pub use models::NoteFile;
pub use note::{NoteFields, NoteType};
pub use parsing::{BookLink, Segment, Span, parse_book_links, render_book_links};
pub use title::{TitleParts, decompose_optional_title, decompose_title, has_brackets};
