/// Delimiters of the `[label](@book:id)` markup.
///
/// All delimiter constants live here; the parser and the formatter never
/// hardcode `[` or `(@book:` themselves.
pub struct BookLinkSyntax;

impl BookLinkSyntax {
    pub const OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    /// Everything between the label and the id: `](@book:`.
    pub const TARGET_OPEN: &'static [u8; 8] = b"](@book:";
    pub const CLOSE: u8 = b')';
    /// Route prefix of a linked book's detail page.
    pub const HREF_PREFIX: &'static str = "/books/";
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("book link label is empty")]
    EmptyLabel,
    #[error("book link label may not contain ']': {0:?}")]
    LabelContainsClose(String),
    #[error("book link id is empty")]
    EmptyTarget,
    #[error("book link id may not contain ')': {0:?}")]
    TargetContainsClose(String),
}

/// Builds the markup for a link to `target_id` shown as `label`.
///
/// Rejects inputs the parser could not read back, since the grammar has no
/// escape syntax.
pub fn format_book_link(label: &str, target_id: &str) -> Result<String, MarkupError> {
    if label.is_empty() {
        return Err(MarkupError::EmptyLabel);
    }
    if label.contains(char::from(BookLinkSyntax::LABEL_CLOSE)) {
        return Err(MarkupError::LabelContainsClose(label.to_string()));
    }
    if target_id.is_empty() {
        return Err(MarkupError::EmptyTarget);
    }
    if target_id.contains(char::from(BookLinkSyntax::CLOSE)) {
        return Err(MarkupError::TargetContainsClose(target_id.to_string()));
    }
    Ok(format!("[{label}](@book:{target_id})"))
}
