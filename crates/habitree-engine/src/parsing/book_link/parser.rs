use crate::parsing::{cursor::Cursor, span::Span};

use super::{kinds::BookLinkSyntax, types::BookLink};

/// Finds every book link in `text`, left to right.
///
/// Scanning resumes right after each complete link, so the results never
/// overlap and are sorted by `span.start`. Text without links yields an
/// empty vector.
pub fn parse_book_links(text: &str) -> Vec<BookLink<'_>> {
    let mut cur = Cursor::new(text, 0);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(link) = try_parse_book_link(&mut cur) {
            out.push(link);
            continue;
        }
        cur.bump();
    }

    out
}

/// Attempts to parse a book link starting at the current position.
///
/// Returns `None` if not at `[` or if the markup is incomplete.
/// On failure, cursor position is restored.
fn try_parse_book_link<'a>(cur: &mut Cursor<'a>) -> Option<BookLink<'a>> {
    if cur.peek() != Some(BookLinkSyntax::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let parsed = scan_book_link(cur);
    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}

fn scan_book_link<'a>(cur: &mut Cursor<'a>) -> Option<BookLink<'a>> {
    let start = cur.pos();
    cur.bump(); // [

    let label_start = cur.pos();
    if cur.skip_until(BookLinkSyntax::LABEL_CLOSE) == 0 {
        return None;
    }
    let label = Span::new(label_start, cur.pos());

    if !cur.starts_with(BookLinkSyntax::TARGET_OPEN) {
        return None;
    }
    cur.bump_n(BookLinkSyntax::TARGET_OPEN.len());

    let target_start = cur.pos();
    if cur.skip_until(BookLinkSyntax::CLOSE) == 0 || cur.eof() {
        return None;
    }
    let target = Span::new(target_start, cur.pos());
    cur.bump(); // )

    Some(BookLink {
        display_text: local_slice(cur, label)?,
        target_id: local_slice(cur, target)?,
        span: Span::new(start, cur.pos()),
    })
}

/// Slices the cursor's input with an absolute span.
fn local_slice<'a>(cur: &Cursor<'a>, span: Span) -> Option<&'a str> {
    cur.s.get(span.start - cur.base..span.end - cur.base)
}
