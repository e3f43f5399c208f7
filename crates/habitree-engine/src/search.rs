//! Search result helpers: HTML escaping, query highlighting and splitting.

use std::borrow::Cow;

use regex::RegexBuilder;

const MARK_OPEN: &str = r#"<mark class="bg-yellow-200 dark:bg-yellow-900">"#;
const MARK_CLOSE: &str = "</mark>";

/// Escapes `&`, `<`, `>`, `"` and `'` so `text` is safe inside HTML.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Escapes `text` and wraps every case-insensitive occurrence of `query` in
/// a `<mark>` element.
///
/// Matching runs on the raw text, so queries containing `&` or `<` match
/// what the reader typed rather than the escaped entities.
pub fn highlight_text(text: &str, query: &str) -> String {
    if text.is_empty() || query.is_empty() {
        return escape_html(text).into_owned();
    }

    let pattern = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(e) => {
            log::debug!("not highlighting query {query:?}: {e}");
            return escape_html(text).into_owned();
        }
    };

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in pattern.find_iter(text) {
        out.push_str(&escape_html(&text[last..m.start()]));
        out.push_str(MARK_OPEN);
        out.push_str(&escape_html(m.as_str()));
        out.push_str(MARK_CLOSE);
        last = m.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

/// Splits a search query into whitespace-separated words.
pub fn split_search_query(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}
