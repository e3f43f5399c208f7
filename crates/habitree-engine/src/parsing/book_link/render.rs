use super::{parser::parse_book_links, types::Segment};

/// Splits `text` into plain-text and link segments for display.
///
/// Link-free text (including the empty string) comes back as a single text
/// segment. Otherwise gaps between links become text segments; empty gaps
/// are skipped, so adjacent links produce adjacent link segments.
pub fn render_book_links(text: &str) -> Vec<Segment<'_>> {
    let links = parse_book_links(text);
    if links.is_empty() {
        return vec![Segment::Text(text)];
    }

    let mut out = Vec::with_capacity(links.len() * 2 + 1);
    let mut cursor = 0;

    for link in links {
        if link.span.start > cursor {
            out.push(Segment::Text(&text[cursor..link.span.start]));
        }
        out.push(Segment::Link {
            display_text: link.display_text,
            target_id: link.target_id,
            source: &text[link.span.start..link.span.end],
        });
        cursor = link.span.end;
    }

    if cursor < text.len() {
        out.push(Segment::Text(&text[cursor..]));
    }

    out
}

/// Replaces every book link with its label.
///
/// Used for input fields and when a reader removes all links from a note
/// while keeping the book titles.
pub fn strip_book_links(text: &str) -> String {
    render_book_links(text)
        .iter()
        .map(Segment::display_text)
        .collect()
}

/// Renders `text` as an HTML fragment.
///
/// Plain text is escaped; links become anchors to the linked book's page.
pub fn render_book_links_html(text: &str) -> String {
    let mut html = String::with_capacity(text.len());
    for segment in render_book_links(text) {
        match segment.href() {
            Some(href) => {
                html.push_str("<a href=\"");
                html.push_str(&html_escape::encode_double_quoted_attribute(&href));
                html.push_str("\">");
                html.push_str(&html_escape::encode_text(segment.display_text()));
                html.push_str("</a>");
            }
            None => html.push_str(&html_escape::encode_text(segment.source_text())),
        }
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn rebuild(segments: &[Segment<'_>]) -> String {
        segments.iter().map(Segment::source_text).collect()
    }

    #[test]
    fn link_free_text_is_one_segment() {
        let text = "no links here";
        assert_eq!(render_book_links(text), vec![Segment::Text(text)]);
    }

    #[test]
    fn empty_text_is_one_empty_segment() {
        assert_eq!(render_book_links(""), vec![Segment::Text("")]);
    }

    #[test]
    fn gaps_and_links_in_order() {
        let segments = render_book_links("읽어보세요 [동물농장](@book:abc-123) 추천!");
        assert_eq!(
            segments,
            vec![
                Segment::Text("읽어보세요 "),
                Segment::Link {
                    display_text: "동물농장",
                    target_id: "abc-123",
                    source: "[동물농장](@book:abc-123)",
                },
                Segment::Text(" 추천!"),
            ]
        );
    }

    #[test]
    fn adjacent_links_have_no_gap_segment() {
        let segments = render_book_links("[A](@book:1)[B](@book:2)");
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(Segment::is_link));
        assert_eq!(segments[1].href().as_deref(), Some("/books/2"));
    }

    #[rstest]
    #[case("")]
    #[case("plain")]
    #[case("[A](@book:1)")]
    #[case("lead [A](@book:1)")]
    #[case("[A](@book:1) trail")]
    #[case("[A](@book:1)[B](@book:2)")]
    #[case("[broken](@book: [ok](@book:9) ] ) [")]
    #[case("한글 [책](@book:1)\n둘째 줄 [다른 책](@book:2)!")]
    fn segments_reconstruct_source(#[case] text: &str) {
        assert_eq!(rebuild(&render_book_links(text)), text);
    }

    /// Every string of up to five pieces drawn from the link delimiters and
    /// some plain text, including Korean.
    fn delimiter_soup() -> Vec<String> {
        const PIECES: [&str; 8] = ["[", "]", "(", ")", "@book:", "](@book:", "a", "책"];
        let mut all = vec![String::new()];
        let mut frontier = vec![String::new()];
        for _ in 0..5 {
            frontier = frontier
                .iter()
                .flat_map(|prefix| {
                    PIECES
                        .into_iter()
                        .map(move |piece| format!("{prefix}{piece}"))
                })
                .collect();
            all.extend(frontier.iter().cloned());
        }
        all
    }

    #[test]
    fn segments_reconstruct_any_delimiter_mix() {
        for text in delimiter_soup() {
            let segments = render_book_links(&text);
            assert_eq!(rebuild(&segments), text, "round trip of {text:?}");

            let links = parse_book_links(&text);
            assert_eq!(
                segments.iter().filter(|s| s.is_link()).count(),
                links.len(),
                "link count of {text:?}"
            );
            if !links.is_empty() {
                assert!(
                    !segments.contains(&Segment::Text("")),
                    "empty gap in {text:?}"
                );
            }
            for pair in links.windows(2) {
                assert!(pair[0].span.end <= pair[1].span.start, "overlap in {text:?}");
            }
        }
    }

    #[test]
    fn strip_replaces_links_with_labels() {
        assert_eq!(
            strip_book_links("[동물농장](@book:1)과 [1984](@book:2)를 함께"),
            "동물농장과 1984를 함께"
        );
        assert_eq!(strip_book_links("untouched [x]"), "untouched [x]");
    }

    #[test]
    fn html_escapes_text_and_links() {
        let html = render_book_links_html("a < b [<책>](@book:1&2) & c");
        assert_eq!(
            html,
            "a &lt; b <a href=\"/books/1&amp;2\">&lt;책&gt;</a> &amp; c"
        );
    }

    #[test]
    fn segments_serialize_with_type_tag() {
        let segments = render_book_links("x [A](@book:1)");
        let json = serde_json::to_value(&segments).unwrap();
        assert_eq!(json[0]["type"], "text");
        assert_eq!(json[0]["content"], "x ");
        assert_eq!(json[1]["type"], "link");
        assert_eq!(json[1]["content"]["target_id"], "1");
    }
}
