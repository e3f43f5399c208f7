//! # Book Titles
//!
//! Splits catalogue titles such as `"제목 (부제목)"` into a main title and a
//! subtitle for display.
//!
//! Subtitle patterns are tried in priority order (parenthesis form first,
//! then square brackets) and the first one that matches the whole trimmed
//! title wins. Only a bracketed group that *ends* the title is treated as a
//! subtitle; earlier groups stay inside the main title verbatim.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A title decomposed into its main part and optional subtitle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleParts {
    pub main_title: String,
    pub subtitle: Option<String>,
}

impl TitleParts {
    fn plain(main_title: &str) -> Self {
        Self {
            main_title: main_title.to_string(),
            subtitle: None,
        }
    }

    pub fn has_subtitle(&self) -> bool {
        self.subtitle.is_some()
    }
}

/// Trailing-group patterns in priority order. Group 1 is the main title,
/// group 2 the subtitle. `[^\n\r\x{2028}\x{2029}]` stands in for "any
/// character except a line terminator".
static SUBTITLE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        // "제목 (부제목)"
        Regex::new(r"^([^\n\r\x{2028}\x{2029}]+?)\s*\(([^)]+)\)\s*$").unwrap(),
        // "제목 [부제목]"
        Regex::new(r"^([^\n\r\x{2028}\x{2029}]+?)\s*\[([^\]]+)\]\s*$").unwrap(),
    ]
});

/// Any opening bracket followed later on the same line by any closing bracket.
static ANY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[(\[][^\n\r\x{2028}\x{2029}]+?[)\]]").unwrap());

/// Splits `title` into main title and trailing bracketed subtitle.
///
/// Never fails: a title without a trailing group comes back trimmed as the
/// main title with no subtitle.
pub fn decompose_title(title: &str) -> TitleParts {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return TitleParts::default();
    }

    SUBTITLE_PATTERNS
        .iter()
        .find_map(|pattern| {
            let caps = pattern.captures(trimmed)?;
            Some(TitleParts {
                main_title: caps.get(1)?.as_str().trim().to_string(),
                subtitle: Some(caps.get(2)?.as_str().trim().to_string()),
            })
        })
        .unwrap_or_else(|| TitleParts::plain(trimmed))
}

/// Like [`decompose_title`] for callers whose title may be missing.
///
/// A missing title decomposes to an empty main title with no subtitle.
pub fn decompose_optional_title(title: Option<&str>) -> TitleParts {
    title.map(decompose_title).unwrap_or_default()
}

/// Returns true if `title` contains a bracketed group anywhere.
///
/// Deliberately looser than [`decompose_title`]: the group need not be
/// trailing, and the opening and closing delimiters need not agree. Intended
/// for UI hints only.
pub fn has_brackets(title: &str) -> bool {
    ANY_BRACKETS.is_match(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parts(main: &str, sub: Option<&str>) -> TitleParts {
        TitleParts {
            main_title: main.to_string(),
            subtitle: sub.map(str::to_string),
        }
    }

    #[rstest]
    #[case("제목 (부제목)", "제목", Some("부제목"))]
    #[case("제목 [부제목]", "제목", Some("부제목"))]
    #[case("제목(부제목)", "제목", Some("부제목"))]
    #[case("  제목  (  부제목  )  ", "제목", Some("부제목"))]
    #[case("Animal Farm (A Fairy Story)", "Animal Farm", Some("A Fairy Story"))]
    #[case("A (B) (C)", "A (B)", Some("C"))]
    #[case("A [B] (C)", "A [B]", Some("C"))]
    #[case("A (B) [C]", "A (B)", Some("C"))]
    fn trailing_group_becomes_subtitle(
        #[case] input: &str,
        #[case] main: &str,
        #[case] sub: Option<&str>,
    ) {
        assert_eq!(decompose_title(input), parts(main, sub));
    }

    #[rstest]
    #[case("ABC")]
    #[case("  데미안  ")]
    #[case("A (B) C")]
    #[case("(부제목)")]
    #[case("제목 ()")]
    #[case("제목 (열림")]
    #[case("제목 [부제목)")]
    fn no_trailing_group_keeps_trimmed_title(#[case] input: &str) {
        assert_eq!(decompose_title(input), parts(input.trim(), None));
    }

    #[test]
    fn empty_and_missing_titles() {
        assert_eq!(decompose_title(""), parts("", None));
        assert_eq!(decompose_title("   "), parts("", None));
        assert_eq!(decompose_optional_title(None), parts("", None));
        assert_eq!(
            decompose_optional_title(Some("제목 (부제목)")),
            parts("제목", Some("부제목"))
        );
    }

    #[test]
    fn main_title_does_not_span_lines() {
        // the main title may not contain a line terminator
        assert_eq!(
            decompose_title("첫 줄\n둘째 줄 (부제목)"),
            parts("첫 줄\n둘째 줄 (부제목)", None)
        );
        assert_eq!(decompose_title("A\rB (C)"), parts("A\rB (C)", None));
        assert_eq!(decompose_title("A\r (B)"), parts("A", Some("B")));
        assert_eq!(
            decompose_title("A\u{2028}B [C]"),
            parts("A\u{2028}B [C]", None)
        );
        // whitespace before the group may still include a newline
        assert_eq!(decompose_title("제목\n(부제목)"), parts("제목", Some("부제목")));
    }

    #[test]
    fn decomposed_title_snapshot() {
        insta::assert_debug_snapshot!(decompose_title("데미안 (에밀 싱클레어의 청춘 이야기)"), @r#"
        TitleParts {
            main_title: "데미안",
            subtitle: Some(
                "에밀 싱클레어의 청춘 이야기",
            ),
        }
        "#);
    }

    #[rstest]
    #[case("A (B) C", true)]
    #[case("[B]", true)]
    #[case("mixed (delimiters]", true)]
    #[case("ABC", false)]
    #[case("()", false)]
    #[case("only ( open", false)]
    #[case("(a\r)", false)]
    #[case("(a\nb)", false)]
    #[case("", false)]
    fn bracket_hint(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(has_brackets(input), expected);
    }
}
