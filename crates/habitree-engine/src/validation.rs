//! Input validation for values that reach the backend.

use chrono::NaiveDate;
use uuid::{Uuid, Variant};

pub const DEFAULT_MIN_PAGE: i64 = 1;
pub const DEFAULT_MAX_PAGE: i64 = 1000;
pub const DEFAULT_MAX_TAGS: usize = 10;
pub const DEFAULT_MAX_TAG_LEN: usize = 50;
pub const DEFAULT_MAX_QUERY_LEN: usize = 200;

pub const DATABASE_ERROR_MESSAGE: &str =
    "데이터베이스 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";
pub const AUTH_ERROR_MESSAGE: &str = "인증 오류가 발생했습니다. 다시 로그인해주세요.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "알 수 없는 오류가 발생했습니다.";

/// Accepts only the hyphenated form of an RFC 4122 UUID, versions 1 to 5.
pub fn is_valid_uuid(s: &str) -> bool {
    if s.len() != 36 {
        return false;
    }
    Uuid::try_parse(s).is_ok_and(|id| {
        (1..=5).contains(&id.get_version_num()) && id.get_variant() == Variant::RFC4122
    })
}

/// Checks that `s` has between `min` and `max` characters, inclusive.
pub fn is_valid_length(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.chars().count())
}

/// Accepts calendar dates written exactly as `YYYY-MM-DD`.
///
/// The text must be the canonical form of a real date, so `2024-2-3` and
/// `2023-02-29` are rejected.
pub fn is_valid_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .is_ok_and(|date| date.format("%Y-%m-%d").to_string() == s)
}

pub fn is_valid_page(page: i64, min: i64, max: i64) -> bool {
    (min..=max).contains(&page)
}

/// Tags must be non-empty and short, and there may not be too many of them.
pub fn is_valid_tags<S: AsRef<str>>(tags: &[S], max_count: usize, max_tag_len: usize) -> bool {
    tags.len() <= max_count
        && tags
            .iter()
            .all(|tag| is_valid_length(tag.as_ref(), 1, max_tag_len))
}

/// Trims a search query and escapes the `ILIKE` wildcards `%` and `_`.
///
/// Returns `None` for missing, blank or overlong queries.
pub fn sanitize_search_query(query: Option<&str>, max_len: usize) -> Option<String> {
    let trimmed = query?.trim();
    if trimmed.is_empty() || trimmed.chars().count() > max_len {
        return None;
    }
    Some(trimmed.replace('%', "\\%").replace('_', "\\_"))
}

/// Replaces error messages that leak backend details with a fixed message
/// suitable for users. Other messages pass through; a missing message
/// becomes [`UNKNOWN_ERROR_MESSAGE`].
///
/// Matching is case-sensitive.
pub fn sanitize_error_message(message: Option<&str>) -> &str {
    let Some(message) = message else {
        return UNKNOWN_ERROR_MESSAGE;
    };
    let mentions = |words: &[&str]| words.iter().any(|w| message.contains(w));

    if mentions(&["database", "SQL", "connection"]) {
        DATABASE_ERROR_MESSAGE
    } else if mentions(&["auth", "token", "session"]) {
        AUTH_ERROR_MESSAGE
    } else {
        message
    }
}
