//! Note content helpers.
//!
//! Newer notes store their body as a JSON object `{"quote": …, "memo": …}`;
//! older ones hold free text. These helpers read both shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a note was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    Quote,
    Transcription,
    Photo,
    Memo,
}

/// Returns the label shown for a note: "사진", "필사" or "기록".
pub fn note_type_label(kind: NoteType, has_image: bool) -> &'static str {
    match (kind, has_image) {
        (NoteType::Photo, true) => "사진",
        (NoteType::Transcription, true) | (NoteType::Quote, _) => "필사",
        _ => "기록",
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("note content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("note content is a bare JSON value, not an object")]
    NotAnObject,
}

/// The structured form of a note body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl NoteFields {
    /// Decodes a JSON object body.
    ///
    /// An array decodes as an object without fields. Falsy field values
    /// (`null`, `false`, `0`, `""`) are treated as absent, other non-string
    /// values keep their JSON text (`{"memo":3}` has memo `"3"`).
    pub fn from_json(content: &str) -> Result<Self, NoteError> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(object) => Ok(Self {
                quote: display_field(object.get("quote")),
                memo: display_field(object.get("memo")),
            }),
            Value::Array(_) => Ok(Self::default()),
            _ => Err(NoteError::NotAnObject),
        }
    }

    /// Encodes the fields as the JSON body stored for a note.
    pub fn to_json(&self) -> Result<String, NoteError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn display_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Splits a stored note body into quote and memo.
///
/// Free text becomes the memo. A bare JSON value such as `"str"` or `7`,
/// like an empty or missing body, has neither field.
pub fn parse_note_content_fields(content: Option<&str>) -> NoteFields {
    let Some(content) = content.filter(|c| !c.is_empty()) else {
        return NoteFields::default();
    };

    match NoteFields::from_json(content) {
        Ok(fields) => fields,
        Err(NoteError::Json(_)) => NoteFields {
            quote: None,
            memo: Some(content.to_string()),
        },
        Err(NoteError::NotAnObject) => NoteFields::default(),
    }
}

/// Formats a note body for read-only display.
///
/// JSON objects and arrays become labelled lines ("인상깊은 구절", "내 생각",
/// "페이지"), or `None` when there is nothing to show; anything else is
/// returned unchanged.
pub fn parse_note_content(content: Option<&str>, page_number: Option<i32>) -> Option<String> {
    let content = content.filter(|c| !c.is_empty())?;

    let Ok(fields) = NoteFields::from_json(content) else {
        return Some(content.to_string());
    };

    let mut lines = vec![];
    if let Some(quote) = &fields.quote {
        lines.push(format!("인상깊은 구절: {quote}"));
    }
    if let Some(memo) = &fields.memo {
        lines.push(format!("내 생각: {memo}"));
    }
    if let Some(page) = page_number.filter(|p| *p != 0) {
        lines.push(format!("페이지: {page}"));
    }

    (!lines.is_empty()).then(|| lines.join("\n"))
}

/// Parses a page number the way form input is read: leading whitespace and
/// sign allowed, digits up to the first non-digit (`"12쪽"` is 12).
///
/// Values beyond the `i32` range saturate to `i32::MAX` or `i32::MIN`.
pub fn parse_page_number(input: &str) -> Option<i32> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    Some(digits.as_bytes()[..end].iter().fold(0i32, |acc, b| {
        let digit = i32::from(b - b'0');
        let acc = acc.saturating_mul(10);
        if negative {
            acc.saturating_sub(digit)
        } else {
            acc.saturating_add(digit)
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(NoteType::Photo, true, "사진")]
    #[case(NoteType::Photo, false, "기록")]
    #[case(NoteType::Transcription, true, "필사")]
    #[case(NoteType::Transcription, false, "기록")]
    #[case(NoteType::Quote, false, "필사")]
    #[case(NoteType::Quote, true, "필사")]
    #[case(NoteType::Memo, true, "기록")]
    fn labels(#[case] kind: NoteType, #[case] has_image: bool, #[case] expected: &str) {
        assert_eq!(note_type_label(kind, has_image), expected);
    }

    #[test]
    fn note_type_uses_lowercase_names() {
        let kind: NoteType = serde_json::from_str("\"transcription\"").unwrap();
        assert_eq!(kind, NoteType::Transcription);
    }

    #[test]
    fn fields_from_json_object() {
        let fields = parse_note_content_fields(Some(r#"{"quote":"구절","memo":"생각"}"#));
        assert_eq!(
            fields,
            NoteFields {
                quote: Some("구절".into()),
                memo: Some("생각".into()),
            }
        );
    }

    #[test]
    fn free_text_becomes_memo() {
        let fields = parse_note_content_fields(Some("그냥 메모"));
        assert_eq!(fields.quote, None);
        assert_eq!(fields.memo.as_deref(), Some("그냥 메모"));
    }

    #[test]
    fn empty_fields_and_non_objects() {
        assert_eq!(parse_note_content_fields(None), NoteFields::default());
        assert_eq!(parse_note_content_fields(Some("")), NoteFields::default());
        assert_eq!(parse_note_content_fields(Some("[1, 2]")), NoteFields::default());
        assert_eq!(parse_note_content_fields(Some("\"str\"")), NoteFields::default());
        assert_eq!(
            parse_note_content_fields(Some(r#"{"quote":"","memo":0}"#)),
            NoteFields::default()
        );
    }

    #[rstest]
    #[case(r#"{"memo":3}"#, Some("3"))]
    #[case(r#"{"memo":-1.5}"#, Some("-1.5"))]
    #[case(r#"{"memo":true}"#, Some("true"))]
    #[case(r#"{"memo":["a","b"]}"#, Some(r#"["a","b"]"#))]
    #[case(r#"{"memo":false}"#, None)]
    #[case(r#"{"memo":0.0}"#, None)]
    #[case(r#"{"memo":null}"#, None)]
    fn non_string_fields_follow_truthiness(#[case] body: &str, #[case] memo: Option<&str>) {
        assert_eq!(parse_note_content_fields(Some(body)).memo.as_deref(), memo);
    }

    #[test]
    fn display_content_for_json() {
        let shown = parse_note_content(Some(r#"{"quote":"구절","memo":"1"}"#), Some(42));
        assert_eq!(
            shown.as_deref(),
            Some("인상깊은 구절: 구절\n내 생각: 1\n페이지: 42")
        );
    }

    #[test]
    fn display_content_fallbacks() {
        assert_eq!(parse_note_content(None, Some(1)), None);
        assert_eq!(parse_note_content(Some("{}"), None), None);
        assert_eq!(parse_note_content(Some("{}"), Some(3)).as_deref(), Some("페이지: 3"));
        assert_eq!(parse_note_content(Some("plain"), Some(3)).as_deref(), Some("plain"));
        assert_eq!(parse_note_content(Some("\"str\""), None).as_deref(), Some("\"str\""));
    }

    #[test]
    fn arrays_display_like_empty_objects() {
        assert_eq!(parse_note_content(Some("[1, 2]"), None), None);
        assert_eq!(
            parse_note_content(Some("[1, 2]"), Some(3)).as_deref(),
            Some("페이지: 3")
        );
        assert_eq!(
            parse_note_content(Some("[1, 2]"), None),
            parse_note_content(Some("{}"), None)
        );
    }

    #[test]
    fn numeric_memo_is_displayed() {
        assert_eq!(
            parse_note_content(Some(r#"{"quote":"q","memo":3}"#), None).as_deref(),
            Some("인상깊은 구절: q\n내 생각: 3")
        );
    }

    #[test]
    fn json_round_trip_skips_missing_fields() {
        let fields = NoteFields {
            quote: None,
            memo: Some("m".into()),
        };
        assert_eq!(fields.to_json().unwrap(), r#"{"memo":"m"}"#);
    }

    #[rstest]
    #[case("12", Some(12))]
    #[case("  7", Some(7))]
    #[case("12쪽", Some(12))]
    #[case("-3", Some(-3))]
    #[case("+5", Some(5))]
    #[case("p.12", None)]
    #[case("", None)]
    #[case("-", None)]
    #[case("99999999999", Some(i32::MAX))]
    #[case("-99999999999", Some(i32::MIN))]
    #[case("2147483647", Some(i32::MAX))]
    fn page_numbers(#[case] input: &str, #[case] expected: Option<i32>) {
        assert_eq!(parse_page_number(input), expected);
    }
}
