//! Text helpers used when rendering summaries and findings.
//!
//! Summaries come back from models with arbitrary whitespace and length, so
//! everything that reaches the report goes through these first.

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Truncate `text` to at most `max_len` bytes without splitting a grapheme.
///
/// An ellipsis is appended when the text was cut and there is room for it.
pub fn safe_truncate(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }

    let budget = if max_len >= 3 { max_len - 3 } else { max_len };
    let mut truncated = String::with_capacity(max_len);
    for grapheme in text.graphemes(true) {
        if truncated.len() + grapheme.len() > budget {
            break;
        }
        truncated.push_str(grapheme);
    }

    if max_len >= 3 {
        let kept = truncated.trim_end().len();
        truncated.truncate(kept);
        truncated.push_str("...");
    }
    truncated
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    let normalized: String = text.nfc().collect();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first_letter(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Terminate a sentence with a period unless it already ends with punctuation.
pub fn ensure_period(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.ends_with(['.', '!', '?']) {
        trimmed.to_string()
    } else {
        format!("{trimmed}.")
    }
}

/// Join items as natural-language prose: "a", "a and b", "a, b and c".
pub fn join_prose<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head = init.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
            format!("{head} and {}", last.as_ref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_safe_truncate() {
        assert_eq!(safe_truncate("hello world", 20), "hello world");
        assert_eq!(safe_truncate("hello world", 8), "hello...");
        assert_eq!(safe_truncate("hello", 2), "he");
        assert_eq!(safe_truncate("", 5), "");
        assert_eq!(safe_truncate("café au lait", 8), "café...");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  hello   world  "), "hello world");
        assert_eq!(normalize_whitespace("hello\n\tworld"), "hello world");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("hello"), "Hello");
        assert_eq!(capitalize_first_letter("HELLO"), "HELLO");
        assert_eq!(capitalize_first_letter(""), "");
    }

    #[test]
    fn test_ensure_period() {
        assert_eq!(ensure_period("Done"), "Done.");
        assert_eq!(ensure_period("Done."), "Done.");
        assert_eq!(ensure_period("Really? "), "Really?");
        assert_eq!(ensure_period("   "), "");
    }

    #[test]
    fn test_join_prose() {
        assert_eq!(join_prose::<&str>(&[]), "");
        assert_eq!(join_prose(&["os"]), "os");
        assert_eq!(join_prose(&["os", "sys"]), "os and sys");
        assert_eq!(join_prose(&["os", "sys", "json"]), "os, sys and json");
    }

    proptest! {
        #[test]
        fn truncate_never_exceeds_budget(text in ".{0,200}", max_len in 0usize..120) {
            let out = safe_truncate(&text, max_len);
            prop_assert!(out.len() <= max_len);
        }
    }
}
