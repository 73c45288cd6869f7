//! Inline Emphasis
//!
//! Wraps `**text**` pairs in `<strong>`. Runs on escaped text only, so the
//! wrappers are the only markup it can introduce.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// Non-greedy: each pair closes at the nearest following `**`. A pair never
// spans a line terminator (`\r`, `\n`, U+2028, U+2029).
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^\r\n\x{2028}\x{2029}]+?)\*\*").expect("bold pattern is valid")
});

/// Replaces every non-overlapping `**inner**` with `<strong>inner</strong>`.
///
/// Pairs need at least one character between the markers and never nest.
/// A marker without a partner stays in the text as-is, as do single `*`.
pub fn transform_inline(text: &str) -> Cow<'_, str> {
    if !text.contains("**") {
        return Cow::Borrowed(text);
    }
    BOLD_RE.replace_all(text, "<strong>${1}</strong>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_single_pair() {
        assert_eq!(transform_inline("**bold** and *not*"), "<strong>bold</strong> and *not*");
    }

    #[test]
    fn test_pairs_are_non_greedy() {
        assert_eq!(
            transform_inline("**a** mid **b**"),
            "<strong>a</strong> mid <strong>b</strong>"
        );
    }

    #[test]
    fn test_unpaired_marker_stays_literal() {
        assert_eq!(transform_inline("**open only"), "**open only");
        assert_eq!(transform_inline("**a** then **"), "<strong>a</strong> then **");
    }

    #[test]
    fn test_empty_pair_is_not_bold() {
        assert_eq!(transform_inline("****"), "****");
        assert_eq!(transform_inline("*****"), "<strong>*</strong>");
    }

    #[test]
    fn test_pair_does_not_span_line_terminators() {
        assert_eq!(transform_inline("**a\r b**"), "**a\r b**");
        assert_eq!(transform_inline("**a\u{2028}b**"), "**a\u{2028}b**");
        assert_eq!(transform_inline("**a\u{2029}b**"), "**a\u{2029}b**");
        assert_eq!(
            transform_inline("**a\r** **b**"),
            "**a\r<strong> </strong>b**"
        );
    }

    #[test]
    fn test_no_markers_borrows() {
        assert!(matches!(transform_inline("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_keeps_escaped_entities() {
        assert_eq!(
            transform_inline("**&lt;b&gt;**"),
            "<strong>&lt;b&gt;</strong>"
        );
    }
}
