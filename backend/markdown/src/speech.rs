//! Speech Text
//!
//! Reduces a markdown reply to something a speech engine can read aloud.

/// Strips every `#` and `*` from the raw reply. Everything else, line breaks
/// and list dashes included, is kept.
pub fn speech_text(markdown: &str) -> String {
    markdown.chars().filter(|c| !matches!(c, '#' | '*')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_heading_and_bold_markers() {
        assert_eq!(speech_text("## Summary\n**Bold** move"), " Summary\nBold move");
    }

    #[test]
    fn test_keeps_list_dashes_and_symbols() {
        assert_eq!(speech_text("- a & b < c"), "- a & b < c");
    }

    #[test]
    fn test_empty() {
        assert_eq!(speech_text(""), "");
        assert_eq!(speech_text("###***"), "");
    }
}
