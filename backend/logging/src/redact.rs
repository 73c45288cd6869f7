//! Log Redaction Layer
//!
//! Scrubs bearer tokens, API keys, e-mail addresses and phone numbers from
//! strings prior to logging.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(sk-[a-zA-Z0-9_\-]{20,})|(Bearer\s+[a-zA-Z0-9\-\._~+/]+=*)").unwrap()
});
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap());
static TELEPHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

/// Redacts sensitive patterns in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    // Tokens first: a JWT segment can look like digits.
    let redacted = TOKEN_RE.replace_all(input, "[REDACTED_TOKEN]");
    let redacted = replace(redacted, &EMAIL_RE, "[REDACTED_EMAIL]");
    replace(redacted, &TELEPHONE_RE, "[REDACTED_PHONE]").into_owned()
}

fn replace<'a>(text: Cow<'a, str>, re: &Regex, with: &str) -> Cow<'a, str> {
    if re.is_match(&text) {
        Cow::Owned(re.replace_all(&text, with).into_owned())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redaction() {
        let raw = "Sending to +1-555-123-4567 with Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";
        let clean = redact_sensitive_data(raw);
        assert!(!clean.contains("+1-555-123-4567"));
        assert!(!clean.contains("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"));
        assert!(clean.contains("[REDACTED_TOKEN]"));
    }

    #[test]
    fn test_email_redaction() {
        let clean = redact_sensitive_data("login ok for founder@venture.io");
        assert_eq!(clean, "login ok for [REDACTED_EMAIL]");
    }

    #[test]
    fn test_plain_text_untouched() {
        let text = "## Startup Summary\n- Revenue: $120k in year 1";
        assert_eq!(redact_sensitive_data(text), text);
    }
}
