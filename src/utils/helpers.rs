// Sanitization and formatting utilities; called directly, not routed
#![allow(dead_code)]

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Default length budget for [`sanitize`]
pub const DEFAULT_MAX_LENGTH: usize = 100;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Anchored at both ends, a prefix match is not enough
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Check whether a string looks like `local-part@domain.tld`
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Strip unsafe characters and bound the length of untrusted text
///
/// `None` input (the caller had no string to give) degrades to an empty
/// string. The characters `< > " ' &` are removed first, then the result is
/// truncated to at most `max_length` characters, then surrounding whitespace
/// is trimmed. Removed characters do not count toward the length budget.
pub fn sanitize(text: Option<&str>, max_length: usize) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\'' | '&'))
        .take(max_length)
        .collect();

    cleaned.trim().to_string()
}

/// [`sanitize`] with the default length budget
pub fn sanitize_default(text: Option<&str>) -> String {
    sanitize(text, DEFAULT_MAX_LENGTH)
}

/// Standard response envelope: `{status, data}` plus an optional `message`
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    /// Envelope with the given status; an empty message is dropped
    pub fn new(data: T, status: &str, message: Option<&str>) -> Self {
        Self {
            status: status.to_string(),
            data,
            message: message
                .filter(|message| !message.is_empty())
                .map(str::to_string),
        }
    }

    /// Envelope with status `"success"` and no message
    pub fn success(data: T) -> Self {
        Self::new(data, "success", None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_valid() {
        assert!(validate_email("test@example.com"));
        assert!(validate_email("user.name+tag@domain.co.uk"));
    }

    #[test]
    fn test_validate_email_rejects_invalid() {
        assert!(!validate_email("invalid-email"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("test@"));
    }

    #[test]
    fn test_validate_email_rejects_short_tld() {
        assert!(!validate_email("test@example.c"));
    }

    #[test]
    fn test_validate_email_is_anchored() {
        assert!(!validate_email("test@example.com extra"));
        assert!(!validate_email("prefix test@example.com"));
    }

    #[test]
    fn test_sanitize_plain_text_unchanged() {
        assert_eq!(sanitize_default(Some("Hello World")), "Hello World");
    }

    #[test]
    fn test_sanitize_strips_unsafe_characters() {
        let sanitized = sanitize_default(Some("Hello <script>alert('xss')</script>"));

        assert!(!sanitized.contains('<'));
        assert!(!sanitized.contains('>'));
        assert!(!sanitized.contains('"'));
        assert!(!sanitized.contains('\''));
        assert!(!sanitized.contains('&'));
        assert!(sanitized.contains("alert"));
    }

    #[test]
    fn test_sanitize_truncates_to_budget() {
        let long_text = "a".repeat(200);
        let short = sanitize(Some(&long_text), 50);

        assert_eq!(short.len(), 50);
    }

    #[test]
    fn test_sanitize_truncates_after_removal() {
        // Six characters survive removal, so all of them fit the budget
        let sanitized = sanitize(Some("<<<<abc>>>def"), 6);
        assert_eq!(sanitized, "abcdef");
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize_default(Some("  padded  ")), "padded");
    }

    #[test]
    fn test_sanitize_none_is_empty() {
        assert_eq!(sanitize_default(None), "");
    }

    #[test]
    fn test_envelope_success() {
        let envelope = Envelope::success(serde_json::json!({"k": "v"}));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"status": "success", "data": {"k": "v"}})
        );
    }

    #[test]
    fn test_envelope_with_message() {
        let envelope = Envelope::new(
            serde_json::json!({"k": "v"}),
            "error",
            Some("Something went wrong"),
        );
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], "Something went wrong");
    }

    #[test]
    fn test_envelope_drops_empty_message() {
        let envelope = Envelope::new(serde_json::json!(null), "success", Some(""));
        let value = serde_json::to_value(&envelope).unwrap();

        assert!(value.get("message").is_none());
    }
}
