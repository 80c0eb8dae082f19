//! Field helpers for structured logging

const PREVIEW_CHARS: usize = 100;

/// Truncate a customer message for logging (privacy-safe)
///
/// Returns None unless content logging is enabled. When enabled, returns
/// the first ~100 characters of the trimmed message.
///
/// # Examples
///
/// ```
/// use switchboard::logging::message_preview;
///
/// assert_eq!(message_preview("my bill is wrong", true), Some("my bill is wrong".to_string()));
/// assert_eq!(message_preview("my bill is wrong", false), None);
/// ```
pub fn message_preview(message: &str, log_message_content: bool) -> Option<String> {
    if !log_message_content {
        return None;
    }

    let trimmed = message.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(truncate_chars(trimmed, PREVIEW_CHARS))
}

/// Truncate on a character boundary, appending "..." when shortened
fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_disabled() {
        assert!(message_preview("hello", false).is_none());
    }

    #[test]
    fn test_preview_empty_message() {
        assert!(message_preview("   ", true).is_none());
    }

    #[test]
    fn test_preview_truncates_long_message() {
        let long = "a".repeat(250);
        let preview = message_preview(&long, true).unwrap();
        assert_eq!(preview.len(), 103);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_preview_respects_multibyte_boundaries() {
        let message = "ş".repeat(150);
        let preview = message_preview(&message, true).unwrap();
        assert_eq!(preview.chars().count(), 103);
    }
}
