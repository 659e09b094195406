//! Terminal output sanitization
//!
//! Block content comes straight out of a user's graph. Anything printed to the
//! terminal goes through [`sanitize`] first so ANSI escape sequences and other
//! control characters embedded in notes can't move the cursor or recolor output.

/// Strips ANSI CSI sequences and control characters except tab, newline and carriage return
///
/// # Examples
///
/// ```
/// use logseq_sidekick::utils::terminal::sanitize;
///
/// assert_eq!(sanitize("\x1b[31mTODO\x1b[0m call Sifo"), "TODO call Sifo");
/// ```
pub fn sanitize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        // CSI sequence: ESC [ ... final letter
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Single-line preview: first non-empty line, sanitized, cut at `max_chars` with an ellipsis
pub fn sanitize_preview(text: &str, max_chars: usize) -> String {
    let clean = sanitize(text);
    let line = clean.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");

    if line.chars().count() <= max_chars {
        return line.to_string();
    }

    let mut preview: String = line.chars().take(max_chars.saturating_sub(1)).collect();
    preview.push('…');
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_color_codes() {
        assert_eq!(sanitize("\x1b[1m\x1b[31mBold Red\x1b[0m plain"), "Bold Red plain");
    }

    #[test]
    fn test_sanitize_cursor_movement() {
        assert_eq!(sanitize("\x1b[2J\x1b[H Cleared"), " Cleared");
    }

    #[test]
    fn test_sanitize_control_chars() {
        assert_eq!(sanitize("Alert!\x07 back\x08"), "Alert! back");
    }

    #[test]
    fn test_sanitize_keeps_whitespace_and_unicode() {
        let text = "Sifo Lakaw 鍾文觀\n\tsifolakaw@gmail.com 👋";
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn test_preview_first_line() {
        assert_eq!(sanitize_preview("\n  first line  \nsecond", 50), "first line");
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(sanitize_preview("abcdefghij", 5), "abcd…");
        assert_eq!(sanitize_preview("abcde", 5), "abcde");
    }

    #[test]
    fn test_preview_empty() {
        assert_eq!(sanitize_preview("", 10), "");
        assert_eq!(sanitize_preview("\x1b[31m\x1b[0m", 10), "");
    }
}
