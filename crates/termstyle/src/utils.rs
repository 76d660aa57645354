//! ANSI text processing utilities.
//!
//! Helpers for working with text that already carries escape
//! sequences, such as output from [`Style::paint`](crate::Style::paint):
//! stripping the codes back out, measuring visible width for alignment,
//! and extracting the codes themselves.

use std::sync::LazyLock;

use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// Regex pattern for SGR escape sequences.
pub const ESCAPE: &str = r"\x1b\[[0-9;]*m";

/// Compiled regex for ESCAPE pattern.
static ESCAPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(ESCAPE).unwrap());

/// Remove all SGR escape sequences from text.
///
/// Returns only the visible text content.
///
/// # Example
///
/// ```
/// use termstyle::utils::visible;
/// assert_eq!(visible("\x1b[31mred\x1b[0m"), "red");
/// assert_eq!(visible("plain"), "plain");
/// ```
pub fn visible(text: &str) -> String {
    ESCAPE_RE.replace_all(text, "").to_string()
}

/// Calculate the visible display width of text.
///
/// Strips escape sequences and measures the rest in terminal columns,
/// so double-width characters count as two.
///
/// # Example
///
/// ```
/// use termstyle::utils::visible_width;
/// assert_eq!(visible_width("\x1b[1mHello\x1b[0m"), 5);
/// assert_eq!(visible_width("你好"), 4);
/// ```
pub fn visible_width(text: &str) -> usize {
    visible(text).width()
}

/// Extract all SGR escape sequences from text, in order.
///
/// # Example
///
/// ```
/// use termstyle::utils::extract_codes;
/// let codes = extract_codes("\x1b[31m\x1b[1mx\x1b[0m");
/// assert_eq!(codes, vec!["\x1b[31m", "\x1b[1m", "\x1b[0m"]);
/// ```
pub fn extract_codes(text: &str) -> Vec<String> {
    ESCAPE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Check if a string starts with an escape sequence introducer.
pub fn is_escape(s: &str) -> bool {
    s.starts_with("\x1b[")
}
