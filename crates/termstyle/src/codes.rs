//! ANSI escape code constants.
//!
//! This module provides the raw SGR escape sequences used by the
//! style builder.

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Render a single SGR code as an escape sequence.
///
/// # Example
///
/// ```
/// use termstyle::codes::sgr;
/// assert_eq!(sgr(31), "\x1b[31m");
/// ```
pub fn sgr(code: u8) -> String {
    format!("\x1b[{}m", code)
}
