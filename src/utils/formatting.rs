//! Formatting utilities used for terminal and export outputs.

use unicode_width::UnicodeWidthStr;

/// Columns occupied on screen (emoji count double, combining marks zero).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Right-pad to `width` screen columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}

pub fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
