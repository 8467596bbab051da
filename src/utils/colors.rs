/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Wrap `value` in `color` when coloring is enabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled && !color.is_empty() && !value.is_empty() {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Announced times in green, the "TBA" sentinel greyed out.
pub fn color_for_time(value: &str) -> &'static str {
    if value.trim() == crate::models::event::UNANNOUNCED {
        GREY
    } else {
        GREEN
    }
}
