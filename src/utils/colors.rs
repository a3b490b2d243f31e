/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";

/// Grey placeholder for empty values, the value itself otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

/// Red when the day has overlapping bookings.
pub fn color_for_conflict(conflict: bool) -> &'static str {
    if conflict { RED } else { RESET }
}
