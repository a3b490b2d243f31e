//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

fn ansi_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").expect("static regex"))
}

pub fn strip_ansi(s: &str) -> String {
    ansi_regex().replace_all(s, "").into_owned()
}

/// Terminal columns taken by `s`, ignoring colour codes.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}

/// 90 → "1h 30m", 45 → "45m", 120 → "2h".
pub fn mins2readable(mins: u32) -> String {
    match (mins / 60, mins % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m:02}m"),
    }
}

/// Pixel values as the day view prints them: integers without decimals.
pub fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}px")
    } else {
        format!("{value:.1}px")
    }
}

/// Wraps free text (notes) to `width`, indenting continuation lines.
pub fn wrap_notes(text: &str, width: usize, indent: &str) -> String {
    let opts = textwrap::Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(indent);
    textwrap::fill(text, opts)
}
