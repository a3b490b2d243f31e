//! User-facing terminal lines. Diagnostics go through `tracing` instead.

use std::fmt::Display;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

fn tagged(color: &str, icon: &str, msg: impl Display) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info(msg: impl Display) {
    println!("{}", tagged(BLUE, "ℹ️", msg));
}

pub fn success(msg: impl Display) {
    println!("{}", tagged(GREEN, "✅", msg));
}

/// Warnings stay on stdout next to the agenda they refer to.
pub fn warning(msg: impl Display) {
    println!("{}", tagged(YELLOW, "⚠️", msg));
}

pub fn error(msg: impl Display) {
    eprintln!("{}", tagged(RED, "❌", msg));
}

/// Title line above a day or a date group, e.g. `=== 2025-12-04 ===`.
pub fn header(title: impl Display) {
    println!("{BLUE}{BOLD}=== {title} ==={RESET}");
}
