/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Count color:
/// 0 → grey
/// \>0 → green
pub fn color_for_count(value: u64) -> &'static str {
    if value == 0 { GREY } else { GREEN }
}

pub fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}
