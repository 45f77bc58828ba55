//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers. The `*_line`/`box_*` printers delegate to
//! `format_*` functions so layout can be checked without a terminal.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[33m";
pub const GREEN: &str = "\x1b[32m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and reset colors.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_warning(msg: &str) {
    println!("{YELLOW}{msg}{RESET}");
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 64;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

pub fn format_box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

pub fn format_box_line(content: &str) -> String {
    let padding = INNER_WIDTH.saturating_sub(display_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

pub fn format_box_line_center(content: &str) -> String {
    let total = INNER_WIDTH.saturating_sub(display_width(content));
    let left = total / 2;
    format!("│ {}{}{} │", " ".repeat(left), content, " ".repeat(total - left))
}

pub fn format_box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Split `text` into box-width chunks. Passwords have no spaces to wrap on.
pub fn wrap_chunks(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(INNER_WIDTH)
        .map(|c| c.iter().collect())
        .collect()
}

pub fn box_top(title: &str) {
    println!("{}", format_box_top(title));
}

pub fn box_line(content: &str) {
    println!("{}", format_box_line(content));
}

pub fn box_line_center(content: &str) {
    println!("{}", format_box_line_center(content));
}

pub fn box_bottom() {
    println!("{}", format_box_bottom());
}

/// Print a help option with flag and description columns.
pub fn box_opt(flag: &str, desc: &str) {
    const FLAG_COL: usize = 26;
    box_line(&format!("{:<width$}{}", flag, desc, width = FLAG_COL));
}

/// Display width ignoring ANSI escape sequences.
fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
