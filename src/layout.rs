//! Text layout helpers used by the CLI.
//! Keeps ANSI-aware width calculations in one place.

use terminal_size::{Width, terminal_size};

pub const DEFAULT_COLUMNS: usize = 80;

/// Width of the attached terminal, if stdout is one.
pub fn terminal_columns() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize).filter(|w| *w > 0)
}

/// Left-pad a field based on visible length (ignoring ANSI codes).
pub fn pad_left(display: &str, target: usize) -> String {
    let padding = target.saturating_sub(display_len(display));
    format!("{}{}", " ".repeat(padding), display)
}

/// Truncate text to a width, appending an ellipsis when needed.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let len = text.chars().count();
    if len <= max_width {
        return text.to_string();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let mut out =
        text.chars().take(max_width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

/// Compute visible length of a string, ignoring ANSI escape sequences.
pub fn display_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        len += 1;
    }
    len
}

/// Greedy word wrap. Always returns at least one (possibly empty) line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        if line.chars().count() + 1 + word.chars().count() <= width {
            line.push(' ');
            line.push_str(word);
        } else {
            out.push(line);
            line = word.to_string();
        }
    }
    if !line.is_empty() {
        out.push(line);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}
