//! Shared rendering utilities.
//!
//! Cursor positioning, highlight-aware text output, and char-based truncation
//! and word wrapping. All widths are counted in `char`s.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text`, painting the given char ranges with the match highlight colors.
///
/// `restore` is re-emitted after each highlighted section so the surrounding
/// style (e.g. a selected card's colors) continues.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal: String = chars[current_pos..start].iter().collect();
        let highlighted: String = chars[start..end].iter().collect();
        print!("{normal}");
        print!(
            "{}{}{highlighted}{}{restore}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg),
            Theme::reset()
        );
        current_pos = end;
    }

    let remaining: String = chars[current_pos..].iter().collect();
    print!("{remaining}");
}

/// Prints `text` centered on `row` in `style`, truncated to `cols` and padded
/// to the full width.
pub fn render_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}{}{text}", " ".repeat(padding));
    print!("{}{}", " ".repeat(cols.saturating_sub(padding + len)), Theme::reset());
}

/// Shortens `text` to at most `max` chars, ending with `…` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Greedy word wrap to `width` chars per line.
///
/// Explicit newlines are kept, blank lines included. Words longer than the
/// width are split across lines.
///
/// ```
/// use promptfolio::ui::helpers::wrap_text;
///
/// assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }

        lines.push(line);
    }

    lines
}
