//! Detail overlay for the open prompt.
//!
//! ```text
//!   ╭──────────────────────────────────────────╮
//!   │ [Backend]                                │
//!   │ API Design Review                        │
//!   │ Review a REST API for consistency and …  │
//!   │                                          │
//!   ├──────────────────────────────────────────┤
//!   │ You are a senior backend engineer. ...   │
//!   │ ...                                      │
//!   │                          lines 1-12 of 30 ↓│
//!   ╰──────────────────────────────────────────╯
//! ```

use crate::app::state::DETAIL_MARGIN;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Rows of the box above the content: top border, category, title, two
/// description lines, separator.
const BOX_HEAD_ROWS: usize = 6;

/// Renders the overlay box starting at `row` with `visible` content rows.
///
/// Returns the row after the bottom border.
pub fn render_detail(row: usize, detail: &DetailView, visible: usize, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(DETAIL_MARGIN * 2 + 2);
    let text_width = inner_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.border);

    edge(row, '╭', '╮', inner_width, &border);
    let badge = format!("[{}]", detail.category);
    boxed(row + 1, &badge, &Theme::fg(&detail.category_color), text_width, &border);
    boxed(
        row + 2,
        &detail.title,
        &format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)),
        text_width,
        &border,
    );
    for offset in 0..2 {
        let line = detail.description.get(offset).map_or("", String::as_str);
        boxed(row + 3 + offset, line, &Theme::fg(&theme.colors.text_dim), text_width, &border);
    }
    edge(row + 5, '├', '┤', inner_width, &border);

    let content_top = row + BOX_HEAD_ROWS;
    let content_style = Theme::fg(&theme.colors.content_fg);
    for offset in 0..visible {
        let line = detail.content_lines.get(offset).map_or("", String::as_str);
        boxed(content_top + offset, line, &content_style, text_width, &border);
    }

    let indicator_row = content_top + visible;
    let indicator = scroll_indicator(detail);
    let pad = text_width.saturating_sub(indicator.chars().count());
    position_cursor(indicator_row, DETAIL_MARGIN + 1);
    print!("{border}│{} {}", Theme::reset(), " ".repeat(pad));
    print!("{}{indicator}{} {border}│{}", Theme::fg(&theme.colors.text_dim), Theme::reset(), Theme::reset());

    edge(indicator_row + 1, '╰', '╯', inner_width, &border);
    indicator_row + 2
}

/// `"lines 1-12 of 30 ↓"`, or an empty string when everything fits.
fn scroll_indicator(detail: &DetailView) -> String {
    if detail.total_lines <= detail.content_lines.len() {
        return String::new();
    }

    let first = detail.scroll + 1;
    let last = detail.scroll + detail.content_lines.len();
    let arrows = match (detail.scroll > 0, detail.has_more_below()) {
        (true, true) => " ↑↓",
        (true, false) => " ↑",
        (false, true) => " ↓",
        (false, false) => "",
    };
    format!("lines {first}-{last} of {}{arrows}", detail.total_lines)
}

fn edge(row: usize, left: char, right: char, inner_width: usize, border: &str) {
    position_cursor(row, DETAIL_MARGIN + 1);
    print!("{border}{left}{}{right}{}", "─".repeat(inner_width), Theme::reset());
}

fn boxed(row: usize, text: &str, style: &str, text_width: usize, border: &str) {
    let shown: String = text.chars().take(text_width).collect();
    let pad = text_width.saturating_sub(shown.chars().count());

    position_cursor(row, DETAIL_MARGIN + 1);
    print!("{border}│{} {style}{shown}{}", Theme::reset(), Theme::reset());
    print!("{} {border}│{}", " ".repeat(pad), Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(scroll: usize, shown: usize, total: usize) -> DetailView {
        DetailView {
            category: "Backend".to_string(),
            category_color: "#fbbf24".to_string(),
            title: "API Design Review".to_string(),
            description: vec![],
            content_lines: vec!["line".to_string(); shown],
            scroll,
            total_lines: total,
        }
    }

    #[test]
    fn indicator_hidden_when_content_fits() {
        assert_eq!(scroll_indicator(&detail(0, 5, 5)), "");
    }

    #[test]
    fn indicator_shows_range_and_direction() {
        assert_eq!(scroll_indicator(&detail(0, 10, 30)), "lines 1-10 of 30 ↓");
        assert_eq!(scroll_indicator(&detail(10, 10, 30)), "lines 11-20 of 30 ↑↓");
        assert_eq!(scroll_indicator(&detail(20, 10, 30)), "lines 21-30 of 30 ↑");
    }
}
