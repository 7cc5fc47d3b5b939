//! Search input box.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin around the search box.
const SEARCH_BOX_MARGIN: usize = 1;

/// Renders the 3-line search box at `row`.
///
/// ```text
///  ┌──────────────────────────────────────┐
///  │ ⌕ react█                             │
///  └──────────────────────────────────────┘
/// ```
///
/// The border takes the accent color while the box has focus. An empty,
/// unfocused query shows the placeholder in the dim color.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = if search.is_focused {
        Theme::fg(&theme.colors.accent)
    } else {
        Theme::fg(&theme.colors.search_bar_border)
    };

    position_cursor(row, 1);
    print!("{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    let (text, color) = if search.query.is_empty() && !search.is_focused {
        (search.placeholder.as_str(), &theme.colors.text_dim)
    } else {
        (search.query.as_str(), &theme.colors.text_normal)
    };
    let cursor = if search.is_focused { "█" } else { "" };
    // Keep the tail of a long query visible while typing.
    let room = inner_width.saturating_sub(4);
    let shown: String = if search.is_focused && text.chars().count() > room {
        let skip = text.chars().count() - room;
        text.chars().skip(skip).collect()
    } else {
        truncate(text, room)
    };
    let line = format!(" ⌕ {shown}{cursor}");
    let padding = inner_width.saturating_sub(line.chars().count());

    position_cursor(row + 1, 1);
    print!("{margin}{border}│{}{}{line}", Theme::reset(), Theme::fg(color));
    print!("{}{border}│{}", " ".repeat(padding), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 3
}
