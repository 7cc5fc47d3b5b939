//! Page indicator shown under the card list.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders `‹ 1 2 [3] 4 ›` centered on `row`.
///
/// Falls back to `‹ 3 / 12 ›` when the full list of page numbers does not
/// fit. Arrows are dimmed at the first and last page.
pub fn render_pagination(row: usize, pagination: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let numbers: Vec<String> = (1..=pagination.total)
        .map(|page| {
            if page == pagination.current {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    let mut middle = numbers.join(" ");
    if middle.chars().count() + 4 > cols {
        middle = format!("{} / {}", pagination.current, pagination.total);
    }

    let width = middle.chars().count() + 4;
    position_cursor(row, 1);
    print!("{}", " ".repeat(cols.saturating_sub(width) / 2));

    print!("{}‹ ", arrow_color(pagination.has_previous, theme));
    print!("{}{middle}", Theme::fg(&theme.colors.text_normal));
    print!("{} ›{}", arrow_color(pagination.has_next, theme), Theme::reset());

    row + 1
}

fn arrow_color(enabled: bool, theme: &Theme) -> String {
    if enabled {
        Theme::fg(&theme.colors.accent)
    } else {
        Theme::fg(&theme.colors.text_dim)
    }
}
