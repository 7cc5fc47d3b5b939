//! Screen layouts assembled from component renderers.
//!
//! Every component takes the row to draw at and returns the next free row,
//! so a screen reads top to bottom.
//!
//! # Screens
//!
//! - [`render_list_screen`]: header, chips, search box, summary, cards,
//!   pagination, footer
//! - [`render_detail_screen`]: header and the detail overlay box
//! - [`render_fatal_screen`]: header and the load error
//!
//! Row budgets here must match the ones `AppState::compute_viewmodel` uses
//! to size the card window and the detail viewport.

mod cards;
mod categories;
mod detail;
mod empty;
mod footer;
mod header;
mod pagination;
mod search;
mod summary;

use crate::app::state::detail_viewport;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, FatalError, UIViewModel};

use cards::render_cards;
use categories::render_categories;
use detail::render_detail;
use empty::{render_empty_state, render_fatal};
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use summary::{render_summary, render_toast_at};

/// Draws a full-width horizontal rule and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

/// Renders the browse screen.
///
/// ```text
///  1      header
///  2      border
///  3      category chips
///  4      (spacer)
///  5-7    search box
///  8      summary + toast
///  9      border
///  10..   cards / empty state
///  rows-2 pagination
///  rows-1 border
///  rows   footer
/// ```
pub fn render_list_screen(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 1;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_categories(current_row, &vm.categories, theme, cols);
    current_row += 1;
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_summary(current_row, &vm.summary, vm.toast.as_ref(), theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let pagination_row = rows.saturating_sub(2);
    if let Some(empty) = &vm.empty_state {
        let middle = current_row + pagination_row.saturating_sub(current_row) / 2;
        render_empty_state(middle.saturating_sub(1).max(current_row), empty, theme, cols);
    } else {
        render_cards(current_row, &vm.cards, theme, cols);
    }

    if let Some(pagination) = &vm.pagination {
        render_pagination(pagination_row, pagination, theme, cols);
    }
    render_border(rows.saturating_sub(1), &theme.colors.border, cols);
    render_footer(rows, &vm.footer, theme, cols);
}

/// Renders the open prompt in place of the list.
///
/// ```text
///  1      header
///  2      border
///  3..    detail box (6 head rows, content, indicator, bottom border)
///  rows-2 toast
///  rows-1 border
///  rows   footer
/// ```
pub fn render_detail_screen(vm: &UIViewModel, detail: &DetailView, theme: &Theme, rows: usize, cols: usize) {
    let (_, visible) = detail_viewport(rows, cols);

    let mut current_row = 1;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_detail(current_row, detail, visible, theme, cols);

    if let Some(toast) = &vm.toast {
        render_toast_at(rows.saturating_sub(2), toast, theme, cols, 0);
    }
    render_border(rows.saturating_sub(1), &theme.colors.border, cols);
    render_footer(rows, &vm.footer, theme, cols);
}

/// Renders the load failure screen. Only quitting is possible from here.
pub fn render_fatal_screen(vm: &UIViewModel, fatal: &FatalError, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 1;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    render_fatal(current_row, rows.saturating_sub(1), fatal, theme, cols);
    render_border(rows.saturating_sub(1), &theme.colors.border, cols);
    render_footer(rows, &vm.footer, theme, cols);
}
