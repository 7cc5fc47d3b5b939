//! Centered message blocks: the empty card list and the load failure screen.

use crate::ui::helpers::{render_centered, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, FatalError};

/// Renders the empty state as two centered lines starting at `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.empty_state_fg));
    render_centered(row, &empty.message, &message_style, cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_centered(row + 1, &empty.subtitle, &subtitle_style, cols);
}

/// Renders the load error centered in the rows between `top` and `bottom`.
///
/// The message is wrapped and clipped to the available height.
pub fn render_fatal(top: usize, bottom: usize, fatal: &FatalError, theme: &Theme, cols: usize) {
    let height = bottom.saturating_sub(top);
    let mut lines = wrap_text(&fatal.message, cols.saturating_sub(4).max(10));
    lines.truncate(height.saturating_sub(2));

    let block = lines.len() + 2;
    let start = top + height.saturating_sub(block) / 2;

    let title_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
    render_centered(start, &format!("✗ {}", fatal.title), &title_style, cols);

    let text_style = Theme::fg(&theme.colors.text_normal);
    for (offset, line) in lines.iter().enumerate() {
        render_centered(start + 2 + offset, line, &text_style, cols);
    }
}
