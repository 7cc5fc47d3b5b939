//! Summary line with the copy toast.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SummaryInfo, ToastInfo};

/// Renders `" All • 25 prompts"` on the left of `row` and, while feedback is
/// visible, the toast on the right.
pub fn render_summary(row: usize, summary: &SummaryInfo, toast: Option<&ToastInfo>, theme: &Theme, cols: usize) -> usize {
    let noun = if summary.count == 1 { "prompt" } else { "prompts" };
    let text = format!(" {} • {} {noun}", summary.category, summary.count);

    position_cursor(row, 1);
    print!("{}{}{text}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal), Theme::reset());

    if let Some(toast) = toast {
        render_toast_at(row, toast, theme, cols, text.chars().count());
    }
    row + 1
}

/// Renders the toast right-aligned on `row` unless it would overlap the
/// first `reserved` columns.
pub fn render_toast_at(row: usize, toast: &ToastInfo, theme: &Theme, cols: usize, reserved: usize) {
    let label = format!(" ✓ {} ", toast.message);
    let width = label.chars().count();
    if reserved + width + 1 > cols {
        return;
    }

    position_cursor(row, cols - width);
    print!(
        "{}{}{}{label}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.toast_fg),
        Theme::bg(&theme.colors.toast_bg),
        Theme::reset()
    );
}
