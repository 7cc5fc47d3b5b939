//! Category chip row.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CategoryChip;

/// Renders the chips left to right, ending with `…` when they overflow.
///
/// The active chip is drawn on the accent color; the others are plain labels.
pub fn render_categories(row: usize, chips: &[CategoryChip], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(" ");
    let mut used = 1;

    for chip in chips {
        let label = format!(" {} ", chip.label);
        let width = label.chars().count() + 1;
        if used + width > cols.saturating_sub(1) {
            print!("{}…{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
            break;
        }

        if chip.is_active {
            print!(
                "{}{}{}{label}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.chip_active_fg),
                Theme::bg(&theme.colors.accent),
                Theme::reset()
            );
        } else {
            print!("{}{label}{}", Theme::fg(&theme.colors.chip_fg), Theme::reset());
        }
        print!(" ");
        used += width;
    }

    row + 1
}
