//! Title bar: product name on the left, record counts on the right.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row`, filling the full width.
///
/// ```text
///  Promptfolio                                         3 of 18 prompts
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {}", header.title);
    let counts = format!("{} ", header.counts);
    let used = title.chars().count() + counts.chars().count();

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}{}{title}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    if used <= cols {
        print!("{}", " ".repeat(cols - used));
        print!("{}{counts}", Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(title.chars().count())));
    }

    print!("{}", Theme::reset());
    row + 1
}
