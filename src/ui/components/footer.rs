use crate::ui::helpers::render_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered on `row`.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    render_centered(row, &footer.keybindings, &Theme::fg(&theme.colors.text_dim), cols);
    row + 1
}
