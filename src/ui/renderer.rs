//! Top-level rendering entry point.
//!
//! Computes the view model and picks the screen: the fatal error screen if
//! loading failed, the detail overlay while a prompt is open, otherwise the
//! browse list.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout for a pane of `rows` x `cols`.
///
/// ```
/// use promptfolio::app::AppState;
/// use promptfolio::catalog::Catalog;
/// use promptfolio::ui::{render, Theme};
///
/// let state = AppState::new(Catalog::default(), Theme::default());
/// render(&state, 24, 80);
/// ```
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(fatal) = &vm.fatal {
        components::render_fatal_screen(vm, fatal, theme, rows, cols);
    } else if let Some(detail) = &vm.detail {
        components::render_detail_screen(vm, detail, theme, rows, cols);
    } else {
        components::render_list_screen(vm, theme, rows, cols);
    }
}
