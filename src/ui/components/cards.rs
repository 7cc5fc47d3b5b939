//! Prompt card list.
//!
//! Each card takes two rows:
//!
//! ```text
//! ▌ [Backend] API Design Review
//!     Review a REST API for consistency and ergonomics      #api #rest
//! ```
//!
//! The selected card gets the selection colors across both rows and a
//! marker in the accent color.

use crate::app::state::CARD_HEIGHT;
use crate::ui::helpers::{position_cursor, render_highlighted_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

pub fn render_cards(row: usize, cards: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

fn render_card(row: usize, card: &CardItem, theme: &Theme, cols: usize) -> usize {
    let base = base_style(card.is_selected, theme);

    position_cursor(row, 1);
    print!("{base}");
    if card.is_selected {
        print!("{}▌{base} ", Theme::fg(&theme.colors.accent));
    } else {
        print!("  ");
    }
    print!("{}[{}]{base} ", Theme::fg(&card.category_color), card.category);
    print!("{}", Theme::bold());
    render_highlighted_text(&card.title, &card.title_highlights, theme, &format!("{base}{}", Theme::bold()));
    print!("{}{base}", Theme::reset());

    let used = 2 + card.category.chars().count() + 3 + card.title.chars().count();
    print!("{}{}", " ".repeat(cols.saturating_sub(used)), Theme::reset());

    let tags = card.tags.join(" ");
    let tags_width = tags.chars().count();
    let description_width = card.description.chars().count();

    position_cursor(row + 1, 1);
    print!("{base}    {}{}", Theme::fg(&theme.colors.text_dim), card.description);
    let gap = cols.saturating_sub(4 + description_width + tags_width + 1);
    print!("{}{}{tags} ", " ".repeat(gap), Theme::fg(&theme.colors.accent));
    print!("{}", Theme::reset());

    row + CARD_HEIGHT
}

fn base_style(is_selected: bool, theme: &Theme) -> String {
    if is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    }
}
