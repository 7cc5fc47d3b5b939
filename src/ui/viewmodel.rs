//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: truncated strings,
//! resolved colors, highlight ranges and layout decisions.

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Category chips in catalog order, `"All"` first.
    pub categories: Vec<CategoryChip>,

    pub search_bar: SearchBarInfo,

    pub summary: SummaryInfo,

    /// Cards for the visible slice of the current page.
    pub cards: Vec<CardItem>,

    /// Present only when there is more than one page.
    pub pagination: Option<PaginationInfo>,

    /// Present when the filtered set is empty or the catalog is still loading.
    pub empty_state: Option<EmptyState>,

    /// Present while a record is open.
    pub detail: Option<DetailView>,

    /// Present while copy feedback is visible.
    pub toast: Option<ToastInfo>,

    pub footer: FooterInfo,

    /// Replaces everything else when the dataset failed to load.
    pub fatal: Option<FatalError>,
}

/// Title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// E.g. `"18 prompts"` or `"3 of 18 prompts"`.
    pub counts: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub label: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently edit the query.
    pub is_focused: bool,
    /// Shown when the query is empty.
    pub placeholder: String,
}

/// The `"All • 25 prompts"` line above the cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryInfo {
    pub category: String,
    pub count: usize,
}

/// One prompt in the card list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub category: String,
    /// Hex color of the category badge.
    pub category_color: String,
    pub title: String,
    /// Char ranges of the title matching the search text.
    pub title_highlights: Vec<(usize, usize)>,
    pub description: String,
    /// At most two tags, already formatted as `#tag`.
    pub tags: Vec<String>,
    pub is_selected: bool,
}

/// `‹ 1 2 [3] ›`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Detail overlay for the open record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub category: String,
    pub category_color: String,
    pub title: String,
    pub description: Vec<String>,
    /// Wrapped content lines currently in view.
    pub content_lines: Vec<String>,
    /// Index of the first visible content line.
    pub scroll: usize,
    /// Total number of wrapped content lines.
    pub total_lines: usize,
}

impl DetailView {
    #[must_use]
    pub fn has_more_below(&self) -> bool {
        self.scroll + self.content_lines.len() < self.total_lines
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastInfo {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalError {
    pub title: String,
    pub message: String,
}
