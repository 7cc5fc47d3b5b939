//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the browsing session: the
//! catalog, the live query, the page and cursor, the open record and the copy
//! feedback. The filtered set and the visible page are never stored; they are
//! derived from the catalog and query on demand, so they cannot go stale.
//!
//! # Invariants
//!
//! - `1 <= current_page <= total_pages` after every mutation
//! - Changing the search text or category resets `current_page` to 1 and the
//!   cursor to 0 in the same call
//! - `cursor` is relative to the current page and stays inside it

use super::actions::Action;
use super::feedback::CopyFeedback;
use super::modes::{InputMode, Selection};
use crate::catalog::{self, clamp_page, paginate, total_pages, Catalog};
use crate::clipboard::CopyOutcome;
use crate::domain::{CategoryFilter, Prompt, PromptId, PromptfolioError, Query, Result};
use crate::ui::helpers::{truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, CategoryChip, DetailView, EmptyState, FatalError, FooterInfo, HeaderInfo,
    PaginationInfo, SearchBarInfo, SummaryInfo, ToastInfo, UIViewModel,
};
use std::collections::HashMap;
use std::time::Duration;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Rows used by the list screen around the cards: header, border, chips,
/// spacer, 3-line search box, summary, border, pagination, border, footer.
const LIST_CHROME_ROWS: usize = 12;
/// Each card is a title line and a description line.
pub const CARD_HEIGHT: usize = 2;

/// Horizontal margin around the detail overlay.
pub const DETAIL_MARGIN: usize = 2;
/// Rows of the detail overlay not used by content.
const DETAIL_CHROME_ROWS: usize = 13;
/// Description lines shown in the detail overlay.
const DETAIL_DESCRIPTION_LINES: usize = 2;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Validated dataset. Empty until the worker delivers a file catalog.
    pub catalog: Catalog,

    /// Search text and category.
    pub query: Query,

    /// 1-based page number.
    pub current_page: usize,

    /// Index of the highlighted card within the current page.
    pub cursor: usize,

    /// Records per page, at least 1.
    pub page_size: usize,

    pub input_mode: InputMode,

    /// Record open in the detail overlay.
    pub selection: Selection,

    pub feedback: CopyFeedback,

    pub theme: Theme,

    /// Set when the dataset could not be loaded; the UI shows only this.
    pub load_error: Option<String>,

    /// `true` while waiting for the worker to deliver the dataset.
    pub loading: bool,

    /// Dataset file the worker reads; `None` for the bundled library.
    pub catalog_path: Option<String>,

    next_request_id: u64,

    /// Clipboard writes in flight, by request id.
    pending_copies: HashMap<u64, PromptId>,

    /// Last rendered `(rows, cols)`, used to bound detail scrolling.
    viewport: (usize, usize),
}

impl AppState {
    /// Creates state browsing `catalog` with default page size and feedback duration.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        Self {
            catalog,
            query: Query::default(),
            current_page: 1,
            cursor: 0,
            page_size: DEFAULT_PAGE_SIZE,
            input_mode: InputMode::Normal,
            selection: Selection::Closed,
            feedback: CopyFeedback::default(),
            theme,
            load_error: None,
            loading: false,
            catalog_path: None,
            next_request_id: 1,
            pending_copies: HashMap::new(),
            viewport: (24, 80),
        }
    }

    /// Sets the page size; zero is treated as one.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.settle();
        self
    }

    #[must_use]
    pub fn with_feedback_duration(mut self, duration: Duration) -> Self {
        self.feedback = CopyFeedback::new(duration);
        self
    }

    /// Waits for `path` to be delivered by the worker instead of browsing the
    /// current catalog.
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = Some(path.into());
        self.loading = true;
        self
    }

    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        self.load_error.is_some()
    }

    /// Records the pane size of the latest render.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = (rows, cols);
    }

    // ----- derived data -----

    /// Records matching the current query, in catalog order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Prompt> {
        catalog::filter(
            self.catalog.all_records(),
            &self.query.search_text,
            &self.query.category,
        )
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page_size)
    }

    /// Record under the cursor on the current page.
    #[must_use]
    pub fn record_under_cursor(&self) -> Option<&Prompt> {
        let filtered = self.filtered();
        let page = paginate(&filtered, self.page_size, self.current_page);
        page.items.get(self.cursor).copied()
    }

    /// Currently open record, if it exists in the catalog.
    #[must_use]
    pub fn open_record(&self) -> Option<&Prompt> {
        self.selection.open_id().and_then(|id| self.catalog.get(id))
    }

    // ----- query -----

    /// Replaces the search text. Returns `true` if it changed.
    pub fn set_search_text(&mut self, text: &str) -> bool {
        if self.query.search_text == text {
            return false;
        }
        self.query.search_text = text.to_string();
        self.reset_paging();
        true
    }

    pub fn push_search_char(&mut self, c: char) {
        self.query.search_text.push(c);
        self.reset_paging();
    }

    /// Removes the last char of the search text. Returns `true` if one was removed.
    pub fn pop_search_char(&mut self) -> bool {
        if self.query.search_text.pop().is_none() {
            return false;
        }
        self.reset_paging();
        true
    }

    pub fn clear_search(&mut self) -> bool {
        self.set_search_text("")
    }

    /// Switches the category filter. Returns `true` if it changed.
    pub fn set_category(&mut self, category: CategoryFilter) -> bool {
        if self.query.category == category {
            return false;
        }
        tracing::debug!(category = %category.label(), "category changed");
        self.query.category = category;
        self.reset_paging();
        true
    }

    /// Moves to the next (or previous) label of the catalog's category list, wrapping.
    pub fn cycle_category(&mut self, forward: bool) -> bool {
        let categories = self.catalog.categories();
        if categories.is_empty() {
            return false;
        }

        let current = categories
            .iter()
            .position(|label| label == self.query.category.label())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % categories.len()
        } else {
            (current + categories.len() - 1) % categories.len()
        };

        let label = categories[next].clone();
        self.set_category(CategoryFilter::from_label(&label))
    }

    /// Back to the first page and first card; called whenever the query changes.
    fn reset_paging(&mut self) {
        self.current_page = 1;
        self.cursor = 0;
    }

    /// Clamps page and cursor into the bounds of the current filtered set.
    pub fn settle(&mut self) {
        let filtered = self.filtered();
        let page = paginate(&filtered, self.page_size, self.current_page);
        let page_len = page.items.len();
        let effective = page.effective_page;

        self.current_page = effective;
        self.cursor = self.cursor.min(page_len.saturating_sub(1));
    }

    // ----- paging and cursor -----

    /// Jumps to a 1-based page, clamped. Returns `true` if the page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let target = clamp_page(page, self.total_pages());
        if target == self.current_page {
            return false;
        }
        self.current_page = target;
        self.cursor = 0;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    fn page_len(&self) -> usize {
        let filtered = self.filtered();
        paginate(&filtered, self.page_size, self.current_page).items.len()
    }

    /// Moves the cursor down within the page, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        let len = self.page_len();
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % len;
    }

    /// Moves the cursor up within the page, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        let len = self.page_len();
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }

    // ----- selection -----

    /// Opens a record by id. Unknown ids are ignored.
    pub fn open(&mut self, id: &PromptId) -> bool {
        if self.catalog.get(id).is_none() {
            tracing::debug!(prompt_id = %id, "ignoring open for unknown prompt");
            return false;
        }
        tracing::debug!(prompt_id = %id, "opening prompt");
        self.selection.open(id.clone());
        true
    }

    pub fn open_selected(&mut self) -> bool {
        let Some(id) = self.record_under_cursor().map(|record| record.id.clone()) else {
            return false;
        };
        self.open(&id)
    }

    /// Closes the detail overlay. Returns `true` if one was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.selection.is_open();
        self.selection.close();
        was_open
    }

    pub fn scroll_detail_down(&mut self) -> bool {
        let scroll = self.selection.scroll();
        let target = (scroll + 1).min(self.max_detail_scroll());
        self.selection.set_scroll(target);
        target != scroll
    }

    pub fn scroll_detail_up(&mut self) -> bool {
        let scroll = self.selection.scroll();
        self.selection.set_scroll(scroll.saturating_sub(1));
        scroll > 0
    }

    fn max_detail_scroll(&self) -> usize {
        let Some(record) = self.open_record() else {
            return 0;
        };
        let (rows, cols) = self.viewport;
        let (width, visible) = detail_viewport(rows, cols);
        wrap_text(&record.content, width).len().saturating_sub(visible)
    }

    // ----- clipboard -----

    /// Starts copying a record's content.
    ///
    /// Returns the clipboard action to execute, or `None` for an unknown id.
    pub fn begin_copy(&mut self, id: &PromptId) -> Option<Action> {
        let text = self.catalog.get(id)?.content.clone();

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.pending_copies.insert(request_id, id.clone());

        tracing::debug!(prompt_id = %id, request_id = request_id, bytes = text.len(), "copy requested");
        Some(Action::WriteClipboard { request_id, text })
    }

    /// Applies the outcome of a clipboard write.
    ///
    /// On success shows the feedback and returns the expiry timer to schedule.
    /// Failures are logged and change nothing else.
    pub fn finish_copy(&mut self, request_id: u64, outcome: &CopyOutcome) -> Option<Action> {
        let Some(id) = self.pending_copies.remove(&request_id) else {
            tracing::debug!(request_id = request_id, "ignoring unknown clipboard result");
            return None;
        };

        match outcome {
            CopyOutcome::Copied => {
                let after = self.feedback.trigger();
                tracing::debug!(prompt_id = %id, "copied to clipboard");
                Some(Action::ScheduleFeedbackExpiry {
                    seconds: after.as_secs_f64(),
                })
            }
            CopyOutcome::Failed(reason) => {
                tracing::warn!(prompt_id = %id, reason = %reason, "clipboard write failed");
                None
            }
        }
    }

    /// Handles one elapsed feedback timer. Returns `true` if the feedback was hidden.
    pub fn expire_feedback(&mut self) -> bool {
        self.feedback.expire_next()
    }

    // ----- loading -----

    /// Validates and installs a dataset delivered by a loader.
    ///
    /// # Errors
    ///
    /// Returns the validation error; the state is then fatal.
    pub fn load_catalog(&mut self, prompts: Vec<Prompt>) -> Result<()> {
        match Catalog::new(prompts) {
            Ok(catalog) => {
                tracing::debug!(
                    count = catalog.len(),
                    categories = catalog.categories().len(),
                    "catalog loaded"
                );
                self.catalog = catalog;
                self.loading = false;
                self.load_error = None;
                if self
                    .selection
                    .open_id()
                    .is_some_and(|id| self.catalog.get(id).is_none())
                {
                    self.selection.close();
                }
                self.settle();
                Ok(())
            }
            Err(e) => {
                self.fail_load(&e);
                Err(e)
            }
        }
    }

    /// Puts the state into the fatal "dataset unusable" mode.
    pub fn fail_load(&mut self, error: &PromptfolioError) {
        tracing::error!(error = %error, malformed = error.is_dataset_error(), "failed to load prompt catalog");
        self.load_error = Some(error.to_string());
        self.loading = false;
        self.selection.close();
        self.input_mode = InputMode::Normal;
    }

    // ----- view model -----

    /// Computes the view model for a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", rows = rows, cols = cols).entered();

        let filtered = self.filtered();
        let page = paginate(&filtered, self.page_size, self.current_page);

        if let Some(message) = &self.load_error {
            return UIViewModel {
                header: self.compute_header(0),
                categories: Vec::new(),
                search_bar: self.compute_search_bar(),
                summary: self.compute_summary(0),
                cards: Vec::new(),
                pagination: None,
                empty_state: None,
                detail: None,
                toast: None,
                footer: FooterInfo {
                    keybindings: "q: quit".to_string(),
                },
                fatal: Some(FatalError {
                    title: "Could not load prompts".to_string(),
                    message: message.clone(),
                }),
            };
        }

        let slots = (rows.saturating_sub(LIST_CHROME_ROWS) / CARD_HEIGHT).max(1);
        let (window_start, window_end) = card_window(page.items.len(), self.cursor, slots);

        let cards = page.items[window_start..window_end]
            .iter()
            .enumerate()
            .map(|(offset, record)| self.compute_card(record, window_start + offset == self.cursor, cols))
            .collect();

        let pagination = page.has_multiple_pages().then(|| PaginationInfo {
            current: page.effective_page,
            total: page.total_pages,
            has_previous: page.effective_page > 1,
            has_next: page.effective_page < page.total_pages,
        });

        UIViewModel {
            header: self.compute_header(filtered.len()),
            categories: self.compute_chips(),
            search_bar: self.compute_search_bar(),
            summary: self.compute_summary(filtered.len()),
            cards,
            pagination,
            empty_state: self.compute_empty_state(filtered.is_empty()),
            detail: self.compute_detail(rows, cols),
            toast: self.feedback.is_visible().then(|| ToastInfo {
                message: "Copied to clipboard!".to_string(),
            }),
            footer: self.compute_footer(),
            fatal: None,
        }
    }

    fn compute_header(&self, filtered_len: usize) -> HeaderInfo {
        let total = self.catalog.len();
        let counts = if self.loading {
            "loading…".to_string()
        } else if self.is_fatal() {
            String::new()
        } else if filtered_len == total {
            format!("{total} prompts")
        } else {
            format!("{filtered_len} of {total} prompts")
        };

        HeaderInfo {
            title: "Promptfolio".to_string(),
            counts,
        }
    }

    fn compute_chips(&self) -> Vec<CategoryChip> {
        let active = self.query.category.label();
        self.catalog
            .categories()
            .iter()
            .map(|label| CategoryChip {
                label: label.clone(),
                is_active: label == active,
            })
            .collect()
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.query.search_text.clone(),
            is_focused: self.input_mode == InputMode::Search,
            placeholder: "Search prompts (e.g. Startup, React, Pitch Deck...)".to_string(),
        }
    }

    fn compute_summary(&self, count: usize) -> SummaryInfo {
        SummaryInfo {
            category: self.query.category.label().to_string(),
            count,
        }
    }

    fn compute_card(&self, record: &Prompt, is_selected: bool, cols: usize) -> CardItem {
        let badge_width = record.category.chars().count() + 3;
        let title = truncate(&record.title, cols.saturating_sub(badge_width + 4));
        // A cut title ends in an ellipsis that must stay unhighlighted.
        let visible = if title == record.title {
            title.chars().count()
        } else {
            title.chars().count().saturating_sub(1)
        };

        let title_highlights = catalog::match_ranges(&record.title, &self.query.search_text)
            .into_iter()
            .filter(|&(start, _)| start < visible)
            .map(|(start, end)| (start, end.min(visible)))
            .collect();

        let tags: Vec<String> = record.tags.iter().take(2).map(|tag| format!("#{tag}")).collect();
        let tags_width: usize = tags.iter().map(|t| t.chars().count() + 1).sum();
        let description = truncate(&record.description, cols.saturating_sub(tags_width + 6));

        CardItem {
            category: record.category.clone(),
            category_color: self.theme.category_color(&record.category).to_string(),
            title,
            title_highlights,
            description,
            tags,
            is_selected,
        }
    }

    fn compute_empty_state(&self, nothing_matches: bool) -> Option<EmptyState> {
        if self.loading {
            return Some(EmptyState {
                message: "Loading prompts…".to_string(),
                subtitle: "Reading the prompt library".to_string(),
            });
        }

        nothing_matches.then(|| EmptyState {
            message: "No prompts found".to_string(),
            subtitle: "Try a different category or search term.".to_string(),
        })
    }

    fn compute_detail(&self, rows: usize, cols: usize) -> Option<DetailView> {
        let record = self.open_record()?;
        let (width, visible) = detail_viewport(rows, cols);

        let wrapped = wrap_text(&record.content, width);
        let total_lines = wrapped.len();
        let scroll = self.selection.scroll().min(total_lines.saturating_sub(visible));
        let content_lines = wrapped.into_iter().skip(scroll).take(visible).collect();

        let mut description = wrap_text(&record.description, width);
        if description.len() > DETAIL_DESCRIPTION_LINES {
            description.truncate(DETAIL_DESCRIPTION_LINES);
            if let Some(last) = description.last_mut() {
                *last = truncate(&format!("{last} …"), width);
            }
        }

        Some(DetailView {
            category: record.category.clone(),
            category_color: self.theme.category_color(&record.category).to_string(),
            title: truncate(&record.title, width),
            description,
            content_lines,
            scroll,
            total_lines,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.selection.is_open() {
            "y: copy  Enter: copy & close  j/k: scroll  Esc/q: close"
        } else {
            match self.input_mode {
                InputMode::Search => "Type to filter  Backspace: delete  Ctrl+u: clear  Enter/Esc: done",
                InputMode::Normal => {
                    "j/k: move  h/l: page  Tab/c: category  /: search  Enter: open  y: copy  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Content wrap width and visible content lines of the detail overlay.
#[must_use]
pub fn detail_viewport(rows: usize, cols: usize) -> (usize, usize) {
    let width = cols.saturating_sub(DETAIL_MARGIN * 2 + 4).max(10);
    let visible = rows.saturating_sub(DETAIL_CHROME_ROWS).max(1);
    (width, visible)
}

/// Range of card indices to show when the page has more cards than `slots`,
/// keeping the cursor roughly centered.
fn card_window(len: usize, cursor: usize, slots: usize) -> (usize, usize) {
    if len <= slots {
        return (0, len);
    }

    let mut start = cursor.saturating_sub(slots / 2);
    let end = (start + slots).min(len);
    if end - start < slots {
        start = end.saturating_sub(slots);
    }
    (start, end)
}
