//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only entry point that mutates [`AppState`] in
//! response to the outside world. It returns whether the UI must re-render and
//! the side effects to run, leaving host calls to the plugin shim.
//!
//! # Event Types
//!
//! - **Navigation**: `CursorDown`, `CursorUp`, `NextPage`, `PreviousPage`, `GoToPage`
//! - **Query**: `NextCategory`, `PreviousCategory`, `SelectCategory`, `SearchMode`,
//!   `ExitSearch`, `ClearSearch`, `Char`, `Backspace`
//! - **Selection**: `OpenSelected`, `Open`, `Close`, `ScrollDetailDown`, `ScrollDetailUp`
//! - **Clipboard**: `CopySelected`, `Copy`, `CopyAndClose`, `ClipboardResult`,
//!   `FeedbackTimerElapsed`
//! - **System**: `PermissionsGranted`, `PermissionsDenied`, `WorkerResponse`, `CloseFocus`
//!
//! While the dataset is in a fatal state only `CloseFocus` and worker
//! responses are processed.

use crate::app::modes::InputMode;
use crate::app::{Action, AppState};
use crate::clipboard::CopyOutcome;
use crate::domain::error::Result;
use crate::domain::{CategoryFilter, PromptId, PromptfolioError};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, host callbacks, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Cursor to the next card on the page (wraps).
    CursorDown,
    /// Cursor to the previous card on the page (wraps).
    CursorUp,
    NextPage,
    PreviousPage,
    /// Jump to a 1-based page, clamped.
    GoToPage(usize),

    NextCategory,
    PreviousCategory,
    /// Select a category by label; `"All"` selects everything.
    SelectCategory(String),

    /// Start editing the search text.
    SearchMode,
    /// Stop editing the search text, keeping it.
    ExitSearch,
    /// Empty the search text.
    ClearSearch,
    /// Append a character to the search text (search mode only).
    Char(char),
    /// Delete the last character of the search text (search mode only).
    Backspace,

    /// Open the card under the cursor.
    OpenSelected,
    Open(PromptId),
    Close,
    ScrollDetailDown,
    ScrollDetailUp,

    /// Copy the open record, or the card under the cursor.
    CopySelected,
    Copy(PromptId),
    /// Copy the open record and close the overlay without waiting for the result.
    CopyAndClose,
    /// A clipboard write finished.
    ClipboardResult {
        request_id: u64,
        outcome: CopyOutcome,
    },
    /// One feedback expiry timer fired.
    FeedbackTimerElapsed,

    /// The host granted the requested permissions.
    PermissionsGranted,
    /// The host refused the requested permissions.
    PermissionsDenied,

    WorkerResponse(WorkerResponse),

    /// Hide the plugin.
    CloseFocus,
}

impl Event {
    /// Events still honored while the dataset is unusable.
    const fn allowed_when_fatal(&self) -> bool {
        matches!(self, Self::CloseFocus | Self::WorkerResponse(_))
    }
}

/// Processes an event and returns `(should_render, actions)`.
///
/// # Errors
///
/// Currently infallible for every event; the `Result` leaves room for
/// handlers that must report failures to the shim.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.is_fatal() && !event.allowed_when_fatal() {
        tracing::debug!("ignoring event in fatal state");
        return Ok((false, vec![]));
    }

    match event {
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::NextPage => Ok((state.next_page(), vec![])),
        Event::PreviousPage => Ok((state.previous_page(), vec![])),
        Event::GoToPage(page) => Ok((state.go_to_page(*page), vec![])),

        Event::NextCategory => Ok((state.cycle_category(true), vec![])),
        Event::PreviousCategory => Ok((state.cycle_category(false), vec![])),
        Event::SelectCategory(label) => {
            Ok((state.set_category(CategoryFilter::from_label(label)), vec![]))
        }

        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.query.search_text, "leaving search mode");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ClearSearch => Ok((state.clear_search(), vec![])),
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.push_search_char(*c);
            tracing::trace!(query = %state.query.search_text, "search text updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            Ok((state.pop_search_char(), vec![]))
        }

        Event::OpenSelected => Ok((state.open_selected(), vec![])),
        Event::Open(id) => Ok((state.open(id), vec![])),
        Event::Close => Ok((state.close(), vec![])),
        Event::ScrollDetailDown => Ok((state.scroll_detail_down(), vec![])),
        Event::ScrollDetailUp => Ok((state.scroll_detail_up(), vec![])),

        Event::CopySelected => {
            let target = state
                .selection
                .open_id()
                .cloned()
                .or_else(|| state.record_under_cursor().map(|record| record.id.clone()));

            let Some(id) = target else {
                tracing::debug!("nothing to copy");
                return Ok((false, vec![]));
            };
            Ok((false, state.begin_copy(&id).into_iter().collect()))
        }
        Event::Copy(id) => Ok((false, state.begin_copy(id).into_iter().collect())),
        Event::CopyAndClose => {
            let Some(id) = state.selection.open_id().cloned() else {
                return Ok((false, vec![]));
            };
            let actions = state.begin_copy(&id).into_iter().collect();
            state.close();
            Ok((true, actions))
        }
        Event::ClipboardResult { request_id, outcome } => {
            let action = state.finish_copy(*request_id, outcome);
            let render = action.is_some();
            Ok((render, action.into_iter().collect()))
        }
        Event::FeedbackTimerElapsed => Ok((state.expire_feedback(), vec![])),

        Event::PermissionsGranted => {
            let Some(path) = state.catalog_path.as_ref().filter(|_| state.loading) else {
                return Ok((false, vec![]));
            };
            tracing::debug!(path = %path, "requesting dataset from worker");
            Ok((false, vec![Action::PostToWorker(WorkerMessage::load_catalog(path.clone()))]))
        }
        Event::PermissionsDenied => {
            if state.catalog_path.is_none() || !state.loading {
                return Ok((false, vec![]));
            }
            state.fail_load(&PromptfolioError::Worker(
                "permission to read the prompts file was denied".to_string(),
            ));
            Ok((true, vec![]))
        }

        Event::WorkerResponse(response) => match response {
            WorkerResponse::CatalogLoaded { prompts } => {
                tracing::debug!(count = prompts.len(), "worker delivered dataset");
                // Validation errors leave the state fatal; the error is already logged.
                let _ = state.load_catalog(prompts.clone());
                Ok((true, vec![]))
            }
            WorkerResponse::Error { message } => {
                if state.loading {
                    state.fail_load(&PromptfolioError::Worker(message.clone()));
                } else {
                    tracing::error!("Worker error: {}", message);
                }
                Ok((true, vec![]))
            }
        },

        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::Prompt;
    use crate::ui::Theme;

    fn scenario() -> AppState {
        let catalog = Catalog::new(vec![
            Prompt::new("A", "Hooks guide", "Frontend", "use effects").with_tags(["react"]),
            Prompt::new("B", "Endpoint design", "Backend", "design routes").with_tags(["api"]),
            Prompt::new("C", "Layout tricks", "Frontend", "grid and flex").with_tags(["css"]),
        ])
        .unwrap();
        AppState::new(catalog, Theme::default())
    }

    fn visible_ids(state: &AppState) -> Vec<String> {
        state.filtered().iter().map(|p| p.id.to_string()).collect()
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn category_and_search_filter_scenario() {
        let mut state = scenario();
        send(&mut state, Event::SelectCategory("Frontend".into()));
        assert_eq!(visible_ids(&state), ["A", "C"]);

        send(&mut state, Event::SelectCategory("All".into()));
        send(&mut state, Event::SearchMode);
        for c in "api".chars() {
            send(&mut state, Event::Char(c));
        }
        assert_eq!(visible_ids(&state), ["B"]);

        send(&mut state, Event::ClearSearch);
        for c in "zzz".chars() {
            send(&mut state, Event::Char(c));
        }
        assert!(visible_ids(&state).is_empty());
    }

    #[test]
    fn chars_outside_search_mode_are_ignored() {
        let mut state = scenario();
        let (render, _) = send(&mut state, Event::Char('x'));
        assert!(!render);
        assert!(state.query.search_text.is_empty());
    }

    #[test]
    fn exit_search_keeps_query() {
        let mut state = scenario();
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('g'));
        send(&mut state, Event::ExitSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.query.search_text, "g");
    }

    #[test]
    fn open_copy_close_keeps_feedback_until_timer() {
        let mut state = scenario();
        send(&mut state, Event::Open(PromptId::new("A")));
        assert!(state.selection.is_open());

        let (_, actions) = send(&mut state, Event::CopySelected);
        let [Action::WriteClipboard { request_id, text }] = actions.as_slice() else {
            panic!("unexpected actions: {actions:?}");
        };
        assert_eq!(text, "use effects");

        let (_, actions) = send(
            &mut state,
            Event::ClipboardResult { request_id: *request_id, outcome: CopyOutcome::Copied },
        );
        assert_eq!(actions, vec![Action::ScheduleFeedbackExpiry { seconds: 2.0 }]);

        send(&mut state, Event::Close);
        assert!(!state.selection.is_open());
        assert!(state.feedback.is_visible());

        let (render, _) = send(&mut state, Event::FeedbackTimerElapsed);
        assert!(render);
        assert!(!state.feedback.is_visible());
    }

    #[test]
    fn copy_and_close_closes_even_when_copy_fails() {
        let mut state = scenario();
        send(&mut state, Event::Open(PromptId::new("B")));

        let (render, actions) = send(&mut state, Event::CopyAndClose);
        assert!(render);
        assert!(!state.selection.is_open());
        let [Action::WriteClipboard { request_id, .. }] = actions.as_slice() else {
            panic!("unexpected actions: {actions:?}");
        };

        let (_, actions) = send(
            &mut state,
            Event::ClipboardResult {
                request_id: *request_id,
                outcome: CopyOutcome::Failed("exit 127".into()),
            },
        );
        assert!(actions.is_empty());
        assert!(!state.feedback.is_visible());
        assert!(!state.selection.is_open());
    }

    #[test]
    fn copy_selected_uses_cursor_in_list() {
        let mut state = scenario();
        send(&mut state, Event::CursorDown);
        let (_, actions) = send(&mut state, Event::CopySelected);
        assert!(matches!(
            actions.as_slice(),
            [Action::WriteClipboard { text, .. }] if text == "design routes"
        ));
    }

    #[test]
    fn fatal_state_only_allows_quit() {
        let mut state = AppState::new(Catalog::default(), Theme::default());
        state.loading = true;
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::Error { message: "boom".into() }),
        );
        assert!(state.is_fatal());

        assert_eq!(send(&mut state, Event::SearchMode), (false, vec![]));
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(send(&mut state, Event::CloseFocus), (false, vec![Action::CloseFocus]));
    }

    #[test]
    fn worker_dataset_replaces_loading_state() {
        let mut state = AppState::new(Catalog::default(), Theme::default());
        state.loading = true;

        let prompts = vec![Prompt::new("x", "Title", "Startup", "text")];
        let (render, _) = send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::CatalogLoaded { prompts }),
        );
        assert!(render);
        assert!(!state.loading);
        assert_eq!(state.catalog.categories(), &["All", "Startup"]);
    }

    #[test]
    fn empty_worker_dataset_is_fatal() {
        let mut state = AppState::new(Catalog::default(), Theme::default());
        state.loading = true;
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::CatalogLoaded { prompts: vec![] }),
        );
        assert_eq!(state.load_error.as_deref(), Some("Dataset error: no prompts found"));
    }

    #[test]
    fn granted_permissions_request_the_dataset_file() {
        let mut state =
            AppState::new(Catalog::default(), Theme::default()).with_catalog_path("/host/prompts.json");

        let (render, actions) = send(&mut state, Event::PermissionsGranted);

        assert!(!render);
        match actions.as_slice() {
            [Action::PostToWorker(WorkerMessage::LoadCatalog { path, .. })] => {
                assert_eq!(path, "/host/prompts.json");
            }
            other => panic!("expected one worker request, got {other:?}"),
        }
    }

    #[test]
    fn granted_permissions_with_bundled_catalog_do_nothing() {
        let mut state = scenario();
        assert_eq!(send(&mut state, Event::PermissionsGranted), (false, vec![]));
    }

    #[test]
    fn granted_permissions_after_delivery_do_not_reload() {
        let mut state =
            AppState::new(Catalog::default(), Theme::default()).with_catalog_path("/host/prompts.json");
        let prompts = vec![Prompt::new("x", "Title", "Startup", "text")];
        send(&mut state, Event::WorkerResponse(WorkerResponse::CatalogLoaded { prompts }));

        assert_eq!(send(&mut state, Event::PermissionsGranted), (false, vec![]));
    }

    #[test]
    fn denied_permissions_are_fatal_only_for_a_dataset_file() {
        let mut state = scenario();
        assert_eq!(send(&mut state, Event::PermissionsDenied), (false, vec![]));
        assert!(!state.is_fatal());

        let mut state =
            AppState::new(Catalog::default(), Theme::default()).with_catalog_path("/host/prompts.json");
        let (render, _) = send(&mut state, Event::PermissionsDenied);
        assert!(render);
        assert!(!state.loading);
        assert_eq!(
            state.load_error.as_deref(),
            Some("Worker communication error: permission to read the prompts file was denied")
        );
    }
}
