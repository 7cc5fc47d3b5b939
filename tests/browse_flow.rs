//! End-to-end browsing session driven through `handle_event`.

use std::time::Duration;

use promptfolio::app::{handle_event, Action, AppState, Event, InputMode};
use promptfolio::catalog::Catalog;
use promptfolio::clipboard::CopyOutcome;
use promptfolio::domain::{Prompt, PromptId};
use promptfolio::worker::WorkerResponse;
use promptfolio::Theme;

fn library() -> Vec<Prompt> {
    vec![
        Prompt::new("landing", "Landing Page Copy", "Startup", "Write landing page copy for a SaaS product.")
            .with_tags(["marketing", "copy"]),
        Prompt::new("pitch", "Pitch Deck Outline", "Startup", "Outline a ten slide pitch deck.")
            .with_description("Seed round storytelling"),
        Prompt::new("hooks", "React Hooks Refactor", "Frontend", "Refactor class components to hooks.")
            .with_tags(["react"]),
        Prompt::new("a11y", "Accessibility Audit", "Frontend", "Audit a page for WCAG issues."),
        Prompt::new("api", "API Design Review", "Backend", "Review a REST API design."),
        Prompt::new("sql", "Query Optimizer", "Backend", "Explain and optimize a slow SQL query."),
        Prompt::new("ci", "CI Pipeline", "DevOps", "Design a CI pipeline with caching."),
    ]
}

fn session() -> AppState {
    let catalog = Catalog::new(library()).unwrap();
    AppState::new(catalog, Theme::default())
        .with_page_size(3)
        .with_feedback_duration(Duration::from_millis(500))
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

fn visible_ids(state: &AppState) -> Vec<String> {
    state.filtered().iter().map(|p| p.id.to_string()).collect()
}

fn copy_request(actions: &[Action]) -> (u64, String) {
    match actions {
        [Action::WriteClipboard { request_id, text }] => (*request_id, text.clone()),
        other => panic!("expected one clipboard write, got {other:?}"),
    }
}

#[test]
fn search_page_open_copy_and_expire() {
    let mut state = session();
    assert_eq!(state.total_pages(), 3);

    send(&mut state, Event::NextPage);
    send(&mut state, Event::NextPage);
    assert_eq!(state.current_page, 3);
    let (render, _) = send(&mut state, Event::NextPage);
    assert!(!render, "paging past the end is clamped");
    assert_eq!(state.current_page, 3);

    send(&mut state, Event::SearchMode);
    type_text(&mut state, "design");
    assert_eq!(state.current_page, 1, "query changes reset to the first page");
    assert_eq!(visible_ids(&state), ["api", "ci"]);

    send(&mut state, Event::ExitSearch);
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.query.search_text, "design");

    send(&mut state, Event::CursorDown);
    send(&mut state, Event::OpenSelected);
    assert_eq!(state.selection.open_id(), Some(&PromptId::from("ci")));

    let (_, actions) = send(&mut state, Event::CopySelected);
    let (request_id, text) = copy_request(&actions);
    assert_eq!(text, "Design a CI pipeline with caching.");

    let (render, actions) = send(
        &mut state,
        Event::ClipboardResult {
            request_id,
            outcome: CopyOutcome::Copied,
        },
    );
    assert!(render);
    assert_eq!(actions, vec![Action::ScheduleFeedbackExpiry { seconds: 0.5 }]);
    assert!(state.compute_viewmodel(30, 100).toast.is_some());

    send(&mut state, Event::FeedbackTimerElapsed);
    assert!(state.compute_viewmodel(30, 100).toast.is_none());
}

#[test]
fn repeated_copy_restarts_feedback() {
    let mut state = session();

    for _ in 0..2 {
        let (_, actions) = send(&mut state, Event::CopySelected);
        let (request_id, _) = copy_request(&actions);
        send(
            &mut state,
            Event::ClipboardResult {
                request_id,
                outcome: CopyOutcome::Copied,
            },
        );
    }
    assert!(state.feedback.is_visible());

    send(&mut state, Event::FeedbackTimerElapsed);
    assert!(state.feedback.is_visible(), "first timer was superseded");

    send(&mut state, Event::FeedbackTimerElapsed);
    assert!(!state.feedback.is_visible());
}

#[test]
fn failed_copy_shows_no_feedback() {
    let mut state = session();

    let (_, actions) = send(&mut state, Event::CopySelected);
    let (request_id, _) = copy_request(&actions);
    let (render, actions) = send(
        &mut state,
        Event::ClipboardResult {
            request_id,
            outcome: CopyOutcome::Failed("no clipboard tool".to_string()),
        },
    );

    assert!(!render);
    assert!(actions.is_empty());
    assert!(!state.feedback.is_visible());
}

#[test]
fn copy_and_close_returns_to_list() {
    let mut state = session();
    send(&mut state, Event::NextCategory);
    send(&mut state, Event::OpenSelected);
    assert!(state.selection.is_open());

    let (render, actions) = send(&mut state, Event::CopyAndClose);

    assert!(render);
    assert!(!state.selection.is_open());
    let (_, text) = copy_request(&actions);
    assert_eq!(text, "Write landing page copy for a SaaS product.");
}

#[test]
fn category_cycle_follows_first_appearance() {
    let mut state = session();
    let mut seen = Vec::new();

    for _ in 0..5 {
        send(&mut state, Event::NextCategory);
        seen.push(state.query.category.label().to_string());
    }

    assert_eq!(seen, ["Startup", "Frontend", "Backend", "DevOps", "All"]);
}

#[test]
fn worker_delivery_replaces_loading_state() {
    let mut state = AppState::new(Catalog::default(), Theme::default());
    state.loading = true;
    assert_eq!(
        state.compute_viewmodel(24, 80).empty_state.map(|e| e.message),
        Some("Loading prompts…".to_string())
    );

    let (render, _) = send(
        &mut state,
        Event::WorkerResponse(WorkerResponse::CatalogLoaded { prompts: library() }),
    );

    assert!(render);
    assert!(!state.loading);
    assert_eq!(state.catalog.len(), 7);
    assert_eq!(state.compute_viewmodel(24, 80).header.counts, "7 prompts");
}

#[test]
fn invalid_delivery_is_fatal_and_blocks_browsing() {
    let mut state = AppState::new(Catalog::default(), Theme::default());
    state.loading = true;

    let mut prompts = library();
    prompts.push(Prompt::new("api", "Duplicate", "Backend", "again"));
    send(
        &mut state,
        Event::WorkerResponse(WorkerResponse::CatalogLoaded { prompts }),
    );

    assert!(state.is_fatal());
    let vm = state.compute_viewmodel(24, 80);
    let fatal = vm.fatal.expect("fatal screen");
    assert!(fatal.message.contains("api"));

    let (render, actions) = send(&mut state, Event::SearchMode);
    assert!(!render && actions.is_empty());
    let (_, actions) = send(&mut state, Event::CloseFocus);
    assert_eq!(actions, vec![Action::CloseFocus]);
}

#[test]
fn rendering_every_screen_does_not_panic() {
    let mut state = session();
    promptfolio::ui::render(&state, 24, 80);

    send(&mut state, Event::OpenSelected);
    promptfolio::ui::render(&state, 24, 80);
    promptfolio::ui::render(&state, 5, 12);

    send(&mut state, Event::Close);
    send(&mut state, Event::SearchMode);
    type_text(&mut state, "nothing matches this");
    promptfolio::ui::render(&state, 24, 80);
    promptfolio::ui::render(&state, 1, 1);
}
