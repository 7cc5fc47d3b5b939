//! Zellij plugin entry point.
//!
//! Thin shim between the host and the library: host events are mapped to
//! [`Event`]s, fed through [`handle_event`], and the returned [`Action`]s are
//! carried out with host calls. All behavior lives in the library crate.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use promptfolio::clipboard::{ClipboardCommand, CopyOutcome};
use promptfolio::worker::{PromptfolioWorker, WorkerMessage, WorkerResponse};
use promptfolio::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);
register_worker!(PromptfolioWorker, promptfolio_worker, PROMPTFOLIO_WORKER);

struct State {
    app: promptfolio::AppState,

    clipboard: ClipboardCommand,

    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: promptfolio::initialize(&default_config),
            clipboard: default_config.clipboard_command,
            worker_name: "promptfolio".to_string(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        promptfolio::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(
            prompts_file = ?config.prompts_file,
            page_size = config.page_size,
            clipboard = config.clipboard_command.pipeline(),
            "parsed configuration"
        );

        self.app = promptfolio::initialize(&config);
        self.clipboard = config.clipboard_command;

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::RunCommands,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::RunCommandResult,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => Event::FeedbackTimerElapsed,
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                match Self::map_command_result_event(exit_code, &stderr, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Self::map_permission_event(permissions)
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                true
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        promptfolio::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.is_fatal() {
            return match key.bare_key {
                BareKey::Char('q') | BareKey::Esc => Some(Event::CloseFocus),
                _ => None,
            };
        }
        if self.app.selection.is_open() {
            return Self::map_detail_key(key);
        }
        match self.app.input_mode {
            InputMode::Search => Self::map_search_key(key),
            InputMode::Normal => Self::map_list_key(key),
        }
    }

    fn map_detail_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Char('y') => Event::CopySelected,
            BareKey::Enter => Event::CopyAndClose,
            BareKey::Esc | BareKey::Char('q') => Event::Close,
            BareKey::Down | BareKey::Char('j') => Event::ScrollDetailDown,
            BareKey::Up | BareKey::Char('k') => Event::ScrollDetailUp,
            _ => return None,
        })
    }

    fn map_search_key(key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('u') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::ClearSearch);
        }

        Some(match key.bare_key {
            BareKey::Enter | BareKey::Esc => Event::ExitSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_list_key(key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::PreviousCategory);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Right | BareKey::PageDown | BareKey::Char('l') => Event::NextPage,
            BareKey::Left | BareKey::PageUp | BareKey::Char('h') => Event::PreviousPage,
            BareKey::Char(digit @ '1'..='9') => {
                Event::GoToPage(digit.to_digit(10).map_or(1, |d| d as usize))
            }
            BareKey::Tab | BareKey::Char('c') => Event::NextCategory,
            BareKey::Char('C') => Event::PreviousCategory,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Esc => Event::ClearSearch,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Char('y') => Event::CopySelected,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_permission_event(permissions: PermissionStatus) -> Event {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                Event::PermissionsGranted
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - clipboard and file loading unavailable");
                Event::PermissionsDenied
            }
        }
    }

    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn map_command_result_event(
        exit_code: Option<i32>,
        stderr: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(request_id) = ClipboardCommand::request_id_from_context(context) else {
            tracing::debug!(exit_code = ?exit_code, "ignoring command result without clipboard context");
            return None;
        };

        Some(Event::ClipboardResult {
            request_id,
            outcome: CopyOutcome::from_exit(exit_code, stderr),
        })
    }

    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::WriteClipboard { request_id, text } => {
                tracing::debug!(request_id, bytes = text.len(), "writing clipboard");
                let argv = self.clipboard.argv(text);
                let argv: Vec<&str> = argv.iter().map(String::as_str).collect();
                run_command(&argv, ClipboardCommand::context(*request_id));
            }
            Action::ScheduleFeedbackExpiry { seconds } => {
                set_timeout(*seconds);
            }
            Action::PostToWorker(message) => {
                self.post_worker_message(message);
            }
        }
    }
}
