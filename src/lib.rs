//! Promptfolio: a Zellij plugin for browsing and copying a catalog of AI prompts.
//!
//! Promptfolio shows a paginated, filterable list of prompt records:
//! - Case-insensitive search across title, description, content and tags
//! - Category chips with an `All` pseudo-category
//! - A detail overlay with the full prompt text
//! - One-key copy to the system clipboard with a timed confirmation toast
//! - A bundled prompt library, or a user JSON file read by a worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, paging, selection, feedback      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI (ui/)      │   │ Catalog       │   │ Worker        │
//! │ - Rendering   │   │ (catalog/)    │   │ (worker/)     │
//! │ - Theming     │   │ - Filtering   │   │ - File loads  │
//! │ - Components  │   │ - Paging      │   │ - IPC bridge  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Storage, Clipboard, Infrastructure         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use promptfolio::app::{handle_event, Event};
//! use promptfolio::{initialize, Config};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::SearchMode)?;
//! for c in "react".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! assert!(state.filtered().iter().all(|p| p.contains_lowercase("react")));
//! # Ok::<(), promptfolio::PromptfolioError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod clipboard;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Selection};
pub use domain::{Prompt, PromptId, PromptfolioError, Result};
pub use ui::Theme;

use crate::app::state::DEFAULT_PAGE_SIZE;
use crate::app::feedback::DEFAULT_FEEDBACK_DURATION;
use crate::catalog::Catalog;
use crate::clipboard::ClipboardCommand;
use crate::infrastructure::expand_tilde;
use crate::storage::{BundledSource, PromptSource};
use std::collections::BTreeMap;
use std::time::Duration;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/promptfolio.wasm" {
///     prompts_file "~/.config/promptfolio/prompts.json"
///     page_size "12"
///     copy_feedback_ms "2000"
///     clipboard_command "wl-copy"
///     theme "catppuccin-mocha"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON dataset to load instead of the bundled library, already mapped
    /// into the sandbox (`~` becomes `/host`).
    pub prompts_file: Option<String>,

    /// Records per page. Always at least 1.
    pub page_size: usize,

    /// How long the "Copied to clipboard!" toast stays up.
    pub copy_feedback: Duration,

    pub clipboard_command: ClipboardCommand,

    /// Built-in theme name (`slate`, `catppuccin-mocha`). Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompts_file: None,
            page_size: DEFAULT_PAGE_SIZE,
            copy_feedback: DEFAULT_FEEDBACK_DURATION,
            clipboard_command: ClipboardCommand::auto(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable values are logged and replaced by their defaults; nothing
    /// here fails.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use promptfolio::Config;
    ///
    /// let map = BTreeMap::from([
    ///     ("prompts_file".to_string(), "~/prompts.json".to_string()),
    ///     ("page_size".to_string(), "6".to_string()),
    /// ]);
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.prompts_file.as_deref(), Some("/host/prompts.json"));
    /// assert_eq!(config.page_size, 6);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        let page_size = non_blank("page_size").map_or(DEFAULT_PAGE_SIZE, |raw| {
            parse_number::<usize>("page_size", raw)
                .and_then(|size| {
                    if size == 0 {
                        Err(PromptfolioError::Config("`page_size` must be at least 1".to_string()))
                    } else {
                        Ok(size)
                    }
                })
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "using default page_size");
                    DEFAULT_PAGE_SIZE
                })
        });

        let copy_feedback = non_blank("copy_feedback_ms").map_or(DEFAULT_FEEDBACK_DURATION, |raw| {
            parse_number::<u64>("copy_feedback_ms", raw).map_or_else(
                |e| {
                    tracing::warn!(error = %e, "using default copy_feedback_ms");
                    DEFAULT_FEEDBACK_DURATION
                },
                Duration::from_millis,
            )
        });

        Self {
            prompts_file: non_blank("prompts_file").map(expand_tilde),
            page_size,
            copy_feedback,
            clipboard_command: ClipboardCommand::from_config(non_blank("clipboard_command")),
            theme_name: non_blank("theme").map(String::from),
            theme_file: non_blank("theme_file").map(expand_tilde),
            trace_level: non_blank("trace_level").map(String::from),
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| PromptfolioError::Config(format!("`{key}` expects a whole number, got `{raw}`")))
}

/// Resolves the theme: `theme_file`, then `theme_name`, then the default.
fn resolve_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        match Theme::from_file(theme_file) {
            Ok(theme) => return theme,
            Err(e) => {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
            }
        }
    } else if let Some(theme_name) = &config.theme_name {
        match Theme::from_name(theme_name) {
            Some(theme) => return theme,
            None => tracing::warn!(theme_name = %theme_name, "unknown theme, using default"),
        }
    }
    Theme::default()
}

/// Builds the initial application state.
///
/// Without a `prompts_file` the bundled library is loaded right away. With
/// one, the state starts in the loading mode and [`Event::PermissionsGranted`]
/// asks the worker for the file.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(prompts_file = ?config.prompts_file, "initializing promptfolio plugin");

    let mut state = AppState::new(Catalog::default(), resolve_theme(config))
        .with_page_size(config.page_size)
        .with_feedback_duration(config.copy_feedback);

    if let Some(path) = &config.prompts_file {
        return state.with_catalog_path(path.clone());
    }

    match BundledSource.load() {
        Ok(prompts) => {
            // Validation failures are recorded in the state as fatal.
            let _ = state.load_catalog(prompts);
        }
        Err(e) => state.fail_load(&e),
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.prompts_file, None);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.copy_feedback, DEFAULT_FEEDBACK_DURATION);
        assert_eq!(config.clipboard_command, ClipboardCommand::auto());
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = Config::from_zellij(&map(&[("page_size", "0"), ("copy_feedback_ms", "soon")]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.copy_feedback, DEFAULT_FEEDBACK_DURATION);

        let config = Config::from_zellij(&map(&[("page_size", "-3")]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn number_errors_name_the_key() {
        let err = parse_number::<usize>("page_size", "many").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: `page_size` expects a whole number, got `many`"
        );
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("prompts_file", " ~/prompts.json "),
            ("page_size", "5"),
            ("copy_feedback_ms", "750"),
            ("clipboard_command", "wl-copy"),
            ("theme", "catppuccin-mocha"),
            ("theme_file", ""),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.prompts_file.as_deref(), Some("/host/prompts.json"));
        assert_eq!(config.page_size, 5);
        assert_eq!(config.copy_feedback, Duration::from_millis(750));
        assert_eq!(config.clipboard_command, ClipboardCommand::custom("wl-copy"));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-mocha"));
        assert_eq!(config.theme_file, None);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn initialize_loads_bundled_catalog() {
        let state = initialize(&Config::default());
        assert!(!state.loading);
        assert_eq!(state.catalog_path, None);
        assert!(!state.is_fatal());
        assert!(!state.catalog.is_empty());
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn initialize_waits_for_file_catalog() {
        let config = Config {
            prompts_file: Some("/host/prompts.json".to_string()),
            page_size: 4,
            ..Config::default()
        };

        let state = initialize(&config);
        assert!(state.loading);
        assert!(state.catalog.is_empty());
        assert_eq!(state.catalog_path.as_deref(), Some("/host/prompts.json"));
        assert_eq!(state.page_size, 4);
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config).name, Theme::default().name);

        let config = Config {
            theme_name: Some("catppuccin-mocha".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config).name, "catppuccin-mocha");
    }
}
