//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (`main.rs`) and the catalog, clipboard and
//! worker layers.
//!
//! ```text
//! User Input → Events → handle_event → State Mutations → Actions → Side Effects
//!                            ↑                                      ↓
//!                            └── Clipboard results / timers / worker ┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`feedback`]: Copy feedback with restartable expiry
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode and selection state machine types
//! - [`state`]: Central state container and view model computation
//!
//! # Example
//!
//! ```
//! use promptfolio::app::{handle_event, AppState, Event};
//! use promptfolio::catalog::Catalog;
//! use promptfolio::domain::Prompt;
//! use promptfolio::ui::Theme;
//!
//! let catalog = Catalog::new(vec![Prompt::new("a", "Alpha", "Backend", "body")])?;
//! let mut state = AppState::new(catalog, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::OpenSelected)?;
//! assert!(render && actions.is_empty());
//! # Ok::<(), promptfolio::PromptfolioError>(())
//! ```

pub mod actions;
pub mod feedback;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use feedback::CopyFeedback;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Selection};
pub use state::AppState;
