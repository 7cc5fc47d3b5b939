//! Input mode and selection state machine types.
//!
//! # State Machine
//!
//! Input is interpreted in one of two modes:
//! - **Normal**: list navigation and commands
//! - **Search**: keystrokes edit the search text
//!
//! Independently, at most one record is open in the detail overlay:
//!
//! ```text
//! Closed ──open(r)──▶ Open(r) ──close / copy-and-close──▶ Closed
//!                      │  ▲
//!                      └──┘ open(r2) replaces r
//! ```

use crate::domain::PromptId;

/// Current input handling mode.
///
/// Controls which keybindings are active and which footer hints are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// j/k move, h/l page, Tab switches category, / searches, Enter opens.
    #[default]
    Normal,

    /// Printable characters append to the query; Enter or Esc return to Normal.
    Search,
}

/// Which record, if any, is open in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,

    Open {
        /// The open record.
        id: PromptId,
        /// First visible line of the wrapped content.
        scroll: usize,
    },
}

impl Selection {
    /// Opens `id`, replacing any open record and resetting the scroll.
    pub fn open(&mut self, id: PromptId) {
        *self = Self::Open { id, scroll: 0 };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub const fn open_id(&self) -> Option<&PromptId> {
        match self {
            Self::Open { id, .. } => Some(id),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub const fn scroll(&self) -> usize {
        match self {
            Self::Open { scroll, .. } => *scroll,
            Self::Closed => 0,
        }
    }

    /// Sets the scroll offset of the open record; no-op when closed.
    pub fn set_scroll(&mut self, value: usize) {
        if let Self::Open { scroll, .. } = self {
            *scroll = value;
        }
    }
}
