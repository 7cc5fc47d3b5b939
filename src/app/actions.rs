//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler stays pure: it mutates [`AppState`](crate::app::AppState)
//! and returns a `Vec<Action>` that the shim in `main.rs` executes against the
//! Zellij host, in order.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),

    /// Writes `text` to the system clipboard.
    ///
    /// The outcome comes back as
    /// [`Event::ClipboardResult`](crate::app::Event::ClipboardResult) with the
    /// same `request_id`.
    WriteClipboard {
        request_id: u64,
        text: String,
    },

    /// Schedules one feedback expiry timer.
    ///
    /// When it fires the shim sends
    /// [`Event::FeedbackTimerElapsed`](crate::app::Event::FeedbackTimerElapsed).
    ScheduleFeedbackExpiry {
        /// Delay in seconds, as expected by the host timer API.
        seconds: f64,
    },
}
