//! Transient "copied" feedback with restartable expiry.
//!
//! Every successful copy shows the feedback and schedules one host timer of the
//! same fixed duration. Host timers cannot be cancelled, but they fire in the
//! order they were scheduled, so each timer is matched to the copy that
//! scheduled it through a FIFO of generation tokens. Only the timer belonging
//! to the latest copy hides the feedback; earlier timers are spent silently.

use std::collections::VecDeque;
use std::time::Duration;

/// Default time the feedback stays visible after a copy.
pub const DEFAULT_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    visible: bool,
    generation: u64,
    pending: VecDeque<u64>,
    duration: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_DURATION)
    }
}

impl CopyFeedback {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            visible: false,
            generation: 0,
            pending: VecDeque::new(),
            duration,
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Number of scheduled timers that have not fired yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Shows the feedback and supersedes any pending expiry.
    ///
    /// Returns the delay after which the caller must deliver one
    /// [`expire_next`](Self::expire_next) call.
    pub fn trigger(&mut self) -> Duration {
        self.generation += 1;
        self.visible = true;
        self.pending.push_back(self.generation);
        self.duration
    }

    /// Consumes the oldest scheduled timer.
    ///
    /// Returns `true` when this hid the feedback, i.e. the timer belonged to
    /// the latest copy.
    pub fn expire_next(&mut self) -> bool {
        let Some(token) = self.pending.pop_front() else {
            return false;
        };

        if token == self.generation && self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_copy_hides_after_its_timer() {
        let mut feedback = CopyFeedback::default();
        assert_eq!(feedback.trigger(), Duration::from_millis(2000));
        assert!(feedback.is_visible());

        assert!(feedback.expire_next());
        assert!(!feedback.is_visible());
        assert_eq!(feedback.pending(), 0);
    }

    #[test]
    fn second_copy_restarts_the_duration() {
        let mut feedback = CopyFeedback::new(Duration::from_millis(500));
        feedback.trigger();
        feedback.trigger();

        // First timer belongs to the superseded copy.
        assert!(!feedback.expire_next());
        assert!(feedback.is_visible());

        assert!(feedback.expire_next());
        assert!(!feedback.is_visible());
    }

    #[test]
    fn stray_timer_is_ignored() {
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.expire_next());
        assert!(!feedback.is_visible());
    }
}
