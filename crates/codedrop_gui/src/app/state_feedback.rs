//! UI-facing feedback helpers: toasts and the copy button's confirmation window.

use super::{CodeDropApp, ToastMessage, TOAST_LIMIT, TOAST_TTL};
use codedrop_core::constants::COPY_FEEDBACK_DURATION;
use std::time::{Duration, Instant};

/// Tracks when content was last copied so the button can show confirmation.
#[derive(Debug, Default, Clone, Copy)]
pub(super) struct CopyFeedback {
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    /// Start the confirmation window.
    ///
    /// A copy while the window is still open keeps the original deadline.
    pub(super) fn trigger(&mut self, now: Instant) {
        if !self.is_active(now) {
            self.copied_at = Some(now);
        }
    }

    pub(super) fn reset(&mut self) {
        self.copied_at = None;
    }

    pub(super) fn is_active(&self, now: Instant) -> bool {
        self.remaining(now).is_some()
    }

    /// Time left before the label reverts, if the window is still open.
    pub(super) fn remaining(&self, now: Instant) -> Option<Duration> {
        let copied_at = self.copied_at?;
        let elapsed = now.saturating_duration_since(copied_at);
        COPY_FEEDBACK_DURATION
            .checked_sub(elapsed)
            .filter(|left| !left.is_zero())
    }
}

impl CodeDropApp {
    /// Queue a toast showing the translation of `key`.
    ///
    /// Repeating the most recent toast refreshes its lifetime instead of
    /// stacking a duplicate.
    pub(super) fn push_toast(&mut self, key: &'static str) {
        let now = Instant::now();
        if let Some(last) = self.toasts.back_mut() {
            if last.key == key {
                last.expires_at = now + TOAST_TTL;
                return;
            }
        }
        self.toasts.push_back(ToastMessage {
            key,
            expires_at: now + TOAST_TTL,
        });
        while self.toasts.len() > TOAST_LIMIT {
            self.toasts.pop_front();
        }
    }

    pub(super) fn expire_toasts(&mut self, now: Instant) {
        while self
            .toasts
            .front()
            .map(|toast| now >= toast.expires_at)
            .unwrap_or(false)
        {
            self.toasts.pop_front();
        }
    }

    /// Copy `text` to the clipboard on the next frame and start the
    /// confirmation window.
    pub(super) fn copy_to_clipboard(&mut self, text: String, now: Instant) {
        self.clipboard_outgoing = Some(text);
        self.copy_feedback.trigger(now);
    }
}
