// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! At most [`MAX_VISIBLE`] toasts are shown (newest first); the rest wait in
//! a FIFO queue. Pushing a toast identical to one already pending replaces
//! it, so dropping the same unreadable file twice shows one toast with a
//! fresh timer.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::DiagnosticsHandle;
use std::collections::VecDeque;

const MAX_VISIBLE: usize = 3;

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
    /// Warnings and errors are mirrored here by message key.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows `notification`, or queues it when the screen is full.
    pub fn push(&mut self, notification: Notification) {
        if let Some(handle) = &self.diagnostics {
            if matches!(notification.severity(), Severity::Warning | Severity::Error) {
                handle.warn(notification.message_key());
            }
        }

        self.remove_where(|existing| existing.same_content(&notification));

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.remove_where(|n| n.id() == id)
    }

    /// Drops expired toasts. Called on every app tick.
    pub fn tick(&mut self) {
        self.remove_where(Notification::should_auto_dismiss);
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Removes notifications whose key starts with `prefix`.
    ///
    /// Used once a capture succeeds, so earlier read or camera errors do not
    /// linger over the next step.
    pub fn clear_matching(&mut self, prefix: &str) {
        self.remove_where(|n| n.message_key().starts_with(prefix));
    }

    /// Removes every notification matching `predicate`, then refills the
    /// visible list from the queue. Returns whether anything was removed.
    fn remove_where(&mut self, mut predicate: impl FnMut(&Notification) -> bool) -> bool {
        let before = self.visible.len() + self.queue.len();
        self.visible.retain(|n| !predicate(n));
        self.queue.retain(|n| !predicate(n));
        let removed = self.visible.len() + self.queue.len() < before;

        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(next) => self.visible.push_back(next),
                None => break,
            }
        }
        removed
    }
}
