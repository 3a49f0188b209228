//! Toast notification model
//!
//! The queue keeps the newest [`MAX_NOTIFICATIONS`] toasts. The UI layer owns
//! timers and rendering.

use std::collections::VecDeque;

/// Maximum number of notifications shown at once
pub const MAX_NOTIFICATIONS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(3000),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(6000),
        }
    }
}

/// Notification item with unique ID for tracking
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Bounded queue of visible notifications
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    items: VecDeque<NotificationItem>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification, dropping the oldest past the limit. Returns its id.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(NotificationItem { id, notification });

        while self.items.len() > MAX_NOTIFICATIONS {
            self.items.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> impl Iterator<Item = &NotificationItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = NotificationQueue::new();
        let a = queue.push(Notification::info("a", ""));
        let b = queue.push(Notification::info("b", ""));
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_oldest_dropped_past_limit() {
        let mut queue = NotificationQueue::new();
        for i in 0..(MAX_NOTIFICATIONS + 2) {
            queue.push(Notification::info(format!("n{i}"), ""));
        }
        assert_eq!(queue.len(), MAX_NOTIFICATIONS);
        assert_eq!(queue.items().next().map(|i| i.notification.title.as_str()), Some("n2"));
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = NotificationQueue::new();
        let keep = queue.push(Notification::warning("keep", ""));
        let gone = queue.push(Notification::info("gone", ""));
        queue.dismiss(gone);
        queue.dismiss(999);
        let ids: Vec<_> = queue.items().map(|i| i.id).collect();
        assert_eq!(ids, vec![keep]);

        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_kinds_auto_dismiss() {
        assert_eq!(Notification::info("t", "m").auto_dismiss_ms, Some(3000));
        assert_eq!(Notification::warning("t", "m").kind, NotificationKind::Warning);
    }
}
