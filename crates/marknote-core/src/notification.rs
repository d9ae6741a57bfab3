//! Transient user notifications.

use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class for this kind
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
        }
    }
}

/// A toast message waiting to be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// A toast on screen together with the moment it expires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: u64,
    pub toast: Toast,
    pub expires_at: Instant,
}

/// Toasts currently on screen, oldest first.
///
/// Expiry is tracked as data so whoever owns the queue can sweep it, no
/// matter which screen raised the toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    active: Vec<ActiveToast>,
    next_id: u64,
}

impl ToastQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `toast` from `now` until [`TOAST_DURATION`] has passed
    pub fn push(&mut self, toast: Toast, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(ActiveToast {
            id,
            toast,
            expires_at: now + TOAST_DURATION,
        });
        id
    }

    /// Remove a toast before it expires
    pub fn dismiss(&mut self, id: u64) {
        self.active.retain(|active| active.id != id);
    }

    /// Whether any toast is due for removal at `now`
    #[must_use]
    pub fn has_expired(&self, now: Instant) -> bool {
        self.active.iter().any(|active| active.expires_at <= now)
    }

    /// Drop every toast whose deadline has passed
    pub fn expire(&mut self, now: Instant) {
        self.active.retain(|active| active.expires_at > now);
    }

    #[must_use]
    pub fn active(&self) -> &[ActiveToast] {
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn messages(queue: &ToastQueue) -> Vec<&str> {
        queue
            .active()
            .iter()
            .map(|active| active.toast.message.as_str())
            .collect()
    }

    #[test]
    fn toast_classes() {
        assert_eq!(Toast::success("ok").kind.class(), "toast-success");
        assert_eq!(Toast::error("no").kind.class(), "toast-error");
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let now = Instant::now();
        let mut queue = ToastQueue::new();
        let first = queue.push(Toast::success("one"), now);
        let second = queue.push(Toast::error("two"), now);
        assert!(second > first);
        assert_eq!(messages(&queue), vec!["one", "two"]);
    }

    #[test]
    fn toast_stays_until_duration_elapses() {
        let shown = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push(Toast::success("Registration Successful"), shown);

        // Leaving the screen that raised the toast does not touch the queue
        let after_redirect = shown + Duration::from_millis(2000);
        assert!(!queue.has_expired(after_redirect));
        queue.expire(after_redirect);
        assert_eq!(messages(&queue), vec!["Registration Successful"]);

        let later = shown + TOAST_DURATION;
        assert!(queue.has_expired(later));
        queue.expire(later);
        assert!(queue.active().is_empty());
    }

    #[test]
    fn expire_keeps_younger_toasts() {
        let start = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push(Toast::error("old"), start);
        queue.push(Toast::error("new"), start + Duration::from_secs(3));

        queue.expire(start + TOAST_DURATION);
        assert_eq!(messages(&queue), vec!["new"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let now = Instant::now();
        let mut queue = ToastQueue::new();
        let first = queue.push(Toast::error("first"), now);
        queue.push(Toast::error("second"), now);

        queue.dismiss(first);
        assert_eq!(messages(&queue), vec!["second"]);
    }
}
