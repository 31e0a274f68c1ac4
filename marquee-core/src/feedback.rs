//! Toast notifications
//!
//! [`ToastQueue`] keeps the toasts currently on screen. Time is passed in
//! explicitly; the [`Notifier`] impl stamps new toasts with `Instant::now()`.

use std::time::{Duration, Instant};

use marquee_contracts::notify::Notifier;
use marquee_model::Severity;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub shown_at: Instant,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    active: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
        now: Instant,
    ) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        let message = message.into();
        debug!(id = id.0, %severity, %message, "toast");
        self.active.push(Toast {
            id,
            message,
            severity,
            shown_at: now,
            expires_at: now + duration,
        });
        id
    }

    /// Drop toasts whose time is up; returns how many went.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.active.len();
        self.active.retain(|t| t.expires_at > now);
        before - self.active.len()
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.active.len();
        self.active.retain(|t| t.id != id);
        before != self.active.len()
    }

    /// Toasts on screen, oldest first.
    pub fn active(&self) -> &[Toast] {
        &self.active
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.active.last()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, message: &str, severity: Severity, duration: Duration) {
        self.push_at(message, severity, duration, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_contracts::notify::DEFAULT_NOTIFICATION_DURATION;

    #[test]
    fn toasts_expire_after_duration() {
        let mut q = ToastQueue::new();
        let t0 = Instant::now();
        q.push_at("a", Severity::Info, DEFAULT_NOTIFICATION_DURATION, t0);
        q.push_at("b", Severity::Success, Duration::from_secs(10), t0);

        assert_eq!(q.expire(t0 + Duration::from_millis(2999)), 0);
        assert_eq!(q.expire(t0 + Duration::from_millis(3000)), 1);
        assert_eq!(q.active()[0].message, "b");
    }

    #[test]
    fn dismiss_by_id() {
        let mut q = ToastQueue::new();
        q.success("Added to My List");
        let id = q.latest().unwrap().id;
        assert_eq!(q.latest().unwrap().severity, Severity::Success);
        assert!(q.dismiss(id));
        assert!(!q.dismiss(id));
        assert!(q.is_empty());
    }
}
