//! Debounce and throttle driven by caller-supplied instants.

use std::time::{Duration, Instant};

/// Holds the latest value until `wait` passes with no newer call.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Record a call, replacing any pending value and restarting the wait.
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value once its wait has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.wait => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.wait)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Lets a call through at most once per `limit`.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self { limit, last: None }
    }

    /// Whether a call at `now` may run. Dropped calls do not reset the
    /// window.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        let ready = self
            .last
            .is_none_or(|last| now.saturating_duration_since(last) >= self.limit);
        if ready {
            self.last = Some(now);
        }
        ready
    }
}
