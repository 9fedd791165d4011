//! Single-slot debounce timer
//!
//! Holds at most one pending payload with a deadline. Scheduling replaces
//! whatever was pending, so only the last payload in a burst ever fires.
//! Time is supplied by the caller, which keeps the timer deterministic and
//! lets the UI loop poll it alongside other events.

use std::time::{Duration, Instant};

/// Pending payload and the instant it becomes due
#[derive(Debug, Clone)]
struct Pending<T> {
    deadline: Instant,
    payload: T,
}

/// Debounce timer with a single pending slot
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period in milliseconds
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    /// Schedule `payload` to fire one quiet period after `now`
    ///
    /// Any previously pending payload is dropped. Returns true if something
    /// was replaced.
    pub fn schedule(&mut self, payload: T, now: Instant) -> bool {
        let replaced = self.pending.is_some();
        self.pending = Some(Pending {
            deadline: now + self.delay,
            payload,
        });
        replaced
    }

    /// Drop the pending payload, if any
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending payload fires (zero once due)
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(now))
    }

    /// Take the pending payload if its quiet period has elapsed
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.payload),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
