//! Login form attempt tracking and retry throttle.
//!
//! DESIGN
//! ======
//! Consecutive rejections are counted per mounted form. Once the count reaches
//! the policy threshold, every further submit waits a fixed delay before the
//! request goes out. The attempt is never blocked outright.
//!
//! TRADE-OFFS
//! ==========
//! The counter lives in page memory only: a reload resets it and it is scoped
//! to one browser tab, not one account. It shapes UX; brute-force protection
//! belongs to the auth service.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::cell::RefCell;
use std::time::Duration;

use leptos::prelude::{RwSignal, Update};

pub const DEFAULT_FAILURE_THRESHOLD: u32 = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThrottlePolicy {
    /// Rejections after which submits are delayed.
    pub failure_threshold: u32,
    /// Pause applied before each delayed submit.
    pub retry_delay: Duration,
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self {
            failure_threshold: DEFAULT_FAILURE_THRESHOLD,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
        }
    }
}

impl ThrottlePolicy {
    /// Delay owed before the next attempt given the current failure count.
    pub fn delay_for(&self, consecutive_failures: u32) -> Option<Duration> {
        (consecutive_failures >= self.failure_threshold).then_some(self.retry_delay)
    }
}

/// Whether a new submit may start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitGate {
    /// A submit is already in flight.
    Busy,
    /// Go ahead, after sleeping `delay` if present.
    Proceed { delay: Option<Duration> },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginAttemptState {
    pub consecutive_failures: u32,
    pub submitting: bool,
}

impl LoginAttemptState {
    /// Open a submit cycle.
    pub fn begin_submit(&mut self, policy: &ThrottlePolicy) -> SubmitGate {
        if self.submitting {
            return SubmitGate::Busy;
        }
        self.submitting = true;
        SubmitGate::Proceed { delay: policy.delay_for(self.consecutive_failures) }
    }

    /// Credentials accepted.
    pub fn record_success(&mut self) {
        self.consecutive_failures = 0;
        self.submitting = false;
    }

    /// Credentials refused by the auth service.
    pub fn record_rejection(&mut self) {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        self.submitting = false;
    }

    /// Cycle ended without a verdict (unreachable service, local failure).
    pub fn finish(&mut self) {
        self.submitting = false;
    }
}

/// Owner of a [`LoginAttemptState`] that may disappear while a submit is
/// suspended. `try_modify` returns `None` once the owner is gone.
pub trait AttemptCell {
    fn try_modify<R>(&self, f: impl FnOnce(&mut LoginAttemptState) -> R) -> Option<R>;
}

impl AttemptCell for RwSignal<LoginAttemptState> {
    fn try_modify<R>(&self, f: impl FnOnce(&mut LoginAttemptState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl AttemptCell for RefCell<LoginAttemptState> {
    fn try_modify<R>(&self, f: impl FnOnce(&mut LoginAttemptState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
